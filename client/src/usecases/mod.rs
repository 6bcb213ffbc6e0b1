//! Use cases - one per resource area
//!
//! Thin, stateless per-call adapters over the repositories and the
//! single point where wire DTOs become domain models, so nothing above
//! this layer ever sees wire-shaped types. Derived display values
//! (target-vs-actual percentages) deliberately do not live here: they
//! are recomputed downstream from the raw totals and the user's current
//! targets every time they are shown.

mod diet;
mod food;
mod notification;
mod reminder;
mod stats;
mod user;

pub use diet::DietUseCase;
pub use food::FoodUseCase;
pub use notification::{NotificationUseCase, RegistrationOutcome};
pub use reminder::ReminderUseCase;
pub use stats::StatsUseCase;
pub use user::UserUseCase;

use dietly_shared::errors::NetworkError;
use validator::Validate;

/// Check a request DTO before it is ever put on the wire. Failures use
/// the same message-carrying error the transport produces, so the
/// presentation layer always has a string to show.
pub(crate) fn validate_request(request: &impl Validate) -> Result<(), NetworkError> {
    request
        .validate()
        .map_err(|err| NetworkError::RequestFailed(format!("invalid request: {}", err)))
}
