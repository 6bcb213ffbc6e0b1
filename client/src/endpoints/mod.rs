//! Endpoint catalog
//!
//! Pure, total mappings from a resource-area operation plus its typed
//! arguments to `(path, method, parameters)`. Keeping every URL and
//! encoding literal here is what lets the repositories stay free of
//! them. Nothing in this module performs I/O.

mod diet;
mod food;
mod notification;
mod reminder;
mod stats;
mod user;

pub use diet::DietEndpoint;
pub use food::FoodEndpoint;
pub use notification::NotificationEndpoint;
pub use reminder::ReminderEndpoint;
pub use stats::StatsEndpoint;
pub use user::UserEndpoint;
