//! Dietly Shared Library
//!
//! This crate contains the wire DTOs, domain models, error taxonomy and
//! validation helpers shared by the client data-access layer and any
//! embedding application.

pub mod errors;
pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use models::*;
pub use types::*;
