//! Dietly client core - data access for the Dietly diet-tracking app
//!
//! Layered front to back: an endpoint catalog describing every remote
//! operation, a transport client that executes descriptors and unwraps
//! the response envelope, repositories giving each resource area a
//! typed async surface, and use cases that map wire DTOs into the
//! domain models the presentation layer consumes. A small file-backed
//! identity store keeps the install-scoped user UUID.
//!
//! The crate performs no retries and no response caching; every call
//! is a single request whose failure is reported to the caller.

pub mod config;
pub mod endpoints;
pub mod repositories;
pub mod state;
pub mod store;
pub mod transport;
pub mod usecases;

pub use config::ClientConfig;
pub use state::AppState;
