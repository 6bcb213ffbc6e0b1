//! Repositories - one per resource area
//!
//! Each repository translates a domain-level request into an endpoint
//! catalog lookup plus one transport call, then unwraps the response
//! envelope into its `data` payload. No retries, no interpretation of
//! error messages; the user repository additionally fronts the local
//! identity store, since user identity is the one piece of
//! client-durable state tied to a resource area.

mod diet;
mod food;
mod notification;
mod reminder;
mod stats;
mod user;

pub use diet::{DietRepository, HttpDietRepository};
pub use food::{FoodRepository, HttpFoodRepository};
pub use notification::{HttpNotificationRepository, NotificationRepository};
pub use reminder::{HttpReminderRepository, ReminderRepository};
pub use stats::{HttpStatsRepository, StatsRepository};
pub use user::{HttpUserRepository, UserRepository};
