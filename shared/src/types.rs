//! Wire-level request and response types
//!
//! Everything here mirrors the server's JSON exactly (camelCase keys).
//! Optional fields are explicit: a field the server may omit is an
//! `Option` with a serde default, never a silently coerced value.

use crate::errors::NetworkError;
use crate::models::{DayOfWeek, MealType};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Response envelope wrapped around every payload.
///
/// `data` is absent on empty-payload successes (e.g. user creation),
/// so unwrapping it is the caller's explicit choice.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: Deserialize<'de>"
))]
pub struct ApiEnvelope<T> {
    pub status: String,
    pub message: String,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub server_datetime: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the `data` payload, failing with the envelope's own
    /// message when the server returned none.
    pub fn into_data(self) -> Result<T, NetworkError> {
        self.data.ok_or_else(|| {
            NetworkError::RequestFailed(format!(
                "response envelope carried no data: {}",
                self.message
            ))
        })
    }
}

/// Paged collection as returned by search-style endpoints.
///
/// `totalPages` is omitted by some endpoints; `total_pages()` falls back
/// to computing it from the item count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    pub total_items: u64,
    pub current_page: u32,
    pub items_per_page: u32,
    #[serde(default)]
    pub total_pages: Option<u32>,
    pub items: Vec<T>,
}

impl<T> PagedResult<T> {
    /// Total page count, derived when the server omitted it. The
    /// division happens in u64 so a large item count cannot wrap.
    pub fn total_pages(&self) -> u32 {
        match self.total_pages {
            Some(n) => n,
            None if self.items_per_page == 0 => 0,
            None => self.total_items.div_ceil(self.items_per_page as u64) as u32,
        }
    }

    /// The contract used by paginating callers: the page that satisfies
    /// `currentPage == totalPages` is the last one.
    pub fn is_last_page(&self) -> bool {
        self.current_page == self.total_pages()
    }
}

// ============================================================================
// User
// ============================================================================

/// `POST /api/v1/users` request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub uuid: String,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub gender: String,
    #[validate(range(min = 1, max = 150))]
    pub age: i32,
    #[validate(range(min = 50.0, max = 300.0))]
    pub height: f64,
    #[validate(range(min = 10.0, max = 500.0))]
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub activity_level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smi: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_calorie: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_smi: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_fat_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_type: Option<String>,
}

/// `PUT /api/v1/users/{id}` request body. Every field optional; the
/// server leaves omitted fields untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_calorie: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_smi: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_fat_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_carbohydrates: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_protein: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_fat: Option<f64>,
}

/// User resource as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub uuid: String,
    pub name: String,
    pub gender: String,
    pub age: i32,
    pub height: f64,
    pub weight: f64,
    #[serde(default)]
    pub email: Option<String>,
    pub activity_level: String,
    #[serde(default)]
    pub smi: Option<f64>,
    #[serde(default)]
    pub fat_percentage: Option<f64>,
    #[serde(default)]
    pub target_weight: Option<f64>,
    #[serde(default)]
    pub target_calorie: Option<f64>,
    #[serde(default)]
    pub target_smi: Option<f64>,
    #[serde(default)]
    pub target_fat_percentage: Option<f64>,
    #[serde(default)]
    pub target_carbohydrates: Option<f64>,
    #[serde(default)]
    pub target_protein: Option<f64>,
    #[serde(default)]
    pub target_fat: Option<f64>,
    #[serde(default)]
    pub provider_id: Option<String>,
    #[serde(default)]
    pub provider_type: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Food
// ============================================================================

/// `POST /api/v1/foods` request body. Calories are derived server-side
/// from the macros, so they are not part of the creation contract.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateFoodRequest {
    pub uuid: String,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(range(min = 0.1))]
    pub serving_size: f64,
    #[validate(length(min = 1))]
    pub unit: String,
    #[validate(range(min = 0.0))]
    pub carbohydrates: f64,
    #[validate(range(min = 0.0))]
    pub protein: f64,
    #[validate(range(min = 0.0))]
    pub fat: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

/// Food resource as returned by search and creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FoodItemResponse {
    pub id: i64,
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    pub serving_size: f64,
    pub unit: String,
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub carbohydrates: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub fat: f64,
    /// Moderation flag; unapproved items default to `false`.
    #[serde(default)]
    pub approved: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Diet
// ============================================================================

/// One food line inside a logged meal, carrying the nutrition snapshot
/// taken at logging time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FoodLineItemResponse {
    pub food_id: i64,
    #[serde(default)]
    pub food_name: String,
    pub intake: f64,
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub carbohydrates: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub fat: f64,
}

/// One logged meal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DietEntryResponse {
    pub id: i64,
    pub meal_type: MealType,
    pub consumed_at: DateTime<Utc>,
    #[serde(default)]
    pub foods: Vec<FoodLineItemResponse>,
}

/// Food line input when logging a meal. Nutrition values are the
/// snapshot the client computed from the chosen food and intake.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DietFoodInput {
    pub food_id: i64,
    #[validate(range(min = 0.0))]
    pub intake: f64,
    #[validate(range(min = 0.0))]
    pub calories: f64,
    #[validate(range(min = 0.0))]
    pub carbohydrates: f64,
    #[validate(range(min = 0.0))]
    pub protein: f64,
    #[validate(range(min = 0.0))]
    pub fat: f64,
}

/// `POST /api/v1/diets` request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateDietRequest {
    pub user_id: i64,
    pub meal_type: MealType,
    pub consumed_at: DateTime<Utc>,
    #[validate(length(min = 1))]
    pub foods: Vec<DietFoodInput>,
}

// ============================================================================
// Notification
// ============================================================================

/// `POST /api/v1/notifications` request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotificationRequest {
    pub agent_id: String,
    pub os_type: String,
    pub device_name: String,
    pub is_active: bool,
}

/// Registered push-notification device.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    pub id: i64,
    #[serde(default)]
    pub user_id: i64,
    pub agent_id: String,
    pub os_type: String,
    pub device_name: String,
    pub is_active: bool,
}

// ============================================================================
// Reminder
// ============================================================================

/// Request body shared by reminder creation and update.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderRequest {
    #[validate(length(min = 1, max = 200))]
    pub content: String,
    pub send_time: NaiveTime,
    pub is_active: bool,
    #[validate(length(min = 1))]
    pub day_of_weeks: Vec<DayOfWeek>,
}

/// Reminder resource as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderResponse {
    pub id: i64,
    pub content: String,
    pub send_time: NaiveTime,
    pub is_active: bool,
    pub day_of_weeks: Vec<DayOfWeek>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Stats
// ============================================================================

/// Aggregated nutrition sample for one period.
///
/// The `type` discriminator stays a raw string here; mapping to the
/// closed `Period` enum (with its defined fallback) happens in the
/// stats use case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatsSampleResponse {
    #[serde(rename = "type")]
    pub period_type: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub carbohydrates: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub fat: f64,
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// The derived page count always covers every item, and never
        /// overshoots by more than one page.
        #[test]
        fn prop_derived_total_pages_covers_all_items(
            total_items in 0u64..100_000,
            items_per_page in 1u32..500,
        ) {
            let page: PagedResult<()> = PagedResult {
                total_items,
                current_page: 0,
                items_per_page,
                total_pages: None,
                items: vec![],
            };
            let pages = page.total_pages() as u64;
            prop_assert!(pages * items_per_page as u64 >= total_items);
            prop_assert!(pages.saturating_sub(1) * items_per_page as u64 <= total_items);
        }
    }
}
