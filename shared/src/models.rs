//! Domain models for the Dietly application
//!
//! These are the internal representations the application works with
//! after wire DTOs have been mapped, which happens exactly once, at the
//! use-case boundary. The `from_dto` constructors next to each model are
//! that mapping.

use crate::types::{
    DietEntryResponse, FoodItemResponse, FoodLineItemResponse, NotificationResponse, PagedResult,
    ReminderResponse, StatsSampleResponse, UserResponse,
};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Gender as stored on the user profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unspecified,
}

impl Gender {
    /// Map the wire string; anything unrecognized is `Unspecified`.
    pub fn from_wire(value: &str) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "MALE" => Gender::Male,
            "FEMALE" => Gender::Female,
            _ => Gender::Unspecified,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::Unspecified => "UNSPECIFIED",
        }
    }
}

/// Activity level, each with its fixed TDEE coefficient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    #[default]
    Unspecified,
}

impl ActivityLevel {
    /// Fixed multiplier applied to basal metabolic rate.
    pub fn coefficient(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::Unspecified => 1.0,
        }
    }

    /// Map the wire string; anything unrecognized is `Unspecified`.
    pub fn from_wire(value: &str) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "SEDENTARY" => ActivityLevel::Sedentary,
            "LIGHT" => ActivityLevel::Light,
            "MODERATE" => ActivityLevel::Moderate,
            "ACTIVE" => ActivityLevel::Active,
            _ => ActivityLevel::Unspecified,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "SEDENTARY",
            ActivityLevel::Light => "LIGHT",
            ActivityLevel::Moderate => "MODERATE",
            ActivityLevel::Active => "ACTIVE",
            ActivityLevel::Unspecified => "UNSPECIFIED",
        }
    }
}

/// Meal slot for a logged diet entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

/// Day-of-week set member for reminder schedules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Stats aggregation period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Period {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Period {
    /// Map the wire `type` string. Unrecognized values fall back to
    /// `Daily`; this is the defined behavior, not an error path.
    pub fn from_wire(value: &str) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "DAILY" => Period::Daily,
            "WEEKLY" => Period::Weekly,
            "MONTHLY" => Period::Monthly,
            _ => Period::Daily,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            Period::Daily => "DAILY",
            Period::Weekly => "WEEKLY",
            Period::Monthly => "MONTHLY",
        }
    }
}

/// Macro-nutrient totals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Nutrition {
    pub calories: f64,
    pub carbohydrates: f64,
    pub protein: f64,
    pub fat: f64,
}

impl Nutrition {
    pub fn add(&self, other: &Nutrition) -> Nutrition {
        Nutrition {
            calories: self.calories + other.calories,
            carbohydrates: self.carbohydrates + other.carbohydrates,
            protein: self.protein + other.protein,
            fat: self.fat + other.fat,
        }
    }

    /// Scale per-serving values by an intake quantity.
    pub fn scale(&self, factor: f64) -> Nutrition {
        Nutrition {
            calories: self.calories * factor,
            carbohydrates: self.carbohydrates * factor,
            protein: self.protein * factor,
            fat: self.fat * factor,
        }
    }
}

/// User identity, demographics and goal attributes.
///
/// `client_uuid` is generated once per device install and is the join
/// key between the local identity store and the remote user resource.
/// `server_id` is only known after the first successful creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub server_id: i64,
    pub client_uuid: String,
    pub name: String,
    pub gender: Gender,
    pub age: i32,
    pub height: f64,
    pub weight: f64,
    pub email: Option<String>,
    pub activity_level: ActivityLevel,
    pub smi: Option<f64>,
    pub fat_percentage: Option<f64>,
    pub target_weight: Option<f64>,
    pub target_calorie: Option<f64>,
    pub target_smi: Option<f64>,
    pub target_fat_percentage: Option<f64>,
    pub target_carbohydrates: Option<f64>,
    pub target_protein: Option<f64>,
    pub target_fat: Option<f64>,
    pub provider_id: Option<String>,
    pub provider_type: Option<String>,
}

impl UserProfile {
    pub fn from_dto(dto: UserResponse) -> Self {
        Self {
            server_id: dto.id,
            client_uuid: dto.uuid,
            name: dto.name,
            gender: Gender::from_wire(&dto.gender),
            age: dto.age,
            height: dto.height,
            weight: dto.weight,
            email: dto.email,
            activity_level: ActivityLevel::from_wire(&dto.activity_level),
            smi: dto.smi,
            fat_percentage: dto.fat_percentage,
            target_weight: dto.target_weight,
            target_calorie: dto.target_calorie,
            target_smi: dto.target_smi,
            target_fat_percentage: dto.target_fat_percentage,
            target_carbohydrates: dto.target_carbohydrates,
            target_protein: dto.target_protein,
            target_fat: dto.target_fat,
            provider_id: dto.provider_id,
            provider_type: dto.provider_type,
        }
    }
}

/// Onboarding input for creating the remote user resource.
///
/// The client UUID is intentionally absent here: it is minted and
/// persisted by the user use case before the first network call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUserProfile {
    pub name: String,
    pub gender: Gender,
    pub age: i32,
    pub height: f64,
    pub weight: f64,
    pub email: Option<String>,
    pub activity_level: ActivityLevel,
    pub smi: Option<f64>,
    pub fat_percentage: Option<f64>,
    pub target_weight: Option<f64>,
    pub target_calorie: Option<f64>,
    pub target_smi: Option<f64>,
    pub target_fat_percentage: Option<f64>,
    pub provider_id: Option<String>,
    pub provider_type: Option<String>,
}

/// Partial profile update; `None` fields are left untouched server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub gender: Option<Gender>,
    pub age: Option<i32>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub activity_level: Option<ActivityLevel>,
    pub target_weight: Option<f64>,
    pub target_calorie: Option<f64>,
    pub target_smi: Option<f64>,
    pub target_fat_percentage: Option<f64>,
    pub target_carbohydrates: Option<f64>,
    pub target_protein: Option<f64>,
    pub target_fat: Option<f64>,
}

/// Input for creating a custom food record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFood {
    pub name: String,
    pub brand: Option<String>,
    pub serving_size: f64,
    pub unit: String,
    pub carbohydrates: f64,
    pub protein: f64,
    pub fat: f64,
}

/// One food chosen for a meal being logged, with its intake quantity.
/// The line-item snapshot is derived from these at logging time.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodPortion {
    pub food: FoodItem,
    pub intake: f64,
}

/// Input for creating or replacing a reminder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReminder {
    pub content: String,
    pub send_time: NaiveTime,
    pub active: bool,
    pub days: Vec<DayOfWeek>,
}

/// Searchable or user-created nutrition record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: i64,
    pub uuid: String,
    pub name: String,
    pub brand: Option<String>,
    pub serving_size: f64,
    pub unit: String,
    pub nutrition: Nutrition,
    pub approved: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl FoodItem {
    pub fn from_dto(dto: FoodItemResponse) -> Self {
        Self {
            id: dto.id,
            uuid: dto.uuid,
            name: dto.name,
            brand: dto.brand,
            serving_size: dto.serving_size,
            unit: dto.unit,
            nutrition: Nutrition {
                calories: dto.calories,
                carbohydrates: dto.carbohydrates,
                protein: dto.protein,
                fat: dto.fat,
            },
            approved: dto.approved,
            created_at: dto.created_at,
        }
    }
}

/// One food line inside a logged meal.
///
/// The nutrition values are a snapshot taken at logging time; later
/// edits to the referenced food must not change historical totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodLineItem {
    pub food_id: i64,
    pub food_name: String,
    pub intake: f64,
    pub nutrition: Nutrition,
}

impl FoodLineItem {
    pub fn from_dto(dto: FoodLineItemResponse) -> Self {
        Self {
            food_id: dto.food_id,
            food_name: dto.food_name,
            intake: dto.intake,
            nutrition: Nutrition {
                calories: dto.calories,
                carbohydrates: dto.carbohydrates,
                protein: dto.protein,
                fat: dto.fat,
            },
        }
    }
}

/// One logged meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietEntry {
    pub id: i64,
    pub meal_type: MealType,
    pub consumed_at: DateTime<Utc>,
    pub items: Vec<FoodLineItem>,
}

impl DietEntry {
    pub fn from_dto(dto: DietEntryResponse) -> Self {
        Self {
            id: dto.id,
            meal_type: dto.meal_type,
            consumed_at: dto.consumed_at,
            items: dto.foods.into_iter().map(FoodLineItem::from_dto).collect(),
        }
    }

    /// Sum of the line-item snapshots for this meal.
    pub fn total(&self) -> Nutrition {
        self.items
            .iter()
            .fold(Nutrition::default(), |acc, item| acc.add(&item.nutrition))
    }
}

/// All meals logged on one date, with the raw aggregated totals.
///
/// Totals carry no target-vs-actual math; percentages are recomputed
/// downstream from these values and the user's current targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyDiet {
    pub date: NaiveDate,
    pub total: Nutrition,
    pub entries: Vec<DietEntry>,
}

impl DailyDiet {
    pub fn from_entries(date: NaiveDate, entries: Vec<DietEntry>) -> Self {
        let total = entries
            .iter()
            .fold(Nutrition::default(), |acc, entry| acc.add(&entry.total()));
        Self {
            date,
            total,
            entries,
        }
    }
}

/// Scheduled reminder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderRule {
    pub id: i64,
    pub content: String,
    pub send_time: NaiveTime,
    pub active: bool,
    pub days: Vec<DayOfWeek>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ReminderRule {
    pub fn from_dto(dto: ReminderResponse) -> Self {
        Self {
            id: dto.id,
            content: dto.content,
            send_time: dto.send_time,
            active: dto.is_active,
            days: dto.day_of_weeks,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }
}

/// Push-messaging device registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationDevice {
    pub id: i64,
    pub user_id: i64,
    pub agent_id: String,
    pub os_type: String,
    pub device_name: String,
    pub active: bool,
}

impl NotificationDevice {
    pub fn from_dto(dto: NotificationResponse) -> Self {
        Self {
            id: dto.id,
            user_id: dto.user_id,
            agent_id: dto.agent_id,
            os_type: dto.os_type,
            device_name: dto.device_name,
            active: dto.is_active,
        }
    }
}

/// Aggregated nutrition totals for one period, keyed by date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSample {
    pub period: Period,
    pub date: NaiveDate,
    pub nutrition: Nutrition,
}

impl StatsSample {
    pub fn from_dto(dto: StatsSampleResponse) -> Self {
        Self {
            period: Period::from_wire(&dto.period_type),
            date: dto.date,
            nutrition: Nutrition {
                calories: dto.calories,
                carbohydrates: dto.carbohydrates,
                protein: dto.protein,
                fat: dto.fat,
            },
        }
    }
}

/// Domain-side page of mapped items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub total_items: u64,
    pub current_page: u32,
    pub items_per_page: u32,
    pub total_pages: u32,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// Map a wire page, converting each item through `f`.
    pub fn from_dto<D>(dto: PagedResult<D>, f: impl FnMut(D) -> T) -> Self {
        let total_pages = dto.total_pages();
        Self {
            total_items: dto.total_items,
            current_page: dto.current_page,
            items_per_page: dto.items_per_page,
            total_pages,
            items: dto.items.into_iter().map(f).collect(),
        }
    }

    /// Paginating callers stop when `current_page == total_pages`.
    pub fn is_last_page(&self) -> bool {
        self.current_page == self.total_pages
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn nutrition_strategy() -> impl Strategy<Value = Nutrition> {
        (0.0f64..5000.0, 0.0f64..500.0, 0.0f64..500.0, 0.0f64..500.0).prop_map(
            |(calories, carbohydrates, protein, fat)| Nutrition {
                calories,
                carbohydrates,
                protein,
                fat,
            },
        )
    }

    fn entry_strategy() -> impl Strategy<Value = DietEntry> {
        proptest::collection::vec(nutrition_strategy(), 0..6).prop_map(|snapshots| DietEntry {
            id: 1,
            meal_type: MealType::Dinner,
            consumed_at: Utc::now(),
            items: snapshots
                .into_iter()
                .map(|nutrition| FoodLineItem {
                    food_id: 1,
                    food_name: "food".to_string(),
                    intake: 1.0,
                    nutrition,
                })
                .collect(),
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Daily totals must equal the arithmetic sum across all line
        /// items in all entries for the date.
        #[test]
        fn prop_daily_totals_equal_line_item_sums(
            entries in proptest::collection::vec(entry_strategy(), 0..8)
        ) {
            let expected_calories: f64 = entries
                .iter()
                .flat_map(|e| e.items.iter())
                .map(|i| i.nutrition.calories)
                .sum();
            let expected_protein: f64 = entries
                .iter()
                .flat_map(|e| e.items.iter())
                .map(|i| i.nutrition.protein)
                .sum();

            let diet = DailyDiet::from_entries(
                NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                entries,
            );

            prop_assert!((diet.total.calories - expected_calories).abs() < 1e-6);
            prop_assert!((diet.total.protein - expected_protein).abs() < 1e-6);
        }

        /// Period mapping is total: any input maps to some period and
        /// never panics, with Daily as the catch-all.
        #[test]
        fn prop_period_mapping_is_total(wire in "\\PC*") {
            let period = Period::from_wire(&wire);
            let upper = wire.to_ascii_uppercase();
            if upper != "WEEKLY" && upper != "MONTHLY" {
                prop_assert_eq!(period, Period::Daily);
            }
        }
    }
}
