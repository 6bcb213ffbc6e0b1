//! Diet use case - logging meals and reading the daily view

use crate::repositories::DietRepository;
use crate::usecases::validate_request;
use chrono::{DateTime, NaiveDate, Utc};
use dietly_shared::errors::NetworkError;
use dietly_shared::models::{DailyDiet, DietEntry, FoodPortion, MealType};
use dietly_shared::types::{CreateDietRequest, DietFoodInput};
use dietly_shared::validation::validate_intake;
use std::sync::Arc;

#[derive(Clone)]
pub struct DietUseCase {
    repo: Arc<dyn DietRepository>,
}

impl DietUseCase {
    pub fn new(repo: Arc<dyn DietRepository>) -> Self {
        Self { repo }
    }

    /// All meals logged on `date`, with totals summed client-side from
    /// the stored line-item snapshots.
    pub async fn daily(&self, date: NaiveDate, user_id: i64) -> Result<DailyDiet, NetworkError> {
        let entries = self
            .repo
            .daily(date, user_id)
            .await?
            .into_iter()
            .map(DietEntry::from_dto)
            .collect();
        Ok(DailyDiet::from_entries(date, entries))
    }

    /// Log a meal. Each portion's nutrition snapshot is computed here,
    /// at logging time, from the food's per-serving values and the
    /// intake quantity; later edits to the food never rewrite it.
    pub async fn log(
        &self,
        user_id: i64,
        meal_type: MealType,
        consumed_at: DateTime<Utc>,
        portions: Vec<FoodPortion>,
    ) -> Result<DietEntry, NetworkError> {
        let mut foods = Vec::with_capacity(portions.len());
        for portion in portions {
            validate_intake(portion.intake).map_err(NetworkError::RequestFailed)?;
            let snapshot = portion.food.nutrition.scale(portion.intake);
            foods.push(DietFoodInput {
                food_id: portion.food.id,
                intake: portion.intake,
                calories: snapshot.calories,
                carbohydrates: snapshot.carbohydrates,
                protein: snapshot.protein,
                fat: snapshot.fat,
            });
        }
        let request = CreateDietRequest {
            user_id,
            meal_type,
            consumed_at,
            foods,
        };
        validate_request(&request)?;
        let dto = self.repo.create(request).await?;
        Ok(DietEntry::from_dto(dto))
    }

    /// Delete one logged meal.
    pub async fn remove(&self, id: i64) -> Result<(), NetworkError> {
        self.repo.delete(id).await
    }
}
