//! Food use case - catalog search and custom food creation

use crate::repositories::FoodRepository;
use crate::usecases::validate_request;
use dietly_shared::errors::NetworkError;
use dietly_shared::models::{FoodItem, NewFood, Page};
use dietly_shared::types::CreateFoodRequest;
use dietly_shared::validation::{validate_nutrition, validate_serving_size};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct FoodUseCase {
    repo: Arc<dyn FoodRepository>,
}

impl FoodUseCase {
    pub fn new(repo: Arc<dyn FoodRepository>) -> Self {
        Self { repo }
    }

    /// Search the food catalog by name. Page and size are passed to the
    /// server unchanged; the server owns pagination semantics.
    pub async fn search(
        &self,
        name: &str,
        page: u32,
        size: u32,
    ) -> Result<Page<FoodItem>, NetworkError> {
        let dto = self.repo.search(name, page, size).await?;
        Ok(Page::from_dto(dto, FoodItem::from_dto))
    }

    /// Create a custom food record. Calories are absent from the
    /// request on purpose; the server derives them from the macros.
    pub async fn create(&self, food: NewFood) -> Result<FoodItem, NetworkError> {
        // The derive-based range checks cannot reject non-finite or
        // absurdly large values; these can.
        validate_serving_size(food.serving_size).map_err(NetworkError::RequestFailed)?;
        for value in [food.carbohydrates, food.protein, food.fat] {
            validate_nutrition(value).map_err(NetworkError::RequestFailed)?;
        }
        let request = CreateFoodRequest {
            uuid: Uuid::new_v4().to_string(),
            name: food.name,
            serving_size: food.serving_size,
            unit: food.unit,
            carbohydrates: food.carbohydrates,
            protein: food.protein,
            fat: food.fat,
            brand: food.brand,
        };
        validate_request(&request)?;
        let dto = self.repo.create(request).await?;
        Ok(FoodItem::from_dto(dto))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use dietly_shared::types::{FoodItemResponse, PagedResult};
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeFoodRepository {
        created: Mutex<Vec<CreateFoodRequest>>,
    }

    fn food_dto(id: i64, name: &str) -> FoodItemResponse {
        FoodItemResponse {
            id,
            uuid: format!("uuid-{}", id),
            name: name.to_string(),
            brand: None,
            serving_size: 100.0,
            unit: "g".to_string(),
            calories: 165.0,
            carbohydrates: 0.0,
            protein: 31.0,
            fat: 3.6,
            approved: true,
            created_at: None,
        }
    }

    #[async_trait]
    impl FoodRepository for FakeFoodRepository {
        async fn search(
            &self,
            _name: &str,
            page: u32,
            size: u32,
        ) -> Result<PagedResult<FoodItemResponse>, NetworkError> {
            Ok(PagedResult {
                total_items: 23,
                current_page: page,
                items_per_page: size,
                total_pages: None,
                items: vec![food_dto(1, "chicken breast")],
            })
        }

        async fn create(
            &self,
            request: CreateFoodRequest,
        ) -> Result<FoodItemResponse, NetworkError> {
            let mut dto = food_dto(7, &request.name);
            dto.uuid = request.uuid.clone();
            self.created.lock().unwrap().push(request);
            Ok(dto)
        }
    }

    #[tokio::test]
    async fn test_search_maps_items_and_derives_total_pages() {
        let usecase = FoodUseCase::new(Arc::new(FakeFoodRepository::default()));

        let page = usecase.search("chicken", 0, 10).await.unwrap();
        assert_eq!(page.total_pages, 3);
        assert!(!page.is_last_page());
        assert_eq!(page.items[0].name, "chicken breast");
        assert_eq!(page.items[0].nutrition.protein, 31.0);
    }

    #[tokio::test]
    async fn test_create_mints_uuid_and_omits_calories() {
        let repo = Arc::new(FakeFoodRepository::default());
        let usecase = FoodUseCase::new(repo.clone());

        let item = usecase
            .create(NewFood {
                name: "homemade granola".to_string(),
                brand: None,
                serving_size: 45.0,
                unit: "g".to_string(),
                carbohydrates: 30.0,
                protein: 6.0,
                fat: 9.0,
            })
            .await
            .unwrap();

        let created = repo.created.lock().unwrap();
        assert_eq!(created.len(), 1);
        assert!(Uuid::parse_str(&created[0].uuid).is_ok());
        assert_eq!(item.uuid, created[0].uuid);
        let json = serde_json::to_value(&created[0]).unwrap();
        assert!(json.get("calories").is_none());
    }

    #[tokio::test]
    async fn test_create_rejects_zero_serving_size() {
        let repo = Arc::new(FakeFoodRepository::default());
        let usecase = FoodUseCase::new(repo.clone());

        let result = usecase
            .create(NewFood {
                name: "bad".to_string(),
                brand: None,
                serving_size: 0.0,
                unit: "g".to_string(),
                carbohydrates: 0.0,
                protein: 0.0,
                fat: 0.0,
            })
            .await;

        assert!(result.is_err());
        assert!(repo.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_non_finite_macros() {
        let repo = Arc::new(FakeFoodRepository::default());
        let usecase = FoodUseCase::new(repo.clone());

        let result = usecase
            .create(NewFood {
                name: "bad".to_string(),
                brand: None,
                serving_size: 100.0,
                unit: "g".to_string(),
                carbohydrates: 0.0,
                protein: f64::NAN,
                fat: 0.0,
            })
            .await;

        assert!(result.is_err());
        assert!(repo.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_absurd_nutrition_values() {
        let repo = Arc::new(FakeFoodRepository::default());
        let usecase = FoodUseCase::new(repo.clone());

        let result = usecase
            .create(NewFood {
                name: "bad".to_string(),
                brand: None,
                serving_size: 100.0,
                unit: "g".to_string(),
                carbohydrates: 60_000.0,
                protein: 0.0,
                fat: 0.0,
            })
            .await;

        assert!(result.is_err());
        assert!(repo.created.lock().unwrap().is_empty());
    }
}
