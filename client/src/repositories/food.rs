//! Food repository - search and creation of nutrition records

use crate::endpoints::FoodEndpoint;
use crate::transport::ApiClient;
use async_trait::async_trait;
use dietly_shared::errors::NetworkError;
use dietly_shared::types::{ApiEnvelope, CreateFoodRequest, FoodItemResponse, PagedResult};
use std::sync::Arc;

/// Food resource operations.
#[async_trait]
pub trait FoodRepository: Send + Sync {
    /// Paged name search; `page` is zero-based and passed through
    /// unchanged.
    async fn search(
        &self,
        name: &str,
        page: u32,
        size: u32,
    ) -> Result<PagedResult<FoodItemResponse>, NetworkError>;

    async fn create(&self, request: CreateFoodRequest) -> Result<FoodItemResponse, NetworkError>;
}

/// Production implementation over the HTTP transport.
pub struct HttpFoodRepository {
    client: Arc<ApiClient>,
}

impl HttpFoodRepository {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FoodRepository for HttpFoodRepository {
    async fn search(
        &self,
        name: &str,
        page: u32,
        size: u32,
    ) -> Result<PagedResult<FoodItemResponse>, NetworkError> {
        let envelope: ApiEnvelope<PagedResult<FoodItemResponse>> = self
            .client
            .request(
                FoodEndpoint::Search {
                    name: name.to_string(),
                    page,
                    size,
                }
                .descriptor(),
            )
            .await?;
        envelope.into_data()
    }

    async fn create(&self, request: CreateFoodRequest) -> Result<FoodItemResponse, NetworkError> {
        let envelope: ApiEnvelope<FoodItemResponse> = self
            .client
            .request(FoodEndpoint::Create(request).descriptor())
            .await?;
        envelope.into_data()
    }
}
