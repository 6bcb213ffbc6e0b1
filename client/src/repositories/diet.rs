//! Diet repository - logged meals for a user

use crate::endpoints::DietEndpoint;
use crate::transport::ApiClient;
use async_trait::async_trait;
use chrono::NaiveDate;
use dietly_shared::errors::NetworkError;
use dietly_shared::types::{ApiEnvelope, CreateDietRequest, DietEntryResponse};
use std::sync::Arc;

/// Diet resource operations.
#[async_trait]
pub trait DietRepository: Send + Sync {
    /// Ordered list of the entries logged on one date.
    async fn daily(
        &self,
        date: NaiveDate,
        user_id: i64,
    ) -> Result<Vec<DietEntryResponse>, NetworkError>;

    async fn create(&self, request: CreateDietRequest) -> Result<DietEntryResponse, NetworkError>;

    async fn delete(&self, id: i64) -> Result<(), NetworkError>;
}

/// Production implementation over the HTTP transport.
pub struct HttpDietRepository {
    client: Arc<ApiClient>,
}

impl HttpDietRepository {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DietRepository for HttpDietRepository {
    async fn daily(
        &self,
        date: NaiveDate,
        user_id: i64,
    ) -> Result<Vec<DietEntryResponse>, NetworkError> {
        let envelope: ApiEnvelope<Vec<DietEntryResponse>> = self
            .client
            .request(DietEndpoint::Daily { date, user_id }.descriptor())
            .await?;
        envelope.into_data()
    }

    async fn create(&self, request: CreateDietRequest) -> Result<DietEntryResponse, NetworkError> {
        let envelope: ApiEnvelope<DietEntryResponse> = self
            .client
            .request(DietEndpoint::Create(request).descriptor())
            .await?;
        envelope.into_data()
    }

    async fn delete(&self, id: i64) -> Result<(), NetworkError> {
        let _: ApiEnvelope<serde_json::Value> = self
            .client
            .request(DietEndpoint::Delete { id }.descriptor())
            .await?;
        Ok(())
    }
}
