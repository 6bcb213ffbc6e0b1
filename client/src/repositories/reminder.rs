//! Reminder repository - CRUD over reminder rules

use crate::endpoints::ReminderEndpoint;
use crate::transport::ApiClient;
use async_trait::async_trait;
use dietly_shared::errors::NetworkError;
use dietly_shared::types::{ApiEnvelope, PagedResult, ReminderRequest, ReminderResponse};
use std::sync::Arc;

/// Reminder resource operations.
#[async_trait]
pub trait ReminderRepository: Send + Sync {
    async fn list(
        &self,
        page: u32,
        size: u32,
    ) -> Result<PagedResult<ReminderResponse>, NetworkError>;

    async fn create(&self, request: ReminderRequest) -> Result<ReminderResponse, NetworkError>;

    async fn update(
        &self,
        id: i64,
        request: ReminderRequest,
    ) -> Result<ReminderResponse, NetworkError>;

    async fn delete(&self, id: i64) -> Result<(), NetworkError>;
}

/// Production implementation over the HTTP transport.
pub struct HttpReminderRepository {
    client: Arc<ApiClient>,
}

impl HttpReminderRepository {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ReminderRepository for HttpReminderRepository {
    async fn list(
        &self,
        page: u32,
        size: u32,
    ) -> Result<PagedResult<ReminderResponse>, NetworkError> {
        let envelope: ApiEnvelope<PagedResult<ReminderResponse>> = self
            .client
            .request(ReminderEndpoint::List { page, size }.descriptor())
            .await?;
        envelope.into_data()
    }

    async fn create(&self, request: ReminderRequest) -> Result<ReminderResponse, NetworkError> {
        let envelope: ApiEnvelope<ReminderResponse> = self
            .client
            .request(ReminderEndpoint::Create(request).descriptor())
            .await?;
        envelope.into_data()
    }

    async fn update(
        &self,
        id: i64,
        request: ReminderRequest,
    ) -> Result<ReminderResponse, NetworkError> {
        let envelope: ApiEnvelope<ReminderResponse> = self
            .client
            .request(ReminderEndpoint::Update { id, request }.descriptor())
            .await?;
        envelope.into_data()
    }

    async fn delete(&self, id: i64) -> Result<(), NetworkError> {
        let _: ApiEnvelope<serde_json::Value> = self
            .client
            .request(ReminderEndpoint::Delete { id }.descriptor())
            .await?;
        Ok(())
    }
}
