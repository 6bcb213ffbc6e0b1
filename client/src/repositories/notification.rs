//! Notification repository - push-device registration

use crate::endpoints::NotificationEndpoint;
use crate::transport::ApiClient;
use async_trait::async_trait;
use dietly_shared::errors::NetworkError;
use dietly_shared::types::{ApiEnvelope, CreateNotificationRequest, NotificationResponse};
use std::sync::Arc;

/// Notification resource operations. The "already exists" conflict is
/// surfaced unchanged here; interpreting it is the use case's job.
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn register(
        &self,
        request: CreateNotificationRequest,
    ) -> Result<NotificationResponse, NetworkError>;
}

/// Production implementation over the HTTP transport.
pub struct HttpNotificationRepository {
    client: Arc<ApiClient>,
}

impl HttpNotificationRepository {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NotificationRepository for HttpNotificationRepository {
    async fn register(
        &self,
        request: CreateNotificationRequest,
    ) -> Result<NotificationResponse, NetworkError> {
        let envelope: ApiEnvelope<NotificationResponse> = self
            .client
            .request(NotificationEndpoint::Register(request).descriptor())
            .await?;
        envelope.into_data()
    }
}
