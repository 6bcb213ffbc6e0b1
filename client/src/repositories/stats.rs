//! Stats repository - aggregated nutrition samples

use crate::endpoints::StatsEndpoint;
use crate::transport::ApiClient;
use async_trait::async_trait;
use dietly_shared::errors::NetworkError;
use dietly_shared::models::Period;
use dietly_shared::types::{ApiEnvelope, StatsSampleResponse};
use std::sync::Arc;

/// Stats resource operations.
#[async_trait]
pub trait StatsRepository: Send + Sync {
    async fn fetch(
        &self,
        period: Period,
        user_id: i64,
    ) -> Result<Vec<StatsSampleResponse>, NetworkError>;
}

/// Production implementation over the HTTP transport.
pub struct HttpStatsRepository {
    client: Arc<ApiClient>,
}

impl HttpStatsRepository {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StatsRepository for HttpStatsRepository {
    async fn fetch(
        &self,
        period: Period,
        user_id: i64,
    ) -> Result<Vec<StatsSampleResponse>, NetworkError> {
        let envelope: ApiEnvelope<Vec<StatsSampleResponse>> = self
            .client
            .request(StatsEndpoint::Fetch { period, user_id }.descriptor())
            .await?;
        envelope.into_data()
    }
}
