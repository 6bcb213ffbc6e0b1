//! User repository - remote user resource plus the local identity record

use crate::endpoints::UserEndpoint;
use crate::store::IdentityStore;
use crate::transport::ApiClient;
use async_trait::async_trait;
use dietly_shared::errors::{NetworkError, StoreError};
use dietly_shared::types::{ApiEnvelope, CreateUserRequest, UpdateUserRequest, UserResponse};
use std::sync::Arc;

/// User resource operations.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, request: CreateUserRequest) -> Result<(), NetworkError>;
    async fn fetch(&self, uuid: &str) -> Result<UserResponse, NetworkError>;
    async fn update(&self, id: i64, request: UpdateUserRequest)
        -> Result<UserResponse, NetworkError>;
    async fn delete(&self, id: i64) -> Result<(), NetworkError>;

    // Identity-store pass-through: user identity is the one piece of
    // client-durable state coupled to this resource area.
    async fn get_uuid(&self) -> Result<String, StoreError>;
    async fn save_uuid(&self, uuid: &str) -> Result<(), StoreError>;
    async fn delete_uuid(&self, uuid: &str) -> Result<(), StoreError>;
    async fn get_server_id(&self) -> Result<i64, StoreError>;
    async fn save_server_id(&self, server_id: i64) -> Result<(), StoreError>;
}

/// Production implementation over the HTTP transport and the file store.
pub struct HttpUserRepository {
    client: Arc<ApiClient>,
    store: Arc<dyn IdentityStore>,
}

impl HttpUserRepository {
    pub fn new(client: Arc<ApiClient>, store: Arc<dyn IdentityStore>) -> Self {
        Self { client, store }
    }
}

#[async_trait]
impl UserRepository for HttpUserRepository {
    async fn create(&self, request: CreateUserRequest) -> Result<(), NetworkError> {
        // Creation succeeds with an empty payload; decoding the
        // envelope is the success signal.
        let _: ApiEnvelope<serde_json::Value> = self
            .client
            .request(UserEndpoint::Create(request).descriptor())
            .await?;
        Ok(())
    }

    async fn fetch(&self, uuid: &str) -> Result<UserResponse, NetworkError> {
        let envelope: ApiEnvelope<UserResponse> = self
            .client
            .request(
                UserEndpoint::Fetch {
                    uuid: uuid.to_string(),
                }
                .descriptor(),
            )
            .await?;
        envelope.into_data()
    }

    async fn update(
        &self,
        id: i64,
        request: UpdateUserRequest,
    ) -> Result<UserResponse, NetworkError> {
        let envelope: ApiEnvelope<UserResponse> = self
            .client
            .request(UserEndpoint::Update { id, request }.descriptor())
            .await?;
        envelope.into_data()
    }

    async fn delete(&self, id: i64) -> Result<(), NetworkError> {
        let _: ApiEnvelope<serde_json::Value> = self
            .client
            .request(UserEndpoint::Delete { id }.descriptor())
            .await?;
        Ok(())
    }

    async fn get_uuid(&self) -> Result<String, StoreError> {
        self.store.get_uuid().await
    }

    async fn save_uuid(&self, uuid: &str) -> Result<(), StoreError> {
        self.store.save_uuid(uuid).await
    }

    async fn delete_uuid(&self, uuid: &str) -> Result<(), StoreError> {
        self.store.delete_uuid(uuid).await
    }

    async fn get_server_id(&self) -> Result<i64, StoreError> {
        self.store.get_server_id().await
    }

    async fn save_server_id(&self, server_id: i64) -> Result<(), StoreError> {
        self.store.save_server_id(server_id).await
    }
}
