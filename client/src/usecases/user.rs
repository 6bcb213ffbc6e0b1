//! User use case - onboarding, profile and account lifecycle

use crate::repositories::UserRepository;
use crate::usecases::validate_request;
use dietly_shared::errors::{ClientError, StoreError};
use dietly_shared::models::{NewUserProfile, ProfileUpdate, UserProfile};
use dietly_shared::types::{CreateUserRequest, UpdateUserRequest};
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

/// User orchestration over the remote resource and the local identity
/// record.
#[derive(Clone)]
pub struct UserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl UserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// The install-scoped client UUID, minting and persisting one on
    /// first use. The UUID is durable before any network call is made.
    pub async fn ensure_client_uuid(&self) -> Result<String, StoreError> {
        match self.repo.get_uuid().await {
            Ok(uuid) => Ok(uuid),
            Err(StoreError::NotFound) => {
                let uuid = Uuid::new_v4().to_string();
                self.repo.save_uuid(&uuid).await?;
                Ok(uuid)
            }
            Err(err) => Err(err),
        }
    }

    /// Create the remote user resource for this install.
    pub async fn register(&self, profile: NewUserProfile) -> Result<(), ClientError> {
        let uuid = self.ensure_client_uuid().await?;
        let request = CreateUserRequest {
            uuid,
            name: profile.name,
            gender: profile.gender.as_wire().to_string(),
            age: profile.age,
            height: profile.height,
            weight: profile.weight,
            email: profile.email,
            activity_level: profile.activity_level.as_wire().to_string(),
            smi: profile.smi,
            fat_percentage: profile.fat_percentage,
            target_weight: profile.target_weight,
            target_calorie: profile.target_calorie,
            target_smi: profile.target_smi,
            target_fat_percentage: profile.target_fat_percentage,
            provider_id: profile.provider_id,
            provider_type: profile.provider_type,
        };
        validate_request(&request)?;
        self.repo.create(request).await?;
        Ok(())
    }

    /// Fetch the profile for this install's UUID, caching the
    /// server-assigned id alongside it.
    pub async fn profile(&self) -> Result<UserProfile, ClientError> {
        let uuid = self.repo.get_uuid().await?;
        let dto = self.repo.fetch(&uuid).await?;
        if let Err(err) = self.repo.save_server_id(dto.id).await {
            // The id is a cache; a failed write only costs a re-fetch.
            warn!(%err, "could not cache server id");
        }
        Ok(UserProfile::from_dto(dto))
    }

    /// Apply a partial profile/goal update.
    pub async fn update(&self, update: ProfileUpdate) -> Result<UserProfile, ClientError> {
        let server_id = self.server_id().await?;
        let request = UpdateUserRequest {
            name: update.name,
            gender: update.gender.map(|g| g.as_wire().to_string()),
            age: update.age,
            height: update.height,
            weight: update.weight,
            activity_level: update.activity_level.map(|a| a.as_wire().to_string()),
            target_weight: update.target_weight,
            target_calorie: update.target_calorie,
            target_smi: update.target_smi,
            target_fat_percentage: update.target_fat_percentage,
            target_carbohydrates: update.target_carbohydrates,
            target_protein: update.target_protein,
            target_fat: update.target_fat,
        };
        let dto = self.repo.update(server_id, request).await?;
        Ok(UserProfile::from_dto(dto))
    }

    /// Delete the remote account, then the local identity record. The
    /// UUID is removed only here, never as part of normal operation.
    pub async fn delete_account(&self) -> Result<(), ClientError> {
        let uuid = self.repo.get_uuid().await?;
        let server_id = self.server_id().await?;
        self.repo.delete(server_id).await?;
        self.repo.delete_uuid(&uuid).await?;
        Ok(())
    }

    async fn server_id(&self) -> Result<i64, ClientError> {
        match self.repo.get_server_id().await {
            Ok(id) => Ok(id),
            Err(StoreError::NotFound) => {
                let uuid = self.repo.get_uuid().await?;
                let dto = self.repo.fetch(&uuid).await?;
                if let Err(err) = self.repo.save_server_id(dto.id).await {
                    warn!(%err, "could not cache server id");
                }
                Ok(dto.id)
            }
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use dietly_shared::errors::NetworkError;
    use dietly_shared::models::{ActivityLevel, Gender};
    use dietly_shared::types::UserResponse;
    use std::sync::Mutex;

    /// In-memory double recording the order of calls.
    #[derive(Default)]
    struct FakeUserRepository {
        uuid: Mutex<Option<String>>,
        server_id: Mutex<Option<i64>>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeUserRepository {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl UserRepository for FakeUserRepository {
        async fn create(&self, request: CreateUserRequest) -> Result<(), NetworkError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("create:{}", request.uuid));
            Ok(())
        }

        async fn fetch(&self, uuid: &str) -> Result<UserResponse, NetworkError> {
            self.calls.lock().unwrap().push("fetch".to_string());
            Ok(UserResponse {
                id: 42,
                uuid: uuid.to_string(),
                name: "Kim".to_string(),
                gender: "FEMALE".to_string(),
                age: 29,
                height: 167.0,
                weight: 61.0,
                email: None,
                activity_level: "LIGHT".to_string(),
                smi: None,
                fat_percentage: None,
                target_weight: Some(58.0),
                target_calorie: Some(1800.0),
                target_smi: None,
                target_fat_percentage: None,
                target_carbohydrates: None,
                target_protein: None,
                target_fat: None,
                provider_id: None,
                provider_type: None,
                created_at: None,
            })
        }

        async fn update(
            &self,
            _id: i64,
            _request: UpdateUserRequest,
        ) -> Result<UserResponse, NetworkError> {
            self.fetch("abc").await
        }

        async fn delete(&self, id: i64) -> Result<(), NetworkError> {
            self.calls.lock().unwrap().push(format!("delete:{}", id));
            Ok(())
        }

        async fn get_uuid(&self) -> Result<String, StoreError> {
            self.uuid.lock().unwrap().clone().ok_or(StoreError::NotFound)
        }

        async fn save_uuid(&self, uuid: &str) -> Result<(), StoreError> {
            self.calls.lock().unwrap().push("save_uuid".to_string());
            *self.uuid.lock().unwrap() = Some(uuid.to_string());
            Ok(())
        }

        async fn delete_uuid(&self, _uuid: &str) -> Result<(), StoreError> {
            self.calls.lock().unwrap().push("delete_uuid".to_string());
            *self.uuid.lock().unwrap() = None;
            Ok(())
        }

        async fn get_server_id(&self) -> Result<i64, StoreError> {
            self.server_id.lock().unwrap().ok_or(StoreError::NotFound)
        }

        async fn save_server_id(&self, server_id: i64) -> Result<(), StoreError> {
            *self.server_id.lock().unwrap() = Some(server_id);
            Ok(())
        }
    }

    fn profile() -> NewUserProfile {
        NewUserProfile {
            name: "Kim".to_string(),
            gender: Gender::Female,
            age: 29,
            height: 167.0,
            weight: 61.0,
            email: None,
            activity_level: ActivityLevel::Light,
            smi: None,
            fat_percentage: None,
            target_weight: Some(58.0),
            target_calorie: None,
            target_smi: None,
            target_fat_percentage: None,
            provider_id: None,
            provider_type: None,
        }
    }

    #[tokio::test]
    async fn test_register_persists_uuid_before_network_call() {
        let repo = Arc::new(FakeUserRepository::default());
        let usecase = UserUseCase::new(repo.clone());

        usecase.register(profile()).await.unwrap();

        let calls = repo.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], "save_uuid");
        assert!(calls[1].starts_with("create:"));
    }

    #[tokio::test]
    async fn test_register_reuses_existing_uuid() {
        let repo = Arc::new(FakeUserRepository::default());
        *repo.uuid.lock().unwrap() = Some("existing-uuid".to_string());
        let usecase = UserUseCase::new(repo.clone());

        usecase.register(profile()).await.unwrap();

        assert_eq!(repo.calls(), vec!["create:existing-uuid".to_string()]);
    }

    #[tokio::test]
    async fn test_profile_maps_dto_and_caches_server_id() {
        let repo = Arc::new(FakeUserRepository::default());
        *repo.uuid.lock().unwrap() = Some("abc".to_string());
        let usecase = UserUseCase::new(repo.clone());

        let profile = usecase.profile().await.unwrap();
        assert_eq!(profile.server_id, 42);
        assert_eq!(profile.gender, Gender::Female);
        assert_eq!(profile.activity_level, ActivityLevel::Light);
        assert_eq!(repo.get_server_id().await.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_register_rejects_invalid_age() {
        let repo = Arc::new(FakeUserRepository::default());
        let usecase = UserUseCase::new(repo.clone());

        let mut invalid = profile();
        invalid.age = 0;
        let err = usecase.register(invalid).await.unwrap_err();
        assert!(matches!(err, ClientError::Network(_)));
        // The invalid request never reaches the repository.
        assert_eq!(repo.calls(), vec!["save_uuid".to_string()]);
    }

    #[tokio::test]
    async fn test_delete_account_removes_server_then_local_identity() {
        let repo = Arc::new(FakeUserRepository::default());
        *repo.uuid.lock().unwrap() = Some("abc".to_string());
        *repo.server_id.lock().unwrap() = Some(42);
        let usecase = UserUseCase::new(repo.clone());

        usecase.delete_account().await.unwrap();

        assert_eq!(
            repo.calls(),
            vec!["delete:42".to_string(), "delete_uuid".to_string()]
        );
        assert_eq!(
            repo.get_uuid().await.unwrap_err(),
            StoreError::NotFound
        );
    }
}
