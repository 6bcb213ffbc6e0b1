//! Application state - construction and wiring of the client core
//!
//! All dependencies are injected through constructors; nothing in the
//! crate is a singleton. `AppState` is the composition root the host
//! application builds once and clones freely.

use crate::config::ClientConfig;
use crate::repositories::{
    HttpDietRepository, HttpFoodRepository, HttpNotificationRepository, HttpReminderRepository,
    HttpStatsRepository, HttpUserRepository,
};
use crate::store::{FileIdentityStore, IdentityStore};
use crate::transport::ApiClient;
use crate::usecases::{
    DietUseCase, FoodUseCase, NotificationUseCase, ReminderUseCase, StatsUseCase, UserUseCase,
};
use dietly_shared::errors::NetworkError;
use std::sync::Arc;
use std::time::Duration;

/// Fully wired client core. Cloning is cheap; all shared pieces sit
/// behind `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ClientConfig>,
    pub user: UserUseCase,
    pub food: FoodUseCase,
    pub diet: DietUseCase,
    pub notification: NotificationUseCase,
    pub reminder: ReminderUseCase,
    pub stats: StatsUseCase,
}

impl AppState {
    /// Build the full dependency graph from configuration: one HTTP
    /// client, one identity store, the repositories over them, and the
    /// use cases on top.
    pub fn new(config: ClientConfig) -> Result<Self, NetworkError> {
        let client = Arc::new(ApiClient::new(
            config.api.base_url.clone(),
            Duration::from_secs(config.api.timeout_secs),
        )?);
        let store: Arc<dyn IdentityStore> = Arc::new(FileIdentityStore::new(
            config.storage.identity_path.clone(),
        ));

        Ok(Self {
            user: UserUseCase::new(Arc::new(HttpUserRepository::new(
                client.clone(),
                store.clone(),
            ))),
            food: FoodUseCase::new(Arc::new(HttpFoodRepository::new(client.clone()))),
            diet: DietUseCase::new(Arc::new(HttpDietRepository::new(client.clone()))),
            notification: NotificationUseCase::new(Arc::new(HttpNotificationRepository::new(
                client.clone(),
            ))),
            reminder: ReminderUseCase::new(Arc::new(HttpReminderRepository::new(client.clone()))),
            stats: StatsUseCase::new(Arc::new(HttpStatsRepository::new(client))),
            config: Arc::new(config),
        })
    }
}
