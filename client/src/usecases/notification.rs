//! Notification use case - idempotent push-device registration

use crate::repositories::NotificationRepository;
use dietly_shared::errors::NetworkError;
use dietly_shared::models::NotificationDevice;
use dietly_shared::types::CreateNotificationRequest;
use std::sync::Arc;
use tracing::warn;

/// Server marker for the duplicate-device conflict. The server signals
/// this condition only through its message text, so registration is
/// coupled to this fragment; a server-side wording change breaks the
/// idempotency downgrade.
const ALREADY_EXISTS_MARKER: &str = "already exists";

/// Outcome of a registration attempt. `AlreadyRegistered` is a success
/// from the caller's point of view; re-registering on every app start
/// is expected behavior.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationOutcome {
    Registered(NotificationDevice),
    AlreadyRegistered,
}

#[derive(Clone)]
pub struct NotificationUseCase {
    repo: Arc<dyn NotificationRepository>,
}

impl NotificationUseCase {
    pub fn new(repo: Arc<dyn NotificationRepository>) -> Self {
        Self { repo }
    }

    /// Register this device for push messaging. A duplicate-device
    /// conflict is downgraded to `AlreadyRegistered`; every other error
    /// propagates unchanged.
    pub async fn register(
        &self,
        agent_id: &str,
        os_type: &str,
        device_name: &str,
    ) -> Result<RegistrationOutcome, NetworkError> {
        let request = CreateNotificationRequest {
            agent_id: agent_id.to_string(),
            os_type: os_type.to_string(),
            device_name: device_name.to_string(),
            is_active: true,
        };
        match self.repo.register(request).await {
            Ok(dto) => Ok(RegistrationOutcome::Registered(
                NotificationDevice::from_dto(dto),
            )),
            Err(NetworkError::RequestFailed(message))
                if message.to_ascii_lowercase().contains(ALREADY_EXISTS_MARKER) =>
            {
                warn!(agent_id, %message, "device already registered, treating as success");
                Ok(RegistrationOutcome::AlreadyRegistered)
            }
            Err(err) => Err(err),
        }
    }
}
