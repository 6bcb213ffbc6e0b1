//! Notification resource endpoints

use crate::transport::EndpointDescriptor;
use dietly_shared::types::CreateNotificationRequest;
use reqwest::Method;

/// Remote operations on the notification-device resource.
#[derive(Debug, Clone)]
pub enum NotificationEndpoint {
    Register(CreateNotificationRequest),
}

impl NotificationEndpoint {
    pub fn descriptor(&self) -> EndpointDescriptor {
        match self {
            NotificationEndpoint::Register(request) => EndpointDescriptor {
                path: "/api/v1/notifications".to_string(),
                method: Method::POST,
                params: serde_json::to_value(request).ok(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_body_shape() {
        let descriptor = NotificationEndpoint::Register(CreateNotificationRequest {
            agent_id: "token-1".to_string(),
            os_type: "IOS".to_string(),
            device_name: "Phone".to_string(),
            is_active: true,
        })
        .descriptor();
        assert_eq!(descriptor.method, Method::POST);
        assert_eq!(descriptor.path, "/api/v1/notifications");
        let params = descriptor.params.unwrap();
        assert_eq!(params["agentId"], "token-1");
        assert_eq!(params["isActive"], true);
    }
}
