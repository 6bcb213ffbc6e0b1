//! Reminder resource endpoints

use crate::transport::EndpointDescriptor;
use dietly_shared::types::ReminderRequest;
use reqwest::Method;
use serde_json::json;

/// Remote operations on the reminder resource (standard CRUD).
#[derive(Debug, Clone)]
pub enum ReminderEndpoint {
    List { page: u32, size: u32 },
    Create(ReminderRequest),
    Update { id: i64, request: ReminderRequest },
    Delete { id: i64 },
}

impl ReminderEndpoint {
    pub fn descriptor(&self) -> EndpointDescriptor {
        match self {
            ReminderEndpoint::List { page, size } => EndpointDescriptor::with_params(
                Method::GET,
                "/api/v1/reminders",
                json!({ "page": page, "size": size }),
            ),
            ReminderEndpoint::Create(request) => EndpointDescriptor {
                path: "/api/v1/reminders".to_string(),
                method: Method::POST,
                params: serde_json::to_value(request).ok(),
            },
            ReminderEndpoint::Update { id, request } => EndpointDescriptor {
                path: format!("/api/v1/reminders/{}", id),
                method: Method::PUT,
                params: serde_json::to_value(request).ok(),
            },
            ReminderEndpoint::Delete { id } => {
                EndpointDescriptor::new(Method::DELETE, format!("/api/v1/reminders/{}", id))
            }
        }
    }
}
