//! User resource endpoints

use crate::transport::EndpointDescriptor;
use dietly_shared::types::{CreateUserRequest, UpdateUserRequest};
use reqwest::Method;
use serde_json::json;

/// Remote operations on the user resource.
#[derive(Debug, Clone)]
pub enum UserEndpoint {
    Create(CreateUserRequest),
    Fetch { uuid: String },
    Update { id: i64, request: UpdateUserRequest },
    Delete { id: i64 },
}

impl UserEndpoint {
    pub fn descriptor(&self) -> EndpointDescriptor {
        match self {
            UserEndpoint::Create(request) => EndpointDescriptor {
                path: "/api/v1/users".to_string(),
                method: Method::POST,
                params: serde_json::to_value(request).ok(),
            },
            UserEndpoint::Fetch { uuid } => EndpointDescriptor::with_params(
                Method::GET,
                "/api/v1/users",
                json!({ "uuid": uuid }),
            ),
            UserEndpoint::Update { id, request } => EndpointDescriptor {
                path: format!("/api/v1/users/{}", id),
                method: Method::PUT,
                params: serde_json::to_value(request).ok(),
            },
            UserEndpoint::Delete { id } => {
                EndpointDescriptor::new(Method::DELETE, format!("/api/v1/users/{}", id))
            }
        }
    }
}
