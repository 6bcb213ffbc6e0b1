//! Diet resource endpoints

use crate::transport::EndpointDescriptor;
use chrono::NaiveDate;
use dietly_shared::types::CreateDietRequest;
use reqwest::Method;
use serde_json::json;

/// Remote operations on the diet resource.
#[derive(Debug, Clone)]
pub enum DietEndpoint {
    /// All entries logged on one date.
    Daily { date: NaiveDate, user_id: i64 },
    Create(CreateDietRequest),
    Delete { id: i64 },
}

impl DietEndpoint {
    pub fn descriptor(&self) -> EndpointDescriptor {
        match self {
            DietEndpoint::Daily { date, user_id } => EndpointDescriptor::with_params(
                Method::GET,
                "/api/v1/diets/daily",
                json!({
                    "date": date.format("%Y-%m-%d").to_string(),
                    "userId": user_id,
                }),
            ),
            DietEndpoint::Create(request) => EndpointDescriptor {
                path: "/api/v1/diets".to_string(),
                method: Method::POST,
                params: serde_json::to_value(request).ok(),
            },
            DietEndpoint::Delete { id } => {
                EndpointDescriptor::new(Method::DELETE, format!("/api/v1/diets/{}", id))
            }
        }
    }
}
