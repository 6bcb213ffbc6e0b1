//! Food resource endpoints

use crate::transport::EndpointDescriptor;
use dietly_shared::types::CreateFoodRequest;
use reqwest::Method;
use serde_json::json;

/// Remote operations on the food resource.
#[derive(Debug, Clone)]
pub enum FoodEndpoint {
    /// Paged name search; `page` is zero-based.
    Search { name: String, page: u32, size: u32 },
    Create(CreateFoodRequest),
}

impl FoodEndpoint {
    pub fn descriptor(&self) -> EndpointDescriptor {
        match self {
            FoodEndpoint::Search { name, page, size } => EndpointDescriptor::with_params(
                Method::GET,
                "/api/v1/foods/search",
                json!({ "name": name, "page": page, "size": size }),
            ),
            FoodEndpoint::Create(request) => EndpointDescriptor {
                path: "/api/v1/foods".to_string(),
                method: Method::POST,
                params: serde_json::to_value(request).ok(),
            },
        }
    }
}
