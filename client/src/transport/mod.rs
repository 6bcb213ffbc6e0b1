//! HTTP transport against the fixed API origin
//!
//! One typed request in, one typed JSON payload (or a normalized
//! `NetworkError`) out. Parameter encoding is chosen by HTTP method:
//! GET-style requests put parameters into the query string, every other
//! verb sends them as a JSON body. The client holds no mutable state
//! beyond its immutable configuration, so concurrent calls are safe.

use dietly_shared::errors::NetworkError;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Declarative description of one remote operation: where it lives and
/// what it carries. Produced by the endpoint catalog, consumed here.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointDescriptor {
    pub path: String,
    pub method: Method,
    pub params: Option<Value>,
}

impl EndpointDescriptor {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            params: None,
        }
    }

    pub fn with_params(method: Method, path: impl Into<String>, params: Value) -> Self {
        Self {
            path: path.into(),
            method,
            params: Some(params),
        }
    }
}

/// Flatten a JSON object into query pairs for GET encoding. Null values
/// are dropped; everything else is rendered as its plain string form.
fn query_pairs(params: &Value) -> Vec<(String, String)> {
    match params {
        Value::Object(map) => map
            .iter()
            .filter(|(_, value)| !value.is_null())
            .map(|(key, value)| {
                let rendered = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (key.clone(), rendered)
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// HTTP client bound to the API's base origin.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, NetworkError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| NetworkError::RequestFailed(err.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Execute one request and decode the typed response body.
    ///
    /// Transport failures, non-2xx statuses and decode failures all
    /// collapse into `NetworkError::RequestFailed` with the message
    /// preserved for diagnostics. No retries happen here.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: EndpointDescriptor,
    ) -> Result<T, NetworkError> {
        let url = format!("{}{}", self.base_url, endpoint.path);
        debug!(method = %endpoint.method, path = %endpoint.path, "issuing API request");

        let mut builder = self.http.request(endpoint.method.clone(), &url);
        if let Some(params) = &endpoint.params {
            if endpoint.method == Method::GET {
                builder = builder.query(&query_pairs(params));
            } else {
                builder = builder.json(params);
            }
        }

        let response = builder
            .send()
            .await
            .map_err(|err| NetworkError::RequestFailed(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NetworkError::RequestFailed(format!(
                "status {}: {}",
                status.as_u16(),
                body
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|err| NetworkError::RequestFailed(format!("decode failed: {}", err)))
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Query encoding keeps exactly the non-null entries, rendering
        /// strings bare and everything else via its JSON form.
        #[test]
        fn prop_query_pairs_keep_exactly_the_non_null_entries(
            entries in proptest::collection::btree_map(
                "[a-z][a-zA-Z0-9]{0,12}",
                prop_oneof![
                    Just(Value::Null),
                    any::<bool>().prop_map(Value::from),
                    any::<i64>().prop_map(Value::from),
                    "[^\"\\\\]{0,16}".prop_map(Value::from),
                ],
                0..8,
            )
        ) {
            let params = json!(entries.clone());
            let pairs = query_pairs(&params);

            let non_null: Vec<_> = entries
                .iter()
                .filter(|(_, value)| !value.is_null())
                .collect();
            prop_assert_eq!(pairs.len(), non_null.len());
            for (key, value) in non_null {
                let rendered = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                prop_assert!(pairs.contains(&(key.clone(), rendered)));
            }
        }
    }
}
