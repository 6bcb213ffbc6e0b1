//! Shared harness for integration tests: a mock API server plus a fully
//! wired `AppState` whose identity store lives in a throwaway tempdir.

use dietly_client::config::{ApiConfig, ClientConfig, StorageConfig};
use dietly_client::AppState;
use serde_json::{json, Value};
use std::sync::Once;
use tempfile::TempDir;
use wiremock::MockServer;

static TRACING: Once = Once::new();

/// Opt into client logs with RUST_LOG, e.g. RUST_LOG=dietly_client=debug.
fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}

pub struct TestApp {
    pub state: AppState,
    pub server: MockServer,
    _tmp: TempDir,
}

impl TestApp {
    pub async fn spawn() -> Self {
        init_tracing();
        let server = MockServer::start().await;
        let tmp = TempDir::new().expect("failed to create tempdir");
        let config = ClientConfig {
            api: ApiConfig {
                base_url: server.uri(),
                timeout_secs: 5,
            },
            storage: StorageConfig {
                identity_path: tmp.path().join("identity.json"),
            },
        };
        let state = AppState::new(config).expect("failed to wire client state");
        Self {
            state,
            server,
            _tmp: tmp,
        }
    }
}

/// Standard success envelope every endpoint wraps its payload in.
pub fn envelope(data: Value) -> Value {
    json!({
        "status": "OK",
        "message": "success",
        "data": data,
        "serverDatetime": "2024-05-06T12:00:00"
    })
}
