//! Helpers shared by the integration tests.

use axum::{body::to_bytes, response::Response};
use fleet_scheduler::server::model::app::AppState;
use fleet_test_utils::TestContext;
use serde::de::DeserializeOwned;

/// Extension trait for TestContext to create the server's AppState
pub trait TestContextExt {
    fn state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn state(&self) -> AppState {
        self.to_app_state()
    }
}

/// Deserialize a JSON response body
pub async fn json_body<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
