//! Shared test harness for E2E integration tests.
//!
//! Wires the API router over real knowledge tables and exposes request
//! helpers, exercising actual code paths across crate boundaries.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use pb_api::routes::build_router;
use pb_api::state::AppState;
use pb_session::LocalSource;

/// End-to-end test harness around the API router.
pub struct TestHarness {
    /// Axum router for HTTP requests via `tower::oneshot`.
    pub router: Router,
}

impl TestHarness {
    /// Harness over the built-in sample catalog and plot table.
    pub fn with_sample_data() -> Self {
        Self {
            router: build_router(AppState::with_sample_data()),
        }
    }

    /// Harness over completely empty tables.
    pub fn empty() -> Self {
        Self {
            router: build_router(AppState::empty()),
        }
    }

    /// GET a path and return (HTTP status code, response JSON body).
    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = self
            .router
            .clone()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }
}

/// Session source over the same sample data the harness serves.
pub fn sample_source() -> LocalSource {
    LocalSource::with_sample_data()
}
