// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use infravision::config::Config;
use infravision::db::SiteDb;
use infravision::error::AppError;
use infravision::middleware::auth::create_jwt;
use infravision::routes::create_router;
use infravision::services::{Assistant, ModelClient, ModelRequest, SiteAnalyzer};
use infravision::AppState;
use std::sync::{Arc, Mutex};

/// Check if a test database is available via environment variable.
#[allow(dead_code)]
pub fn database_available() -> bool {
    std::env::var("TEST_DATABASE_URL").is_ok()
}

/// Skip test with message if no database is configured.
#[macro_export]
macro_rules! require_database {
    () => {
        if !crate::common::database_available() {
            eprintln!("⚠️  Skipping: TEST_DATABASE_URL not set");
            return;
        }
    };
}

/// Create a test database connection (runs migrations).
#[allow(dead_code)]
pub async fn test_db() -> SiteDb {
    let url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL not set");
    SiteDb::new(&url)
        .await
        .expect("Failed to connect to test database")
}

/// Model that always fails, as if the upstream API were unreachable.
#[allow(dead_code)]
pub struct FailingModel;

impl ModelClient for FailingModel {
    fn generate<'a>(
        &'a self,
        _request: &'a ModelRequest,
    ) -> BoxFuture<'a, Result<Option<String>, AppError>> {
        async { Err(AppError::ModelApi("HTTP 403 Forbidden: API key missing".to_string())) }
            .boxed()
    }
}

/// Model that returns a fixed reply and records requests.
#[allow(dead_code)]
pub struct ScriptedModel {
    pub reply: Option<String>,
    pub requests: Mutex<Vec<ModelRequest>>,
}

#[allow(dead_code)]
impl ScriptedModel {
    pub fn new(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(reply.to_string()),
            requests: Mutex::new(Vec::new()),
        })
    }
}

impl ModelClient for ScriptedModel {
    fn generate<'a>(
        &'a self,
        request: &'a ModelRequest,
    ) -> BoxFuture<'a, Result<Option<String>, AppError>> {
        self.requests.lock().unwrap().push(request.clone());
        let reply = self.reply.clone();
        async move { Ok(reply) }.boxed()
    }
}

/// Create a test app with an offline database and the given model.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app_with_model(model: Arc<dyn ModelClient>) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config: Config::test_default(),
        db: SiteDb::new_offline(),
        analyzer: SiteAnalyzer::new(model.clone()),
        assistant: Assistant::new(model),
    });

    (create_router(state.clone()), state)
}

/// Create a test app whose model is unreachable.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app_with_model(Arc::new(FailingModel))
}

/// Create a session token for `user_id`.
#[allow(dead_code)]
pub fn create_test_jwt(user_id: &str, signing_key: &[u8]) -> String {
    create_jwt(user_id, signing_key).expect("JWT creation should succeed")
}

/// Read a JSON response body.
#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&body).expect("Body should be JSON")
}
