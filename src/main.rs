// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! InfraVision API Server
//!
//! Stores candidate green hydrogen plant sites and asks Gemini to analyze
//! locations and answer infrastructure planning questions.

use infravision::{
    config::Config,
    db::SiteDb,
    services::{Assistant, GeminiClient, ModelClient, SiteAnalyzer},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting InfraVision API");

    if config.gemini_api_key.is_empty() {
        tracing::warn!("GEMINI_API_KEY not set; chat and analysis will use fallback responses");
    }

    // Connect to Postgres and run migrations
    let db = SiteDb::new(&config.database_url).await?;

    // One model client shared by both advisor services
    let model: Arc<dyn ModelClient> = Arc::new(GeminiClient::new(
        config.gemini_base_url.clone(),
        config.gemini_model.clone(),
        config.gemini_api_key.clone(),
    ));
    tracing::info!(model = %config.gemini_model, "Gemini client initialized");

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        db,
        analyzer: SiteAnalyzer::new(model.clone()),
        assistant: Assistant::new(model),
    });

    // Build router
    let app = infravision::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("infravision=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
