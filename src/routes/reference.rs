// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Public read-only data: reference tables and AI-suggested sites.

use crate::error::Result;
use crate::models::{DemandCenter, HydrogenSite, RenewableSource};
use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/sites/ai-suggested", get(ai_suggested_sites))
        .route("/api/renewable-sources", get(renewable_sources))
        .route("/api/demand-centers", get(demand_centers))
}

/// AI-suggested sites are visible to everyone, best score first.
async fn ai_suggested_sites(State(state): State<Arc<AppState>>) -> Result<Json<Vec<HydrogenSite>>> {
    Ok(Json(state.db.get_ai_suggested_sites().await?))
}

async fn renewable_sources(State(state): State<Arc<AppState>>) -> Result<Json<Vec<RenewableSource>>> {
    Ok(Json(state.db.get_renewable_sources().await?))
}

async fn demand_centers(State(state): State<Arc<AppState>>) -> Result<Json<Vec<DemandCenter>>> {
    Ok(Json(state.db.get_demand_centers().await?))
}
