// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Model-backed routes: chat and site analysis.
//!
//! Neither route surfaces model failures; the services fall back to
//! canned data instead.

use crate::models::{ChatMessage, NearbyDemand, NearbyRenewable, SiteAnalysis};
use crate::services::proximity::{self, DEFAULT_NEARBY_LIMIT};
use crate::AppState;
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/chat", post(chat))
        .route("/api/analyze-site", post(analyze_site))
}

// ─── Chat ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ChatResponse {
    pub response: String,
}

async fn chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    tracing::debug!(turns = request.messages.len(), "Chat request");
    let response = state.assistant.chat_with_assistant(&request.messages).await;
    Json(ChatResponse { response })
}

// ─── Site Analysis ───────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeSiteRequest {
    pub latitude: f64,
    pub longitude: f64,
    /// When both lists are omitted they are derived from the reference tables.
    #[serde(default)]
    pub nearby_renewables: Option<Vec<NearbyRenewable>>,
    #[serde(default)]
    pub nearby_demand: Option<Vec<NearbyDemand>>,
}

async fn analyze_site(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeSiteRequest>,
) -> Json<SiteAnalysis> {
    let AnalyzeSiteRequest {
        latitude,
        longitude,
        nearby_renewables,
        nearby_demand,
    } = request;

    let (renewables, demand) = match (nearby_renewables, nearby_demand) {
        (None, None) => nearby_from_reference(&state, latitude, longitude).await,
        (renewables, demand) => (renewables.unwrap_or_default(), demand.unwrap_or_default()),
    };

    let analysis = state
        .analyzer
        .analyze_site_location(latitude, longitude, &renewables, &demand)
        .await;

    tracing::info!(
        latitude,
        longitude,
        renewables = renewables.len(),
        demand = demand.len(),
        score = analysis.suitability_score,
        "Site analyzed"
    );

    Json(analysis)
}

/// Look up nearby infrastructure. Reference data is best-effort: if the
/// tables can't be read the analysis runs with empty lists.
async fn nearby_from_reference(
    state: &AppState,
    latitude: f64,
    longitude: f64,
) -> (Vec<NearbyRenewable>, Vec<NearbyDemand>) {
    let radius_km = state.config.nearby_radius_km;

    let (sources, centers) = tokio::join!(
        state.db.get_renewable_sources(),
        state.db.get_demand_centers()
    );

    let renewables = match sources {
        Ok(sources) => proximity::nearby_renewables(
            latitude,
            longitude,
            &sources,
            radius_km,
            DEFAULT_NEARBY_LIMIT,
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Could not load renewable sources for analysis");
            Vec::new()
        }
    };

    let demand = match centers {
        Ok(centers) => proximity::nearby_demand(
            latitude,
            longitude,
            &centers,
            radius_km,
            DEFAULT_NEARBY_LIMIT,
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Could not load demand centers for analysis");
            Vec::new()
        }
    };

    (renewables, demand)
}
