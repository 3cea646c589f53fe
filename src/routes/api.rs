// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes for authenticated users.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{CreateSiteRequest, HydrogenSite, UpsertUser, User};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Extension, Json, Router,
};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

/// API routes (require authentication via JWT).
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/auth/user", get(get_me).put(upsert_me))
        .route("/api/sites", get(list_sites).post(create_site))
        .route("/api/sites/{id}", delete(delete_site))
}

// ─── User Profile ────────────────────────────────────────────

/// Get current user profile.
async fn get_me(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<User>> {
    let profile = state
        .db
        .get_user(&user.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user.user_id)))?;

    Ok(Json(profile))
}

/// Create or update the current user's profile (auth provider callback).
async fn upsert_me(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(profile): Json<UpsertUser>,
) -> Result<Json<User>> {
    let saved = state.db.upsert_user(&user.user_id, &profile).await?;
    tracing::info!(user_id = %user.user_id, "User profile upserted");
    Ok(Json(saved))
}

// ─── Sites ───────────────────────────────────────────────────

/// List the caller's own sites, newest first.
async fn list_sites(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<HydrogenSite>>> {
    let sites = state.db.get_sites_for_user(&user.user_id).await?;
    Ok(Json(sites))
}

/// Store a site submitted by the caller.
async fn create_site(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<CreateSiteRequest>,
) -> Result<(StatusCode, Json<HydrogenSite>)> {
    request.validate()?;

    let site = state
        .db
        .create_site(&request.into_new_site(&user.user_id))
        .await?;

    tracing::info!(
        user_id = %user.user_id,
        site_id = %site.id,
        score = site.suitability_score,
        "Site created"
    );

    Ok((StatusCode::CREATED, Json(site)))
}

/// Delete one of the caller's sites. Unknown or foreign IDs are a no-op.
async fn delete_site(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    state.db.delete_site(id, &user.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
