// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Hydrogen plant site records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use uuid::Uuid;
use validator::Validate;

/// Stored site record in the `hydrogen_sites` table.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct HydrogenSite {
    pub id: Uuid,
    /// Owner's user ID
    pub user_id: String,
    pub latitude: f64,
    pub longitude: f64,
    /// 0-100 composite rating
    pub suitability_score: f64,
    /// Suggested by the AI job; visible to every user
    pub is_ai_suggested: bool,
    pub created_at: DateTime<Utc>,
}

/// Fields needed to insert a new site.
#[derive(Debug, Clone)]
pub struct NewHydrogenSite {
    pub user_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub suitability_score: f64,
    pub is_ai_suggested: bool,
}

/// Request body for a user submitting a site.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSiteRequest {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    pub suitability_score: f64,
}

impl CreateSiteRequest {
    /// Build an insertable record owned by `user_id`.
    ///
    /// User submissions are never AI-suggested.
    pub fn into_new_site(self, user_id: &str) -> NewHydrogenSite {
        NewHydrogenSite {
            user_id: user_id.to_string(),
            latitude: self.latitude,
            longitude: self.longitude,
            suitability_score: self.suitability_score,
            is_ai_suggested: false,
        }
    }
}
