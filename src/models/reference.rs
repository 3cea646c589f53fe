// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Read-only reference datasets: renewable sources and demand centers.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A solar/wind/hydro installation.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RenewableSource {
    pub id: i32,
    pub name: String,
    /// Source type ("solar", "wind", ...)
    #[serde(rename = "type")]
    pub source_type: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Installed capacity in MW
    pub capacity: f64,
}

/// An industrial hydrogen consumer (steel plant, refinery, port...).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DemandCenter {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub center_type: String,
    pub latitude: f64,
    pub longitude: f64,
    /// "High", "Medium" or "Low"
    pub demand_level: String,
}

/// A renewable source as described to the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyRenewable {
    #[serde(rename = "type")]
    pub source_type: String,
    /// Distance in km
    pub distance: f64,
    /// Capacity in MW
    pub capacity: f64,
}

/// A demand center as described to the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyDemand {
    #[serde(rename = "type")]
    pub center_type: String,
    /// Distance in km
    pub distance: f64,
    pub level: String,
}
