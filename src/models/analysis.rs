// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Site analysis model and normalization of untrusted model output.
//!
//! The generative model is asked for a JSON object, but nothing about its
//! reply is trusted: every field is parsed leniently into a
//! [`PartialAnalysis`] and then [`sanitize`]d into a [`SiteAnalysis`]
//! whose ranges always hold.

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub const DEFAULT_SUITABILITY_SCORE: f64 = 50.0;
pub const DEFAULT_RENEWABLE_ACCESS: f64 = 50.0;
pub const DEFAULT_RENEWABLE_UTILIZATION: f64 = 65.0;
pub const DEFAULT_CO2_SAVED_ANNUALLY: f64 = 25000.0;
pub const DEFAULT_INDUSTRIES_SUPPORTED: u32 = 5;
pub const DEFAULT_TRANSPORT_COST: &str = "Medium";
pub const DEFAULT_DEMAND_PROXIMITY: &str = "Medium";
pub const DEFAULT_WATER_AVAILABILITY: &str = "Good";
pub const DEFAULT_REGULATORY_SUPPORT: &str = "Moderate";
/// Used when the model answered but left recommendations out.
pub const DEFAULT_RECOMMENDATION: &str = "Consider local infrastructure development";
/// Used when there is no usable model answer at all.
pub const FALLBACK_RECOMMENDATION: &str = "Detailed site assessment recommended";

/// Normalized analysis of a candidate site. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SiteAnalysis {
    /// 0-100
    pub suitability_score: f64,
    pub factors: SiteFactors,
    pub recommendations: Vec<String>,
    /// Tons of CO2 per year, >= 0
    pub co2_saved_annually: f64,
    pub industries_supported: u32,
    /// Percent, 0-100
    pub renewable_utilization: f64,
}

/// Per-factor ratings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SiteFactors {
    /// 0-100
    pub renewable_access: f64,
    pub transport_cost: String,
    pub demand_proximity: String,
    pub water_availability: String,
    pub regulatory_support: String,
}

impl SiteAnalysis {
    /// The analysis returned whenever the model call or its parse fails.
    pub fn fallback() -> Self {
        Self {
            suitability_score: DEFAULT_SUITABILITY_SCORE,
            factors: SiteFactors {
                renewable_access: DEFAULT_RENEWABLE_ACCESS,
                transport_cost: DEFAULT_TRANSPORT_COST.to_string(),
                demand_proximity: DEFAULT_DEMAND_PROXIMITY.to_string(),
                water_availability: DEFAULT_WATER_AVAILABILITY.to_string(),
                regulatory_support: DEFAULT_REGULATORY_SUPPORT.to_string(),
            },
            recommendations: vec![FALLBACK_RECOMMENDATION.to_string()],
            co2_saved_annually: DEFAULT_CO2_SAVED_ANNUALLY,
            industries_supported: DEFAULT_INDUSTRIES_SUPPORTED,
            renewable_utilization: DEFAULT_RENEWABLE_UTILIZATION,
        }
    }
}

/// Raw model output. `None` means the field was missing, null, of the
/// wrong type, blank, an empty list, or a numeric zero.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialAnalysis {
    #[serde(deserialize_with = "lenient_number")]
    pub suitability_score: Option<f64>,
    #[serde(deserialize_with = "lenient_object")]
    pub factors: Option<PartialFactors>,
    #[serde(deserialize_with = "lenient_string_list")]
    pub recommendations: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient_number")]
    pub co2_saved_annually: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub industries_supported: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub renewable_utilization: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialFactors {
    #[serde(deserialize_with = "lenient_number")]
    pub renewable_access: Option<f64>,
    #[serde(deserialize_with = "lenient_string")]
    pub transport_cost: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub demand_proximity: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub water_availability: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub regulatory_support: Option<String>,
}

impl PartialAnalysis {
    /// Parse the model's reply text.
    ///
    /// An empty reply is read as `{}`. A surrounding Markdown code fence is
    /// stripped. Returns `None` unless the text is a JSON object.
    pub fn from_reply(text: &str) -> Option<Self> {
        let body = strip_code_fence(text);
        let body = if body.is_empty() { "{}" } else { body };

        match serde_json::from_str::<Value>(body).ok()? {
            value @ Value::Object(_) => serde_json::from_value(value).ok(),
            _ => None,
        }
    }
}

/// Clamp and default every field of a raw analysis.
pub fn sanitize(raw: PartialAnalysis) -> SiteAnalysis {
    let factors = raw.factors.unwrap_or_default();

    SiteAnalysis {
        suitability_score: clamp_percent(raw.suitability_score, DEFAULT_SUITABILITY_SCORE),
        factors: SiteFactors {
            renewable_access: clamp_percent(factors.renewable_access, DEFAULT_RENEWABLE_ACCESS),
            transport_cost: factors
                .transport_cost
                .unwrap_or_else(|| DEFAULT_TRANSPORT_COST.to_string()),
            demand_proximity: factors
                .demand_proximity
                .unwrap_or_else(|| DEFAULT_DEMAND_PROXIMITY.to_string()),
            water_availability: factors
                .water_availability
                .unwrap_or_else(|| DEFAULT_WATER_AVAILABILITY.to_string()),
            regulatory_support: factors
                .regulatory_support
                .unwrap_or_else(|| DEFAULT_REGULATORY_SUPPORT.to_string()),
        },
        recommendations: raw
            .recommendations
            .unwrap_or_else(|| vec![DEFAULT_RECOMMENDATION.to_string()]),
        co2_saved_annually: raw
            .co2_saved_annually
            .unwrap_or(DEFAULT_CO2_SAVED_ANNUALLY)
            .max(0.0),
        // Float-to-int casts saturate, so huge values land on u32::MAX.
        industries_supported: raw
            .industries_supported
            .map(|n| n.max(0.0).round() as u32)
            .unwrap_or(DEFAULT_INDUSTRIES_SUPPORTED),
        renewable_utilization: clamp_percent(
            raw.renewable_utilization,
            DEFAULT_RENEWABLE_UTILIZATION,
        ),
    }
}

fn clamp_percent(value: Option<f64>, default: f64) -> f64 {
    value.unwrap_or(default).clamp(0.0, 100.0)
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") on the opening fence line.
    let rest = rest.split_once('\n').map_or(rest, |(_, body)| body);
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}

// ─── Lenient field deserializers ─────────────────────────────

fn lenient_number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    let value = Option::<Value>::deserialize(d)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
    // Zero reads as "no estimate", same as a missing field.
    .filter(|n| n.is_finite() && *n != 0.0))
}

fn lenient_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let value = Option::<Value>::deserialize(d)?;
    Ok(match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}

fn lenient_string_list<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vec<String>>, D::Error> {
    let value = Option::<Value>::deserialize(d)?;
    let Some(Value::Array(items)) = value else {
        return Ok(None);
    };
    let list: Vec<String> = items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(s) if !s.trim().is_empty() => Some(s),
            _ => None,
        })
        .collect();
    Ok(if list.is_empty() { None } else { Some(list) })
}

fn lenient_object<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(d)?;
    Ok(value
        .filter(Value::is_object)
        .and_then(|v| serde_json::from_value(v).ok()))
}
