// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Site analysis via the generative model.
//!
//! One model call per analysis, no retry. Any failure (transport, HTTP
//! status, unparseable reply) yields [`SiteAnalysis::fallback`], so
//! [`SiteAnalyzer::analyze_site_location`] never returns an error.

use crate::models::{sanitize, NearbyDemand, NearbyRenewable, PartialAnalysis, SiteAnalysis};
use crate::services::model::{ModelClient, ModelRequest, ModelTurn};
use std::sync::Arc;

/// Structure the model is told to return.
const RESPONSE_SCHEMA: &str = r#"{
  "suitabilityScore": number,
  "factors": {
    "renewableAccess": number,
    "transportCost": "string",
    "demandProximity": "string",
    "waterAvailability": "string",
    "regulatorySupport": "string"
  },
  "recommendations": ["string array"],
  "co2SavedAnnually": number,
  "industriesSupported": number,
  "renewableUtilization": number
}"#;

/// Produces normalized site analyses.
#[derive(Clone)]
pub struct SiteAnalyzer {
    model: Arc<dyn ModelClient>,
}

impl SiteAnalyzer {
    pub fn new(model: Arc<dyn ModelClient>) -> Self {
        Self { model }
    }

    /// Analyze a candidate location. Always returns a well-formed analysis.
    pub async fn analyze_site_location(
        &self,
        latitude: f64,
        longitude: f64,
        renewables: &[NearbyRenewable],
        demand: &[NearbyDemand],
    ) -> SiteAnalysis {
        let request = ModelRequest {
            system_instruction: None,
            turns: vec![ModelTurn::user(build_prompt(
                latitude, longitude, renewables, demand,
            ))],
        };

        let text = match self.model.generate(&request).await {
            Ok(text) => text.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, latitude, longitude, "Site analysis call failed");
                return SiteAnalysis::fallback();
            }
        };

        match PartialAnalysis::from_reply(&text) {
            Some(raw) => sanitize(raw),
            None => {
                tracing::warn!(
                    latitude,
                    longitude,
                    reply_len = text.len(),
                    "Site analysis reply was not a JSON object"
                );
                SiteAnalysis::fallback()
            }
        }
    }
}

/// Build the analysis prompt for a location and its surroundings.
pub fn build_prompt(
    latitude: f64,
    longitude: f64,
    renewables: &[NearbyRenewable],
    demand: &[NearbyDemand],
) -> String {
    let renewable_lines = renewables
        .iter()
        .map(|r| {
            format!(
                "- {}: {}km away, {}MW capacity",
                r.source_type, r.distance, r.capacity
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let demand_lines = demand
        .iter()
        .map(|d| format!("- {}: {}km away, {} demand", d.center_type, d.distance, d.level))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Analyze this hydrogen plant location:\n\
         Coordinates: {latitude}, {longitude}\n\
         \n\
         Nearby Renewable Sources:\n\
         {renewable_lines}\n\
         \n\
         Nearby Demand Centers:\n\
         {demand_lines}\n\
         \n\
         Provide a detailed analysis with:\n\
         1. Overall suitability score (0-100)\n\
         2. Factor ratings for renewable access, transport cost, demand proximity, water availability, regulatory support\n\
         3. Specific recommendations\n\
         4. Estimated annual CO2 savings (tons)\n\
         5. Number of industries that could be supported\n\
         6. Renewable energy utilization percentage\n\
         \n\
         Return your analysis in JSON format with this exact structure:\n\
         {RESPONSE_SCHEMA}"
    )
}
