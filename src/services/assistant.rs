// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Conversational hydrogen-infrastructure assistant.
//!
//! Forwards the chat history to the model under a fixed persona. When the
//! model call fails, a canned paragraph is picked by keyword from the last
//! message instead, so the caller always gets a reply.

use crate::models::{ChatMessage, ChatRole};
use crate::services::model::{ModelClient, ModelRequest, ModelRole, ModelTurn};
use std::sync::Arc;

pub const SYSTEM_PROMPT: &str = "You are InfraVision AI Assistant, an expert in India's green hydrogen infrastructure planning. You specialize in:

1. India's National Green Hydrogen Mission and government initiatives
2. Optimal locations for hydrogen plants across Indian states
3. Real Indian projects like GAIL Guna, Adani Kutch, NTPC facilities
4. Suitability scoring based on renewable proximity, demand centers, and geography
5. Indian regulatory framework and incentives under SIGHT scheme
6. Environmental impact specific to Indian industrial needs

Context about India's hydrogen landscape:
- Mission target: 5 MMT green hydrogen production by 2030
- Key states: Gujarat, Rajasthan, Maharashtra, Tamil Nadu for renewable potential
- Major players: NTPC, Adani, GAIL, Reliance, Tata Power
- Focus sectors: Steel (Tata, JSW), refineries (IOCL), chemical plants, mobility

Provide helpful, India-specific advice about green hydrogen infrastructure. Keep responses practical and relevant to Indian context.";

/// Returned when the model answers with no text.
pub const EMPTY_REPLY: &str = "I apologize, but I couldn't process your request at the moment. Please try asking about India's green hydrogen infrastructure or specific locations for hydrogen plants.";

pub const LOCATIONS_REPLY: &str = "Based on India's National Green Hydrogen Mission, the best locations for hydrogen plants are:\n\n1. **Gujarat** - Excellent solar/wind resources, strong industrial base\n2. **Rajasthan** - Abundant solar potential, good transport connectivity\n3. **Maharashtra** - Major industrial demand, renewable energy access\n4. **Tamil Nadu** - Coastal advantages, wind energy potential\n\nOur AI suggestions show real projects like GAIL Guna (operational), Adani Kutch, and NTPC facilities. Click on the green glowing markers to see these actual government-approved locations!";

pub const SCORING_REPLY: &str = "Our suitability scoring considers key factors for Indian locations:\n\n• **Renewable Access** (30 points) - Distance to solar/wind farms\n• **Demand Proximity** (25 points) - Nearby steel, chemical, refinery industries\n• **Geographic Advantage** (15 points) - Gujarat, Rajasthan get highest scores\n• **Transport Cost** - Based on industrial hub connectivity\n• **Regulatory Support** - India has strong hydrogen policies\n\nDrag and drop anywhere on the map to see real-time scoring!";

pub const PROJECTS_REPLY: &str = "India's National Green Hydrogen Mission (₹19,744 crore budget) includes:\n\n**Operational Projects:**\n• GAIL Guna - 4.3 tonnes/day (operational 2024)\n• Adani Kutch - 5MW off-grid facility\n• NTPC Kawas - H2 blending in natural gas\n\n**Major Upcoming:**\n• NTPC Rann of Kutch - 4,750MW renewable park\n• Green ammonia plants in Dhule, Sagar\n• 37 H2 vehicles across 10 routes\n\nTarget: 5 MMT production by 2030 with 125 GW renewable capacity!";

pub const HELP_REPLY: &str = "I'm your InfraVision AI assistant for India's green hydrogen infrastructure! I can help with:\n\n• Finding optimal plant locations across India\n• Understanding suitability scores and factors\n• Information about real government projects\n• Renewable energy integration strategies\n\nTry asking: 'Where are the best locations?' or 'Tell me about current projects' or just click anywhere on the map to analyze that location!";

/// Offline reply rules, checked in order. An empty keyword list always
/// matches, so the last rule is the catch-all.
const FALLBACK_RULES: &[(&[&str], &str)] = &[
    (&["location", "where", "best"], LOCATIONS_REPLY),
    (&["score", "suitability", "rating"], SCORING_REPLY),
    (&["project", "government", "mission"], PROJECTS_REPLY),
    (&[], HELP_REPLY),
];

/// Chat front-end to the model.
#[derive(Clone)]
pub struct Assistant {
    model: Arc<dyn ModelClient>,
}

impl Assistant {
    pub fn new(model: Arc<dyn ModelClient>) -> Self {
        Self { model }
    }

    /// Produce one assistant reply for the given history. Never fails.
    pub async fn chat_with_assistant(&self, messages: &[ChatMessage]) -> String {
        let request = ModelRequest {
            system_instruction: Some(SYSTEM_PROMPT.to_string()),
            turns: messages.iter().map(to_model_turn).collect(),
        };

        match self.model.generate(&request).await {
            Ok(Some(text)) => text,
            Ok(None) => EMPTY_REPLY.to_string(),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    turns = messages.len(),
                    "Assistant call failed, using canned reply"
                );
                let last = messages.last().map(|m| m.content.as_str()).unwrap_or("");
                fallback_reply(last).to_string()
            }
        }
    }
}

fn to_model_turn(message: &ChatMessage) -> ModelTurn {
    let role = match message.role {
        ChatRole::User => ModelRole::User,
        ChatRole::Assistant => ModelRole::Model,
    };
    ModelTurn {
        role,
        text: message.content.clone(),
    }
}

/// Pick the canned reply for a message by substring keyword match.
pub fn fallback_reply(message: &str) -> &'static str {
    let query = message.to_lowercase();
    FALLBACK_RULES
        .iter()
        .find(|(keywords, _)| keywords.is_empty() || keywords.iter().any(|k| query.contains(k)))
        .map(|(_, reply)| *reply)
        .unwrap_or(HELP_REPLY)
}
