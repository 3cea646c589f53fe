// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod analysis;
pub mod assistant;
pub mod gemini;
pub mod model;
pub mod proximity;

pub use analysis::SiteAnalyzer;
pub use assistant::Assistant;
pub use gemini::GeminiClient;
pub use model::{ModelClient, ModelRequest, ModelRole, ModelTurn};
