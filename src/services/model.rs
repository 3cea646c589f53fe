// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Generative model abstraction.
//!
//! The advisor services hold an `Arc<dyn ModelClient>` so the real Gemini
//! client can be swapped for a scripted fake in tests.

use crate::error::AppError;
use futures_util::future::BoxFuture;

/// Speaker of a turn in the model's conversation format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelRole {
    User,
    Model,
}

impl ModelRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelRole::User => "user",
            ModelRole::Model => "model",
        }
    }
}

/// One text turn sent to the model.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelTurn {
    pub role: ModelRole,
    pub text: String,
}

impl ModelTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ModelRole::User,
            text: text.into(),
        }
    }
}

/// A single generate-content call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelRequest {
    pub system_instruction: Option<String>,
    pub turns: Vec<ModelTurn>,
}

/// A client able to run one generate-content round-trip.
///
/// `Ok(None)` means the call succeeded but the model produced no text.
pub trait ModelClient: Send + Sync {
    fn generate<'a>(
        &'a self,
        request: &'a ModelRequest,
    ) -> BoxFuture<'a, Result<Option<String>, AppError>>;
}
