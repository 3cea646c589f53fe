// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! InfraVision: green hydrogen site-suitability advisor
//!
//! This crate provides the backend API for storing candidate hydrogen plant
//! sites, serving reference infrastructure data, and asking a generative
//! model to analyze locations and answer planning questions.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::SiteDb;
use services::{Assistant, SiteAnalyzer};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: SiteDb,
    pub analyzer: SiteAnalyzer,
    pub assistant: Assistant,
}
