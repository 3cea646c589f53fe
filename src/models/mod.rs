// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod analysis;
pub mod chat;
pub mod reference;
pub mod site;
pub mod user;

pub use analysis::{sanitize, PartialAnalysis, SiteAnalysis, SiteFactors};
pub use chat::{ChatMessage, ChatRole};
pub use reference::{DemandCenter, NearbyDemand, NearbyRenewable, RenewableSource};
pub use site::{CreateSiteRequest, HydrogenSite, NewHydrogenSite};
pub use user::{UpsertUser, User};
