// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Postgres integration tests for the site store.
//!
//! These tests require a disposable Postgres database:
//! `TEST_DATABASE_URL=postgres://localhost/infravision_test cargo test`

use infravision::models::{NewHydrogenSite, UpsertUser};

mod common;
use common::test_db;

/// Generate a unique user ID for test isolation.
fn unique_user_id(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4())
}

fn new_site(user_id: &str, score: f64, ai: bool) -> NewHydrogenSite {
    NewHydrogenSite {
        user_id: user_id.to_string(),
        latitude: 23.0,
        longitude: 72.5,
        suitability_score: score,
        is_ai_suggested: ai,
    }
}

#[tokio::test]
async fn test_create_and_list_own_sites() {
    require_database!();
    let db = test_db().await;
    let owner = unique_user_id("owner");
    let other = unique_user_id("other");

    let first = db.create_site(&new_site(&owner, 70.0, false)).await.unwrap();
    let second = db.create_site(&new_site(&owner, 55.0, false)).await.unwrap();
    db.create_site(&new_site(&other, 90.0, false)).await.unwrap();

    let sites = db.get_sites_for_user(&owner).await.unwrap();
    let ids: Vec<_> = sites.iter().map(|s| s.id).collect();

    assert_eq!(sites.len(), 2);
    assert!(sites.iter().all(|s| s.user_id == owner));
    // Newest first
    assert_eq!(ids, vec![second.id, first.id]);
}

#[tokio::test]
async fn test_delete_by_non_owner_is_noop() {
    require_database!();
    let db = test_db().await;
    let owner = unique_user_id("owner");
    let intruder = unique_user_id("intruder");

    let site = db.create_site(&new_site(&owner, 80.0, false)).await.unwrap();

    // No error, no effect
    db.delete_site(site.id, &intruder).await.unwrap();
    let sites = db.get_sites_for_user(&owner).await.unwrap();
    assert_eq!(sites.len(), 1);
    assert_eq!(sites[0].id, site.id);

    // Owner can delete
    db.delete_site(site.id, &owner).await.unwrap();
    assert!(db.get_sites_for_user(&owner).await.unwrap().is_empty());

    // Deleting again is also a no-op
    db.delete_site(site.id, &owner).await.unwrap();
}

#[tokio::test]
async fn test_ai_suggested_sites_filtered_and_ordered() {
    require_database!();
    let db = test_db().await;
    let job = unique_user_id("ai-job");

    db.create_site(&new_site(&job, 61.0, true)).await.unwrap();
    db.create_site(&new_site(&job, 93.0, true)).await.unwrap();
    let manual = db.create_site(&new_site(&job, 99.0, false)).await.unwrap();

    let suggested = db.get_ai_suggested_sites().await.unwrap();

    assert!(suggested.iter().all(|s| s.is_ai_suggested));
    assert!(suggested.iter().all(|s| s.id != manual.id));
    assert!(suggested
        .windows(2)
        .all(|w| w[0].suitability_score >= w[1].suitability_score));

    let mine: Vec<f64> = suggested
        .iter()
        .filter(|s| s.user_id == job)
        .map(|s| s.suitability_score)
        .collect();
    assert_eq!(mine, vec![93.0, 61.0]);
}

#[tokio::test]
async fn test_upsert_user_updates_profile() {
    require_database!();
    let db = test_db().await;
    let id = unique_user_id("user");

    assert!(db.get_user(&id).await.unwrap().is_none());

    let created = db
        .upsert_user(
            &id,
            &UpsertUser {
                first_name: Some("Asha".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(created.first_name.as_deref(), Some("Asha"));

    let updated = db
        .upsert_user(
            &id,
            &UpsertUser {
                first_name: Some("Asha".to_string()),
                last_name: Some("Rao".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, id);
    assert_eq!(updated.last_name.as_deref(), Some("Rao"));
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn test_reference_tables_seeded() {
    require_database!();
    let db = test_db().await;

    // Migrations seed both tables
    let sources = db.get_renewable_sources().await.unwrap();
    let centers = db.get_demand_centers().await.unwrap();
    assert!(sources.iter().any(|s| s.name == "Bhadla Solar Park"));
    assert!(centers.iter().any(|c| c.name == "Jamnagar Refinery"));
    assert!(sources.iter().all(|s| s.capacity > 0.0));
    db.ping().await.unwrap();
}
