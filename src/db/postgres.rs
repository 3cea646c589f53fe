// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Postgres client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Users (profile storage)
//! - Hydrogen sites (owner-scoped CRUD)
//! - Reference data (renewable sources, demand centers)

use crate::db::tables;
use crate::error::AppError;
use crate::models::{DemandCenter, HydrogenSite, NewHydrogenSite, RenewableSource, UpsertUser, User};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use std::str::FromStr;
use uuid::Uuid;

const MAX_CONNECTIONS: u32 = 10;

/// Postgres database client.
#[derive(Clone)]
pub struct SiteDb {
    pool: Option<PgPool>,
}

impl SiteDb {
    /// Connect to Postgres and apply pending migrations.
    pub async fn new(database_url: &str) -> Result<Self, AppError> {
        let options = PgConnectOptions::from_str(database_url)
            .map_err(|e| AppError::Database(format!("Invalid DATABASE_URL: {}", e)))?;

        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Postgres: {}", e)))?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| AppError::Database(format!("Migration failed: {}", e)))?;

        tracing::info!("Connected to Postgres, migrations applied");

        Ok(Self { pool: Some(pool) })
    }

    /// Create an offline client for testing.
    ///
    /// All database operations will return an error if called.
    pub fn new_offline() -> Self {
        Self { pool: None }
    }

    /// Helper to get the pool or return an error if offline.
    fn pool(&self) -> Result<&PgPool, AppError> {
        self.pool
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    /// Connectivity probe for health checks.
    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool()?).await?;
        Ok(())
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Get a user by ID.
    pub async fn get_user(&self, id: &str) -> Result<Option<User>, AppError> {
        let sql = format!("SELECT * FROM {} WHERE id = $1", tables::USERS);
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(self.pool()?)
            .await?;
        Ok(user)
    }

    /// Create or update a user, refreshing `updated_at` on conflict.
    pub async fn upsert_user(&self, id: &str, profile: &UpsertUser) -> Result<User, AppError> {
        let sql = format!(
            "INSERT INTO {} (id, email, first_name, last_name, profile_image_url) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (id) DO UPDATE SET \
                 email = EXCLUDED.email, \
                 first_name = EXCLUDED.first_name, \
                 last_name = EXCLUDED.last_name, \
                 profile_image_url = EXCLUDED.profile_image_url, \
                 updated_at = now() \
             RETURNING *",
            tables::USERS
        );
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .bind(&profile.email)
            .bind(&profile.first_name)
            .bind(&profile.last_name)
            .bind(&profile.profile_image_url)
            .fetch_one(self.pool()?)
            .await?;
        Ok(user)
    }

    // ─── Site Operations ─────────────────────────────────────────

    /// Store a new site and return the created row.
    pub async fn create_site(&self, site: &NewHydrogenSite) -> Result<HydrogenSite, AppError> {
        let sql = format!(
            "INSERT INTO {} (id, user_id, latitude, longitude, suitability_score, is_ai_suggested) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
            tables::HYDROGEN_SITES
        );
        let created = sqlx::query_as::<_, HydrogenSite>(&sql)
            .bind(Uuid::new_v4())
            .bind(&site.user_id)
            .bind(site.latitude)
            .bind(site.longitude)
            .bind(site.suitability_score)
            .bind(site.is_ai_suggested)
            .fetch_one(self.pool()?)
            .await?;

        tracing::debug!(site_id = %created.id, user_id = %created.user_id, "Site created");
        Ok(created)
    }

    /// Sites owned by a user, newest first.
    pub async fn get_sites_for_user(&self, user_id: &str) -> Result<Vec<HydrogenSite>, AppError> {
        let sql = format!(
            "SELECT * FROM {} WHERE user_id = $1 ORDER BY created_at DESC",
            tables::HYDROGEN_SITES
        );
        let sites = sqlx::query_as::<_, HydrogenSite>(&sql)
            .bind(user_id)
            .fetch_all(self.pool()?)
            .await?;
        Ok(sites)
    }

    /// AI-suggested sites, best score first.
    pub async fn get_ai_suggested_sites(&self) -> Result<Vec<HydrogenSite>, AppError> {
        let sql = format!(
            "SELECT * FROM {} WHERE is_ai_suggested ORDER BY suitability_score DESC",
            tables::HYDROGEN_SITES
        );
        let sites = sqlx::query_as::<_, HydrogenSite>(&sql)
            .fetch_all(self.pool()?)
            .await?;
        Ok(sites)
    }

    /// Delete a site if `user_id` owns it. Deleting a site that does not
    /// exist or belongs to someone else is a no-op.
    pub async fn delete_site(&self, id: Uuid, user_id: &str) -> Result<(), AppError> {
        let sql = format!(
            "DELETE FROM {} WHERE id = $1 AND user_id = $2",
            tables::HYDROGEN_SITES
        );
        let result = sqlx::query(&sql)
            .bind(id)
            .bind(user_id)
            .execute(self.pool()?)
            .await?;

        if result.rows_affected() == 0 {
            tracing::debug!(site_id = %id, user_id, "Delete matched no owned site");
        }
        Ok(())
    }

    // ─── Reference Data ──────────────────────────────────────────

    pub async fn get_renewable_sources(&self) -> Result<Vec<RenewableSource>, AppError> {
        let sql = format!("SELECT * FROM {} ORDER BY id", tables::RENEWABLE_SOURCES);
        let rows = sqlx::query_as::<_, RenewableSource>(&sql)
            .fetch_all(self.pool()?)
            .await?;
        Ok(rows)
    }

    pub async fn get_demand_centers(&self) -> Result<Vec<DemandCenter>, AppError> {
        let sql = format!("SELECT * FROM {} ORDER BY id", tables::DEMAND_CENTERS);
        let rows = sqlx::query_as::<_, DemandCenter>(&sql)
            .fetch_all(self.pool()?)
            .await?;
        Ok(rows)
    }
}
