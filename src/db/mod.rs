//! Database layer (Postgres via sqlx).

pub mod postgres;

pub use postgres::SiteDb;

/// Table names as constants.
pub mod tables {
    pub const USERS: &str = "users";
    pub const HYDROGEN_SITES: &str = "hydrogen_sites";
    pub const RENEWABLE_SOURCES: &str = "renewable_sources";
    pub const DEMAND_CENTERS: &str = "demand_centers";
}
