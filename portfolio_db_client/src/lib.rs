//! Portfolio Database Client
//!
//! Database access functions for the portfolio service: the singleton
//! profile, experiences, education entries, and projects.

pub mod education;
pub mod error;
pub mod experiences;
pub mod profile;
pub mod projects;

/// Embedded migrations for the portfolio tables.
pub static PORTFOLIO_DB_MIGRATIONS: sqlx::migrate::Migrator = sqlx::migrate!();
