//! Database errors for portfolio operations

use models_portfolio::api::ValidationErrors;
use thiserror::Error;

/// Errors that can occur during database operations
#[derive(Debug, Error)]
pub enum PortfolioDatabaseError {
    #[error("row not found")]
    NotFound,

    /// A unique constraint rejected the write, e.g. a duplicate project slug.
    #[error("unique constraint violated: {constraint}")]
    UniqueViolation { constraint: String },

    /// The request failed field-level validation before persistence.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("query error: {0}")]
    Query(sqlx::Error),
}

impl From<sqlx::Error> for PortfolioDatabaseError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::NotFound,
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Self::UniqueViolation {
                    constraint: db_err.constraint().unwrap_or("unknown").to_string(),
                }
            }
            other => Self::Query(other),
        }
    }
}
