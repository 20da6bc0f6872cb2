//! HTTP error mapping for handlers.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use models_portfolio::api::{FieldValidationError, ValidationErrors};
use portfolio_db_client::error::PortfolioDatabaseError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<PortfolioDatabaseError> for HttpError {
    fn from(err: PortfolioDatabaseError) -> Self {
        match err {
            PortfolioDatabaseError::NotFound => HttpError::NotFound("not found".to_string()),
            // The only unique constraint in the schema is the project slug.
            PortfolioDatabaseError::UniqueViolation { constraint }
                if constraint == "projects_slug_key" =>
            {
                HttpError::Validation(ValidationErrors(vec![FieldValidationError {
                    field: "slug",
                    message: "already in use by another project".to_string(),
                }]))
            }
            PortfolioDatabaseError::UniqueViolation { constraint } => {
                HttpError::BadRequest(format!("unique constraint violated: {constraint}"))
            }
            PortfolioDatabaseError::Validation(errors) => HttpError::Validation(errors),
            PortfolioDatabaseError::Query(e) => {
                tracing::error!(error = ?e, "database query failed");
                HttpError::Internal("database error".to_string())
            }
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match self {
            HttpError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "errors": errors.0 })),
            )
                .into_response(),
            HttpError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, message).into_response()
            }
            HttpError::NotFound(message) => (StatusCode::NOT_FOUND, message).into_response(),
            HttpError::Internal(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_slug_maps_to_field_error() {
        let err: HttpError = PortfolioDatabaseError::UniqueViolation {
            constraint: "projects_slug_key".to_string(),
        }
        .into();

        match err {
            HttpError::Validation(errors) => {
                assert_eq!(errors.0.len(), 1);
                assert_eq!(errors.0[0].field, "slug");
            }
            other => panic!("unexpected mapping: {other:?}"),
        }
    }

    #[test]
    fn test_not_found_passthrough() {
        let err: HttpError = PortfolioDatabaseError::NotFound.into();
        assert!(matches!(err, HttpError::NotFound(_)));
    }
}
