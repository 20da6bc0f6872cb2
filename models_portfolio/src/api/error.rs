//! API validation errors.
//!
//! Validation happens at the store boundary, before persistence, and is
//! surfaced to the admin operator as per-field messages rather than being
//! silently coerced.

use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

/// A single failed field.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FieldValidationError {
    /// Name of the offending field
    #[schema(value_type = String)]
    pub field: &'static str,
    pub message: String,
}

impl FieldValidationError {
    pub fn required(field: &'static str) -> Self {
        Self {
            field,
            message: "must not be empty".to_string(),
        }
    }
}

impl fmt::Display for FieldValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All validation failures for one request.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ValidationErrors(pub Vec<FieldValidationError>);

impl ValidationErrors {
    /// `Ok(())` when no field failed.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{joined}")
    }
}

impl std::error::Error for ValidationErrors {}

/// Collects required-field checks into a [`ValidationErrors`] result.
pub(crate) struct Validator {
    errors: Vec<FieldValidationError>,
}

impl Validator {
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub(crate) fn require(&mut self, field: &'static str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.errors.push(FieldValidationError::required(field));
        }
        self
    }

    pub(crate) fn check(&mut self, field: &'static str, ok: bool, message: &str) -> &mut Self {
        if !ok {
            self.errors.push(FieldValidationError {
                field,
                message: message.to_string(),
            });
        }
        self
    }

    pub(crate) fn finish(self) -> Result<(), ValidationErrors> {
        ValidationErrors(self.errors).into_result()
    }
}
