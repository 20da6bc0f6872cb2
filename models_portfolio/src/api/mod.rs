//! API layer request/response types.

pub mod error;
pub mod requests;
pub mod responses;

pub use error::{FieldValidationError, ValidationErrors};
