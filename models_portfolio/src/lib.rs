//! Shared models for the portfolio backend.
//!
//! Entity structs mirror the database rows in `portfolio_db_client` and are
//! reused as API response bodies. Request/response DTOs live under [`api`].

pub mod api;
pub mod custom_fields;
pub mod duration;
pub mod education;
pub mod experience;
pub mod profile;
pub mod project;
pub mod slug;

pub use custom_fields::CustomFields;
pub use education::Education;
pub use experience::Experience;
pub use profile::Profile;
pub use project::Project;
