//! Portfolio service library.
//!
//! The HTTP service binary and the static-export binary both compose these
//! modules; keeping them here lets the export pass reuse the exact page
//! rendering the live routes serve.

pub mod api;
pub mod config;
pub mod render;
