use crate::duration::year_span;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An education entry. Same ordering rule as experiences.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, sqlx::FromRow)]
pub struct Education {
    pub id: i64,
    /// University/college/school name
    pub institution: String,
    /// Degree/certificate name
    pub degree: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    /// Optional markdown description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Lower numbers appear first
    pub display_order: i32,
}

impl Education {
    /// Formatted span, e.g. "2020 – 2023".
    pub fn duration(&self) -> String {
        year_span(self.start_date, self.end_date, self.is_current)
    }
}
