use crate::duration::month_year_span;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A work experience entry.
///
/// Listed in `display_order ASC, start_date DESC` order.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, sqlx::FromRow)]
pub struct Experience {
    pub id: i64,
    /// Company/organization name
    pub company: String,
    /// Job title/position
    pub position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub start_date: NaiveDate,
    /// End date, unset while the position is current
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    /// Markdown description of the role
    pub description: String,
    /// Lower numbers appear first
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Experience {
    /// Formatted span, e.g. "Jun 2020 – Present". When `is_current` is set
    /// the end date is ignored.
    pub fn duration(&self) -> String {
        month_year_span(self.start_date, self.end_date, self.is_current)
    }
}
