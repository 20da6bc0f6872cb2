use crate::custom_fields::CustomFields;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use utoipa::ToSchema;
use uuid::Uuid;

/// A portfolio project.
///
/// Core fields are fixed columns; anything project-specific lives in the
/// [`CustomFields`] bag so new attributes never need a schema change. Only
/// published projects are reachable through the public read paths. Default
/// listing order is `display_order ASC, created_at DESC`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, sqlx::FromRow)]
pub struct Project {
    pub id: Uuid,
    /// Project title
    pub title: String,
    /// Unique URL-friendly identifier, derived from the title when absent at
    /// creation and never re-derived afterward
    pub slug: String,
    /// Main description, markdown
    pub description: String,
    /// Client, company, or organization associated with the project
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association: Option<String>,
    /// Duration or period, e.g. "Jan 2023 - Present"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_frame: Option<String>,
    /// Role in the project, e.g. "Lead Developer"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Main project image path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    /// Flexible key-value attributes (technologies, links, galleries, ...)
    #[schema(value_type = Object)]
    pub custom_fields: Json<CustomFields>,
    /// Whether the project is visible on the public site
    pub is_published: bool,
    /// Lower numbers appear first
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Safe bag lookup; a missing key resolves to `default`.
    pub fn custom_field<'a>(
        &'a self,
        key: &str,
        default: &'a serde_json::Value,
    ) -> &'a serde_json::Value {
        self.custom_fields.get_or(key, default)
    }

    /// Insert or overwrite a bag entry in memory. The project must be
    /// persisted afterward for the change to stick.
    pub fn set_custom_field(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.custom_fields.set(key, value);
    }

    /// Path of the public detail page.
    pub fn detail_path(&self) -> String {
        format!("/project/{}", self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_project() -> Project {
        Project {
            id: Uuid::now_v7(),
            title: "My Cool App".to_string(),
            slug: "my-cool-app".to_string(),
            description: "A cool app.".to_string(),
            association: None,
            time_frame: None,
            role: None,
            featured_image: None,
            custom_fields: Json(CustomFields::new()),
            is_published: true,
            display_order: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_custom_field_default() {
        let project = make_project();
        let default = json!(null);
        assert_eq!(project.custom_field("github_url", &default), &json!(null));
    }

    #[test]
    fn test_set_custom_field_in_memory() {
        let mut project = make_project();
        project.set_custom_field("technologies", json!(["Rust", "axum"]));
        assert_eq!(
            project.custom_field("technologies", &json!(null)),
            &json!(["Rust", "axum"])
        );
    }

    #[test]
    fn test_detail_path() {
        assert_eq!(make_project().detail_path(), "/project/my-cool-app");
    }
}
