//! API layer request types.

use crate::api::error::{ValidationErrors, Validator};
use crate::custom_fields::CustomFields;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Full update of the singleton profile. There is no create request: the
/// profile is synthesized on first read and every write lands on the same
/// row.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub title: String,
    pub bio: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub favicon: Option<String>,
    pub email: String,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub kaggle_url: Option<String>,
    #[serde(default)]
    pub twitter_url: Option<String>,
}

impl UpdateProfileRequest {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        v.require("name", &self.name)
            .require("title", &self.title)
            .require("bio", &self.bio)
            .require("email", &self.email)
            .check(
                "email",
                self.email.trim().is_empty() || self.email.contains('@'),
                "must be a valid email address",
            );
        v.finish()
    }
}

/// Create or full-replace a work experience entry.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExperienceRequest {
    pub company: String,
    pub position: String,
    #[serde(default)]
    pub location: Option<String>,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_current: bool,
    /// Markdown
    pub description: String,
    #[serde(default)]
    pub display_order: i32,
}

impl ExperienceRequest {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        v.require("company", &self.company)
            .require("position", &self.position)
            .require("description", &self.description);
        v.finish()
    }
}

/// Create or full-replace an education entry.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EducationRequest {
    pub institution: String,
    pub degree: String,
    #[serde(default)]
    pub location: Option<String>,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_current: bool,
    /// Markdown, optional
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub display_order: i32,
}

impl EducationRequest {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        v.require("institution", &self.institution)
            .require("degree", &self.degree);
        v.finish()
    }
}

/// Create a project. When `slug` is absent it is derived from the title;
/// a duplicate slug is rejected at persistence time.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateProjectRequest {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    /// Markdown
    pub description: String,
    #[serde(default)]
    pub association: Option<String>,
    #[serde(default)]
    pub time_frame: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub custom_fields: Option<CustomFields>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub display_order: i32,
}

impl CreateProjectRequest {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        v.require("title", &self.title)
            .require("description", &self.description);
        v.finish()
    }
}

/// Partial update of a project. Absent fields are left untouched; an empty
/// string clears an optional field. The slug is immutable here and never
/// re-derived from a changed title.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct EditProjectRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub association: Option<String>,
    #[serde(default)]
    pub time_frame: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub custom_fields: Option<CustomFields>,
    #[serde(default)]
    pub is_published: Option<bool>,
    #[serde(default)]
    pub display_order: Option<i32>,
}

impl EditProjectRequest {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        if let Some(title) = &self.title {
            v.require("title", title);
        }
        if let Some(description) = &self.description {
            v.require("description", description);
        }
        v.finish()
    }
}

/// Bulk publish/unpublish of projects by id.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BulkPublishRequest {
    pub ids: Vec<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_validation_collects_all_fields() {
        let request = UpdateProfileRequest {
            name: "".to_string(),
            title: "  ".to_string(),
            bio: "bio".to_string(),
            logo: None,
            favicon: None,
            email: "not-an-email".to_string(),
            github_url: None,
            linkedin_url: None,
            kaggle_url: None,
            twitter_url: None,
        };

        let errors = request.validate().unwrap_err();
        let fields: Vec<&str> = errors.0.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "title", "email"]);
    }

    #[test]
    fn test_experience_requires_description() {
        let request = ExperienceRequest {
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            location: None,
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            end_date: None,
            is_current: true,
            description: "".to_string(),
            display_order: 0,
        };

        let errors = request.validate().unwrap_err();
        assert_eq!(errors.0.len(), 1);
        assert_eq!(errors.0[0].field, "description");
    }

    #[test]
    fn test_edit_project_absent_fields_pass() {
        assert!(EditProjectRequest::default().validate().is_ok());
    }

    #[test]
    fn test_edit_project_blank_title_rejected() {
        let request = EditProjectRequest {
            title: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }
}
