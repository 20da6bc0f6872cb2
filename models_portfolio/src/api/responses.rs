//! API layer response types.

use crate::{Education, Experience, Project};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Experience entry with its computed display column.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExperienceResponse {
    #[serde(flatten)]
    pub experience: Experience,
    /// Formatted span, e.g. "Jun 2020 – Present"
    pub duration: String,
}

impl From<Experience> for ExperienceResponse {
    fn from(experience: Experience) -> Self {
        let duration = experience.duration();
        Self {
            experience,
            duration,
        }
    }
}

/// Education entry with its computed display column.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EducationResponse {
    #[serde(flatten)]
    pub education: Education,
    /// Formatted span, e.g. "2020 – 2023"
    pub duration: String,
}

impl From<Education> for EducationResponse {
    fn from(education: Education) -> Self {
        let duration = education.duration();
        Self {
            education,
            duration,
        }
    }
}

/// Compact project row for admin list views.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProjectListItem {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub is_published: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    /// Featured-image path for a thumbnail preview, when one is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl From<Project> for ProjectListItem {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            title: project.title,
            slug: project.slug,
            is_published: project.is_published,
            display_order: project.display_order,
            created_at: project.created_at,
            thumbnail: project.featured_image,
        }
    }
}

/// Outcome of a bulk publish/unpublish action.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BulkPublishResponse {
    /// Number of affected rows
    pub updated: u64,
    /// Operator-facing confirmation, e.g. "3 project(s) published successfully."
    pub message: String,
}

impl BulkPublishResponse {
    pub fn new(updated: u64, published: bool) -> Self {
        let verb = if published {
            "published"
        } else {
            "unpublished"
        };
        Self {
            updated,
            message: format!("{updated} project(s) {verb} successfully."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bulk_publish_message() {
        assert_eq!(
            BulkPublishResponse::new(3, true).message,
            "3 project(s) published successfully."
        );
        assert_eq!(
            BulkPublishResponse::new(0, false).message,
            "0 project(s) unpublished successfully."
        );
    }
}
