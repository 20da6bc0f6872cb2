use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The id of the single profile row. All writes are redirected onto it.
pub const PROFILE_ID: i32 = 1;

/// Singleton profile powering the hero section of every page.
///
/// Exactly one row exists; reads go through get-or-create and writes always
/// target [`PROFILE_ID`].
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, sqlx::FromRow)]
pub struct Profile {
    pub id: i32,
    /// Full name
    pub name: String,
    /// Professional title/role
    pub title: String,
    /// Short bio/introduction
    pub bio: String,
    /// Logo image path for the navbar
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Favicon path for the browser tab
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    /// Contact email address
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kaggle_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Social links in display order, `(label, url)`, skipping unset ones.
    pub fn social_links(&self) -> Vec<(&'static str, &str)> {
        [
            ("GitHub", self.github_url.as_deref()),
            ("LinkedIn", self.linkedin_url.as_deref()),
            ("Kaggle", self.kaggle_url.as_deref()),
            ("Twitter", self.twitter_url.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.map(|u| (label, u)))
        .collect()
    }
}
