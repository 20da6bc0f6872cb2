use crate::api::{context::ApiContext, error::HttpError};
use crate::render::pages::home_page;
use axum::extract::State;
use futures::try_join;
use maud::Markup;
use portfolio_db_client::{education, experiences, profile, projects};

/// Homepage: hero section, experiences, education and published projects.
///
/// The profile read doubles as the lazy get-or-create, so a fresh database
/// serves a placeholder page instead of an error.
#[tracing::instrument(skip(app_state))]
pub async fn home_handler(State(app_state): State<ApiContext>) -> Result<Markup, HttpError> {
    let db = &app_state.db;

    let (profile, experiences, education, published) = try_join!(
        profile::get_or_create_profile(db),
        experiences::get_experiences(db),
        education::get_education(db),
        projects::get_published_projects(db),
    )?;

    Ok(home_page(&profile, &experiences, &education, &published))
}
