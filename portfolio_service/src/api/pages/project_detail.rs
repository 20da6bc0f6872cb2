use crate::api::{context::ApiContext, error::HttpError};
use crate::render::pages::project_detail_page;
use axum::extract::{Path, State};
use futures::try_join;
use maud::Markup;
use portfolio_db_client::{profile, projects};

/// Project detail page.
///
/// Missing and unpublished slugs produce the same 404, so the existence of
/// unpublished work is not disclosed.
#[tracing::instrument(skip(app_state))]
pub async fn project_detail_handler(
    State(app_state): State<ApiContext>,
    Path(slug): Path<String>,
) -> Result<Markup, HttpError> {
    let db = &app_state.db;

    let (profile, project) = try_join!(
        profile::get_or_create_profile(db),
        projects::get_published_project_by_slug(db, &slug),
    )?;

    let project = project.ok_or_else(|| HttpError::NotFound("project not found".to_string()))?;

    Ok(project_detail_page(&profile, &project))
}
