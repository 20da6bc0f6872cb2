use crate::error::PortfolioDatabaseError;
use crate::projects::PROJECT_COLUMNS;
use models_portfolio::Project;
use models_portfolio::api::requests::CreateProjectRequest;
use models_portfolio::slug::slugify;
use sqlx::types::Json;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

type Result<T> = std::result::Result<T, PortfolioDatabaseError>;

/// Creates a project.
///
/// When no slug is supplied one is derived from the title; an existing slug
/// is taken as-is and never re-derived later. A duplicate slug is rejected by
/// the unique constraint and surfaces as
/// [`PortfolioDatabaseError::UniqueViolation`].
#[tracing::instrument(skip(db, request), fields(title = %request.title))]
pub async fn create_project(db: &Pool<Postgres>, request: &CreateProjectRequest) -> Result<Project> {
    request.validate()?;

    let slug = match request.slug.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(slug) => slug.to_string(),
        None => slugify(&request.title),
    };

    let id = Uuid::now_v7();
    let custom_fields = request.custom_fields.clone().unwrap_or_default();

    let project = sqlx::query_as::<_, Project>(&format!(
        r#"
        INSERT INTO projects (
            id, title, slug, description, association, time_frame, role,
            featured_image, custom_fields, is_published, display_order
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING {PROJECT_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(&request.title)
    .bind(&slug)
    .bind(&request.description)
    .bind(&request.association)
    .bind(&request.time_frame)
    .bind(&request.role)
    .bind(&request.featured_image)
    .bind(Json(&custom_fields))
    .bind(request.is_published)
    .bind(request.display_order)
    .fetch_one(db)
    .await?;

    tracing::info!(project_id = %project.id, slug = %project.slug, "created project");

    Ok(project)
}
