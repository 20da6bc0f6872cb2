use crate::error::PortfolioDatabaseError;
use crate::projects::PROJECT_COLUMNS;
use models_portfolio::Project;
use models_portfolio::api::requests::EditProjectRequest;
use sqlx::types::Json;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

type Result<T> = std::result::Result<T, PortfolioDatabaseError>;

/// Partial update of a project. Absent request fields keep their stored
/// values; an empty string clears an optional field back to NULL. The slug
/// is deliberately not touched: it is derived at most once, at creation.
#[tracing::instrument(skip(db, request))]
pub async fn edit_project(
    db: &Pool<Postgres>,
    id: &Uuid,
    request: &EditProjectRequest,
) -> Result<Project> {
    request.validate()?;

    let custom_fields = request.custom_fields.as_ref().map(Json);

    let project = sqlx::query_as::<_, Project>(&format!(
        r#"
        UPDATE projects SET
            title = COALESCE($2, title),
            description = COALESCE($3, description),
            association = CASE WHEN $4 IS NULL THEN association ELSE NULLIF($4, '') END,
            time_frame = CASE WHEN $5 IS NULL THEN time_frame ELSE NULLIF($5, '') END,
            role = CASE WHEN $6 IS NULL THEN role ELSE NULLIF($6, '') END,
            featured_image = CASE WHEN $7 IS NULL THEN featured_image ELSE NULLIF($7, '') END,
            custom_fields = COALESCE($8, custom_fields),
            is_published = COALESCE($9, is_published),
            display_order = COALESCE($10, display_order),
            updated_at = NOW()
        WHERE id = $1
        RETURNING {PROJECT_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(&request.title)
    .bind(&request.description)
    .bind(&request.association)
    .bind(&request.time_frame)
    .bind(&request.role)
    .bind(&request.featured_image)
    .bind(custom_fields)
    .bind(request.is_published)
    .bind(request.display_order)
    .fetch_one(db)
    .await?;

    Ok(project)
}
