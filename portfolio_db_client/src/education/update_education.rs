use crate::error::PortfolioDatabaseError;
use models_portfolio::Education;
use models_portfolio::api::requests::EducationRequest;
use sqlx::{Pool, Postgres};

type Result<T> = std::result::Result<T, PortfolioDatabaseError>;

/// Full replace of an education entry.
#[tracing::instrument(skip(db, request))]
pub async fn update_education(
    db: &Pool<Postgres>,
    id: i64,
    request: &EducationRequest,
) -> Result<Education> {
    request.validate()?;

    let education = sqlx::query_as::<_, Education>(
        r#"
        UPDATE education SET
            institution = $2,
            degree = $3,
            location = $4,
            start_date = $5,
            end_date = $6,
            is_current = $7,
            description = $8,
            display_order = $9
        WHERE id = $1
        RETURNING
            id, institution, degree, location, start_date, end_date,
            is_current, description, display_order
        "#,
    )
    .bind(id)
    .bind(&request.institution)
    .bind(&request.degree)
    .bind(&request.location)
    .bind(request.start_date)
    .bind(request.end_date)
    .bind(request.is_current)
    .bind(&request.description)
    .bind(request.display_order)
    .fetch_one(db)
    .await?;

    Ok(education)
}
