use crate::error::PortfolioDatabaseError;
use models_portfolio::Education;
use models_portfolio::api::requests::EducationRequest;
use sqlx::{Pool, Postgres};

type Result<T> = std::result::Result<T, PortfolioDatabaseError>;

#[tracing::instrument(skip(db, request), fields(institution = %request.institution))]
pub async fn create_education(
    db: &Pool<Postgres>,
    request: &EducationRequest,
) -> Result<Education> {
    request.validate()?;

    let education = sqlx::query_as::<_, Education>(
        r#"
        INSERT INTO education (
            institution, degree, location, start_date, end_date,
            is_current, description, display_order
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING
            id, institution, degree, location, start_date, end_date,
            is_current, description, display_order
        "#,
    )
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
