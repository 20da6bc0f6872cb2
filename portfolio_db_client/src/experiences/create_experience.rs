use crate::error::PortfolioDatabaseError;
use models_portfolio::Experience;
use models_portfolio::api::requests::ExperienceRequest;
use sqlx::{Pool, Postgres};

type Result<T> = std::result::Result<T, PortfolioDatabaseError>;

#[tracing::instrument(skip(db, request), fields(company = %request.company))]
pub async fn create_experience(
    db: &Pool<Postgres>,
    request: &ExperienceRequest,
) -> Result<Experience> {
    request.validate()?;

    let experience = sqlx::query_as::<_, Experience>(
        r#"
        INSERT INTO experiences (
            company, position, location, start_date, end_date,
            is_current, description, display_order
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING
            id, company, position, location, start_date, end_date,
            is_current, description, display_order, created_at, updated_at
        "#,
    )
    .bind(&request.company)
    .bind(&request.position)
    .bind(&request.location)
    .bind(request.start_date)
    .bind(request.end_date)
    .bind(request.is_current)
    .bind(&request.description)
    .bind(request.display_order)
    .fetch_one(db)
    .await?;

    Ok(experience)
}
