use crate::error::PortfolioDatabaseError;
use models_portfolio::Experience;
use models_portfolio::api::requests::ExperienceRequest;
use sqlx::{Pool, Postgres};

type Result<T> = std::result::Result<T, PortfolioDatabaseError>;

/// Full replace of an experience entry.
#[tracing::instrument(skip(db, request))]
pub async fn update_experience(
    db: &Pool<Postgres>,
    id: i64,
    request: &ExperienceRequest,
) -> Result<Experience> {
    request.validate()?;

    let experience = sqlx::query_as::<_, Experience>(
        r#"
        UPDATE experiences SET
            company = $2,
            position = $3,
            location = $4,
            start_date = $5,
            end_date = $6,
            is_current = $7,
            description = $8,
            display_order = $9,
            updated_at = NOW()
        WHERE id = $1
        RETURNING
            id, company, position, location, start_date, end_date,
            is_current, description, display_order, created_at, updated_at
        "#,
    )
    .bind(id)
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
