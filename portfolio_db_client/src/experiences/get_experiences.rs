use crate::error::PortfolioDatabaseError;
use models_portfolio::Experience;
use sqlx::{Pool, Postgres};

type Result<T> = std::result::Result<T, PortfolioDatabaseError>;

const EXPERIENCE_COLUMNS: &str = r#"
    id, company, position, location, start_date, end_date,
    is_current, description, display_order, created_at, updated_at
"#;

/// All experiences in display order: `display_order ASC, start_date DESC`.
#[tracing::instrument(skip(db))]
pub async fn get_experiences(db: &Pool<Postgres>) -> Result<Vec<Experience>> {
    let experiences = sqlx::query_as::<_, Experience>(&format!(
        r#"
        SELECT {EXPERIENCE_COLUMNS}
        FROM experiences
        ORDER BY display_order ASC, start_date DESC
        "#
    ))
    .fetch_all(db)
    .await?;

    Ok(experiences)
}

#[tracing::instrument(skip(db))]
pub async fn get_experience(db: &Pool<Postgres>, id: i64) -> Result<Experience> {
    let experience = sqlx::query_as::<_, Experience>(&format!(
        "SELECT {EXPERIENCE_COLUMNS} FROM experiences WHERE id = $1"
    ))
    .bind(id)
    .fetch_one(db)
    .await?;

    Ok(experience)
}
