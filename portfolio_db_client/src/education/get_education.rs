use crate::error::PortfolioDatabaseError;
use models_portfolio::Education;
use sqlx::{Pool, Postgres};

type Result<T> = std::result::Result<T, PortfolioDatabaseError>;

const EDUCATION_COLUMNS: &str = r#"
    id, institution, degree, location, start_date, end_date,
    is_current, description, display_order
"#;

/// All education entries in display order, same rule as experiences.
#[tracing::instrument(skip(db))]
pub async fn get_education(db: &Pool<Postgres>) -> Result<Vec<Education>> {
    let entries = sqlx::query_as::<_, Education>(&format!(
        r#"
        SELECT {EDUCATION_COLUMNS}
        FROM education
        ORDER BY display_order ASC, start_date DESC
        "#
    ))
    .fetch_all(db)
    .await?;

    Ok(entries)
}

#[tracing::instrument(skip(db))]
pub async fn get_education_entry(db: &Pool<Postgres>, id: i64) -> Result<Education> {
    let entry = sqlx::query_as::<_, Education>(&format!(
        "SELECT {EDUCATION_COLUMNS} FROM education WHERE id = $1"
    ))
    .bind(id)
    .fetch_one(db)
    .await?;

    Ok(entry)
}
