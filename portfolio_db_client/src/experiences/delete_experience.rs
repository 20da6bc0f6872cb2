use crate::error::PortfolioDatabaseError;
use sqlx::{Pool, Postgres};

type Result<T> = std::result::Result<T, PortfolioDatabaseError>;

#[tracing::instrument(skip(db))]
pub async fn delete_experience(db: &Pool<Postgres>, id: i64) -> Result<()> {
    let result = sqlx::query("DELETE FROM experiences WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(PortfolioDatabaseError::NotFound);
    }

    Ok(())
}
