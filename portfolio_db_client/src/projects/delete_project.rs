use crate::error::PortfolioDatabaseError;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

type Result<T> = std::result::Result<T, PortfolioDatabaseError>;

#[tracing::instrument(skip(db))]
pub async fn delete_project(db: &Pool<Postgres>, id: &Uuid) -> Result<()> {
    let result = sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(PortfolioDatabaseError::NotFound);
    }

    tracing::info!(project_id = %id, "deleted project");

    Ok(())
}
