use crate::error::PortfolioDatabaseError;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

type Result<T> = std::result::Result<T, PortfolioDatabaseError>;

/// Bulk publish/unpublish. Returns the number of affected rows; ids that
/// match no project are simply not counted.
#[tracing::instrument(skip(db, ids), fields(count = ids.len()))]
pub async fn set_published(db: &Pool<Postgres>, ids: &[Uuid], published: bool) -> Result<u64> {
    let result = sqlx::query(
        r#"
        UPDATE projects
        SET is_published = $2, updated_at = NOW()
        WHERE id = ANY($1)
        "#,
    )
    .bind(ids)
    .bind(published)
    .execute(db)
    .await?;

    let updated = result.rows_affected();
    tracing::info!(updated, published, "bulk publish state change");

    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PORTFOLIO_DB_MIGRATIONS;
    use crate::projects::{create_project, get_published_projects};
    use models_portfolio::api::requests::CreateProjectRequest;

    fn make_request(title: &str) -> CreateProjectRequest {
        CreateProjectRequest {
            title: title.to_string(),
            slug: None,
            description: "A description.".to_string(),
            association: None,
            time_frame: None,
            role: None,
            featured_image: None,
            custom_fields: None,
            is_published: false,
            display_order: 0,
        }
    }

    #[sqlx::test(migrator = "PORTFOLIO_DB_MIGRATIONS")]
    async fn test_bulk_publish_counts_affected_rows(pool: Pool<Postgres>) -> anyhow::Result<()> {
        let a = create_project(&pool, &make_request("A")).await?;
        let b = create_project(&pool, &make_request("B")).await?;
        create_project(&pool, &make_request("C")).await?;

        let updated = set_published(&pool, &[a.id, b.id, Uuid::now_v7()], true).await?;
        assert_eq!(updated, 2);

        let published = get_published_projects(&pool).await?;
        assert_eq!(published.len(), 2);

        let reverted = set_published(&pool, &[a.id, b.id], false).await?;
        assert_eq!(reverted, 2);
        assert!(get_published_projects(&pool).await?.is_empty());

        Ok(())
    }
}
