use crate::error::PortfolioDatabaseError;
use crate::projects::PROJECT_COLUMNS;
use models_portfolio::Project;
use sqlx::{Pool, Postgres};

type Result<T> = std::result::Result<T, PortfolioDatabaseError>;

/// Every project regardless of published state, admin listing order.
#[tracing::instrument(skip(db))]
pub async fn get_projects(db: &Pool<Postgres>) -> Result<Vec<Project>> {
    let projects = sqlx::query_as::<_, Project>(&format!(
        r#"
        SELECT {PROJECT_COLUMNS}
        FROM projects
        ORDER BY display_order ASC, created_at DESC
        "#
    ))
    .fetch_all(db)
    .await?;

    Ok(projects)
}

/// Published projects only, in public listing order. This is the only
/// project listing reachable from the public site.
#[tracing::instrument(skip(db))]
pub async fn get_published_projects(db: &Pool<Postgres>) -> Result<Vec<Project>> {
    let projects = sqlx::query_as::<_, Project>(&format!(
        r#"
        SELECT {PROJECT_COLUMNS}
        FROM projects
        WHERE is_published = TRUE
        ORDER BY display_order ASC, created_at DESC
        "#
    ))
    .fetch_all(db)
    .await?;

    Ok(projects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PORTFOLIO_DB_MIGRATIONS;
    use crate::projects::create_project;
    use models_portfolio::api::requests::CreateProjectRequest;

    fn make_request(title: &str, is_published: bool, display_order: i32) -> CreateProjectRequest {
        CreateProjectRequest {
            title: title.to_string(),
            slug: None,
            description: "A description.".to_string(),
            association: None,
            time_frame: None,
            role: None,
            featured_image: None,
            custom_fields: None,
            is_published,
            display_order,
        }
    }

    #[sqlx::test(migrator = "PORTFOLIO_DB_MIGRATIONS")]
    async fn test_published_listing_excludes_unpublished(
        pool: Pool<Postgres>,
    ) -> anyhow::Result<()> {
        create_project(&pool, &make_request("Visible", true, 0)).await?;
        create_project(&pool, &make_request("Hidden", false, 0)).await?;

        let published = get_published_projects(&pool).await?;
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].title, "Visible");

        let all = get_projects(&pool).await?;
        assert_eq!(all.len(), 2);

        Ok(())
    }

    #[sqlx::test(migrator = "PORTFOLIO_DB_MIGRATIONS")]
    async fn test_published_ordering(pool: Pool<Postgres>) -> anyhow::Result<()> {
        // Same display order: creation time breaks the tie, newest first.
        create_project(&pool, &make_request("Older", true, 1)).await?;
        create_project(&pool, &make_request("Newer", true, 1)).await?;
        create_project(&pool, &make_request("First", true, 0)).await?;

        let titles: Vec<String> = get_published_projects(&pool)
            .await?
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["First", "Newer", "Older"]);

        Ok(())
    }

}
