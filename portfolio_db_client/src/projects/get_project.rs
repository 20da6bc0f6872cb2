use crate::error::PortfolioDatabaseError;
use crate::projects::PROJECT_COLUMNS;
use models_portfolio::Project;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

type Result<T> = std::result::Result<T, PortfolioDatabaseError>;

/// Admin lookup by id, regardless of published state.
#[tracing::instrument(skip(db))]
pub async fn get_project(db: &Pool<Postgres>, id: &Uuid) -> Result<Project> {
    let project = sqlx::query_as::<_, Project>(&format!(
        "SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1"
    ))
    .bind(id)
    .fetch_one(db)
    .await?;

    Ok(project)
}

/// Public lookup by slug.
///
/// Filters to published rows in SQL, so a missing slug and an unpublished
/// project are indistinguishable to the caller.
#[tracing::instrument(skip(db))]
pub async fn get_published_project_by_slug(
    db: &Pool<Postgres>,
    slug: &str,
) -> Result<Option<Project>> {
    let project = sqlx::query_as::<_, Project>(&format!(
        r#"
        SELECT {PROJECT_COLUMNS}
        FROM projects
        WHERE slug = $1 AND is_published = TRUE
        "#
    ))
    .bind(slug)
    .fetch_optional(db)
    .await?;

    Ok(project)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PORTFOLIO_DB_MIGRATIONS;
    use crate::projects::create_project;
    use models_portfolio::api::requests::CreateProjectRequest;

    fn make_request(title: &str, is_published: bool) -> CreateProjectRequest {
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
            display_order: 0,
        }
    }

    #[sqlx::test(migrator = "PORTFOLIO_DB_MIGRATIONS")]
    async fn test_slug_lookup_finds_published(pool: Pool<Postgres>) -> anyhow::Result<()> {
        let created = create_project(&pool, &make_request("Visible App", true)).await?;

        let found = get_published_project_by_slug(&pool, "visible-app").await?;
        assert_eq!(found.map(|p| p.id), Some(created.id));

        Ok(())
    }

    #[sqlx::test(migrator = "PORTFOLIO_DB_MIGRATIONS")]
    async fn test_unpublished_and_missing_look_the_same(pool: Pool<Postgres>) -> anyhow::Result<()> {
        create_project(&pool, &make_request("Hidden App", false)).await?;

        let unpublished = get_published_project_by_slug(&pool, "hidden-app").await?;
        let missing = get_published_project_by_slug(&pool, "no-such-app").await?;

        assert!(unpublished.is_none());
        assert!(missing.is_none());

        Ok(())
    }
}
