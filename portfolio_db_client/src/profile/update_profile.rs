use crate::error::PortfolioDatabaseError;
use models_portfolio::api::requests::UpdateProfileRequest;
use models_portfolio::profile::{PROFILE_ID, Profile};
use sqlx::{Pool, Postgres};

type Result<T> = std::result::Result<T, PortfolioDatabaseError>;

/// Writes the singleton profile.
///
/// The write always lands on the fixed singleton id: an attempt to create a
/// second profile becomes an update of the existing row. Enforced here at
/// write time, not at read time.
#[tracing::instrument(skip(db, request))]
pub async fn update_profile(
    db: &Pool<Postgres>,
    request: &UpdateProfileRequest,
) -> Result<Profile> {
    request.validate()?;

    let profile = sqlx::query_as::<_, Profile>(
        r#"
        INSERT INTO profile (
            id, name, title, bio, logo, favicon, email,
            github_url, linkedin_url, kaggle_url, twitter_url, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, NOW())
        ON CONFLICT (id) DO UPDATE SET
            name = EXCLUDED.name,
            title = EXCLUDED.title,
            bio = EXCLUDED.bio,
            logo = EXCLUDED.logo,
            favicon = EXCLUDED.favicon,
            email = EXCLUDED.email,
            github_url = EXCLUDED.github_url,
            linkedin_url = EXCLUDED.linkedin_url,
            kaggle_url = EXCLUDED.kaggle_url,
            twitter_url = EXCLUDED.twitter_url,
            updated_at = NOW()
        RETURNING
            id, name, title, bio, logo, favicon, email,
            github_url, linkedin_url, kaggle_url, twitter_url, updated_at
        "#,
    )
    .bind(PROFILE_ID)
    .bind(&request.name)
    .bind(&request.title)
    .bind(&request.bio)
    .bind(&request.logo)
    .bind(&request.favicon)
    .bind(&request.email)
    .bind(&request.github_url)
    .bind(&request.linkedin_url)
    .bind(&request.kaggle_url)
    .bind(&request.twitter_url)
    .fetch_one(db)
    .await?;

    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PORTFOLIO_DB_MIGRATIONS;
    use crate::profile::get_or_create_profile;

    fn make_request() -> UpdateProfileRequest {
        UpdateProfileRequest {
            name: "Ada Lovelace".to_string(),
            title: "Analyst".to_string(),
            bio: "First programmer.".to_string(),
            logo: None,
            favicon: None,
            email: "ada@example.com".to_string(),
            github_url: Some("https://github.com/ada".to_string()),
            linkedin_url: None,
            kaggle_url: None,
            twitter_url: None,
        }
    }

    #[sqlx::test(migrator = "PORTFOLIO_DB_MIGRATIONS")]
    async fn test_update_redirects_onto_singleton(pool: Pool<Postgres>) -> anyhow::Result<()> {
        // Write without a prior read: still lands on the singleton id.
        let written = update_profile(&pool, &make_request()).await?;
        assert_eq!(written.id, PROFILE_ID);

        // A later get-or-create sees the written values, not placeholders.
        let read = get_or_create_profile(&pool).await?;
        assert_eq!(read.name, "Ada Lovelace");

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM profile")
            .fetch_one(&pool)
            .await?;
        assert_eq!(count, 1);

        Ok(())
    }

    #[sqlx::test(migrator = "PORTFOLIO_DB_MIGRATIONS")]
    async fn test_update_rejects_missing_required_fields(
        pool: Pool<Postgres>,
    ) -> anyhow::Result<()> {
        let mut request = make_request();
        request.name = String::new();

        let err = update_profile(&pool, &request).await.unwrap_err();
        assert!(matches!(err, PortfolioDatabaseError::Validation(_)));

        Ok(())
    }
}
