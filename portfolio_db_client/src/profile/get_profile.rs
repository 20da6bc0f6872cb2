use crate::error::PortfolioDatabaseError;
use models_portfolio::profile::{PROFILE_ID, Profile};
use sqlx::{Pool, Postgres};

type Result<T> = std::result::Result<T, PortfolioDatabaseError>;

const PROFILE_COLUMNS: &str = r#"
    id,
    name,
    title,
    bio,
    logo,
    favicon,
    email,
    github_url,
    linkedin_url,
    kaggle_url,
    twitter_url,
    updated_at
"#;

/// Gets the singleton profile, creating it with placeholder values on first
/// read.
///
/// The conditional insert is keyed on the fixed singleton id, so two
/// concurrent first reads race on the same row and exactly one insert wins;
/// both callers then observe the same identity.
#[tracing::instrument(skip(db))]
pub async fn get_or_create_profile(db: &Pool<Postgres>) -> Result<Profile> {
    let inserted = sqlx::query(
        r#"
        INSERT INTO profile (id, name, title, bio, email)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (id) DO NOTHING
        "#,
    )
    .bind(PROFILE_ID)
    .bind("Your Name")
    .bind("Your Title")
    .bind("Your bio here.")
    .bind("your.email@example.com")
    .execute(db)
    .await?;

    if inserted.rows_affected() > 0 {
        tracing::info!("created placeholder profile");
    }

    let profile = sqlx::query_as::<_, Profile>(&format!(
        "SELECT {PROFILE_COLUMNS} FROM profile WHERE id = $1"
    ))
    .bind(PROFILE_ID)
    .fetch_one(db)
    .await?;

    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PORTFOLIO_DB_MIGRATIONS;

    #[sqlx::test(migrator = "PORTFOLIO_DB_MIGRATIONS")]
    async fn test_get_or_create_synthesizes_placeholder(
        pool: Pool<Postgres>,
    ) -> anyhow::Result<()> {
        let profile = get_or_create_profile(&pool).await?;

        assert_eq!(profile.id, PROFILE_ID);
        assert_eq!(profile.name, "Your Name");
        assert_eq!(profile.title, "Your Title");
        assert_eq!(profile.bio, "Your bio here.");
        assert_eq!(profile.email, "your.email@example.com");

        Ok(())
    }

    #[sqlx::test(migrator = "PORTFOLIO_DB_MIGRATIONS")]
    async fn test_get_or_create_is_stable(pool: Pool<Postgres>) -> anyhow::Result<()> {
        let first = get_or_create_profile(&pool).await?;
        let second = get_or_create_profile(&pool).await?;

        assert_eq!(first, second);

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM profile")
            .fetch_one(&pool)
            .await?;
        assert_eq!(count, 1);

        Ok(())
    }

    #[sqlx::test(migrator = "PORTFOLIO_DB_MIGRATIONS")]
    async fn test_concurrent_first_reads_yield_one_row(pool: Pool<Postgres>) -> anyhow::Result<()> {
        // All callers race on the conditional insert; exactly one wins and
        // every caller observes the same identity.
        let profiles =
            futures::future::try_join_all((0..5).map(|_| get_or_create_profile(&pool))).await?;

        assert!(profiles.iter().all(|p| p == &profiles[0]));

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM profile")
            .fetch_one(&pool)
            .await?;
        assert_eq!(count, 1);

        Ok(())
    }
}
