//! Pre-renders the whole public site to a static file tree: the home page at
//! index.html and every published project detail page at
//! project/<slug>/index.html. The output directory can be served as-is with
//! no live query layer.
//!
//! Environment variables:
//! - DATABASE_URL
//! - EXPORT_DIR (optional, defaults to ./dist)

use anyhow::Context;
use portfolio_db_client::{education, experiences, profile, projects};
use portfolio_service::render::pages::{home_page, project_detail_page};
use sqlx::postgres::PgPoolOptions;
use std::fs;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL not set")?;
    let out_dir = PathBuf::from(std::env::var("EXPORT_DIR").unwrap_or("./dist".to_string()));

    let db = PgPoolOptions::new()
        .min_connections(1)
        .max_connections(1)
        .connect(&database_url)
        .await
        .context("could not connect to db")?;

    let profile = profile::get_or_create_profile(&db).await?;
    let experiences = experiences::get_experiences(&db).await?;
    let education = education::get_education(&db).await?;
    let published = projects::get_published_projects(&db).await?;

    fs::create_dir_all(&out_dir)
        .with_context(|| format!("could not create {}", out_dir.display()))?;

    let home = home_page(&profile, &experiences, &education, &published);
    fs::write(out_dir.join("index.html"), home.into_string())?;
    println!("wrote index.html");

    // Detail pages for published projects only, matching the live route's
    // visibility rule. The listing already holds the full rows.
    for project in &published {
        let page_dir = out_dir.join("project").join(&project.slug);
        fs::create_dir_all(&page_dir)
            .with_context(|| format!("could not create {}", page_dir.display()))?;
        fs::write(
            page_dir.join("index.html"),
            project_detail_page(&profile, project).into_string(),
        )?;

        println!("wrote project/{}/index.html", project.slug);
    }

    println!(
        "Completed. Exported {} project page(s) to {}",
        published.len(),
        out_dir.display()
    );

    Ok(())
}
