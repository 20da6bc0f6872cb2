use anyhow::Context;

/// Deployment environment, read from `ENVIRONMENT`. Anything unrecognized is
/// treated as production.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Develop,
    Local,
}

impl Environment {
    pub fn new_or_prod() -> Self {
        match std::env::var("ENVIRONMENT").as_deref() {
            Ok("local") => Environment::Local,
            Ok("develop") => Environment::Develop,
            _ => Environment::Production,
        }
    }
}

/// The configuration parameters for the application.
///
/// Pulled from environment variables, which is how the surrounding container
/// is populated.
#[derive(Debug)]
pub struct Config {
    /// The connection URL for the Postgres database this application should use.
    pub database_url: String,
    /// The port to listen for HTTP requests on.
    pub port: usize,
    /// The environment we are in
    pub environment: Environment,
    /// Shared secret guarding the /internal admin routes
    pub internal_auth_key: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("DATABASE_URL must be provided")?;
        let port: usize = std::env::var("PORT")
            .unwrap_or("8080".to_string())
            .parse()
            .context("PORT must be a number")?;
        let environment = Environment::new_or_prod();

        let internal_auth_key =
            std::env::var("INTERNAL_AUTH_KEY").context("INTERNAL_AUTH_KEY must be provided")?;

        Ok(Config {
            database_url,
            port,
            environment,
            internal_auth_key,
        })
    }
}
