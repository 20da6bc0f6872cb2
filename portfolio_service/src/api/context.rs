use crate::config::Config;
use axum::extract::FromRef;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApiContext {
    pub db: PgPool,
    pub config: Arc<Config>,
}
