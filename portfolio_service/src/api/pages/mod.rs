use crate::api::context::ApiContext;
use axum::{Router, routing::get};
use tower_http::compression::CompressionLayer;

pub mod home;
pub mod project_detail;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route(
            "/",
            get(home::home_handler).layer(CompressionLayer::new()),
        )
        .route(
            "/project/:slug",
            get(project_detail::project_detail_handler),
        )
}
