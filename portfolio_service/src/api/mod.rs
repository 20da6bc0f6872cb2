use crate::api::context::ApiContext;
use anyhow::Context;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod admin;
pub mod context;
pub mod error;
mod health;
mod middleware;
pub mod pages;
pub mod swagger;

pub async fn setup_and_serve(state: ApiContext) -> anyhow::Result<()> {
    let port = state.config.port;
    let env = state.config.environment;

    let app = api_router(state)
        .layer(TraceLayer::new_for_http())
        .merge(health::router())
        .layer(CorsLayer::permissive())
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", swagger::ApiDoc::openapi()));

    let bind_address = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind to address {}", bind_address))?;

    tracing::info!(
        "portfolio service is up and running with environment {:?} on port {}",
        &env,
        &port
    );

    axum::serve(listener, app.into_make_service())
        .await
        .context("error running axum server")
}

fn api_router(app_state: ApiContext) -> Router {
    Router::new()
        .merge(pages::router())
        .nest(
            "/internal",
            admin::router().layer(axum::middleware::from_fn_with_state(
                app_state.clone(),
                middleware::internal_access::handler,
            )),
        )
        .with_state(app_state)
}
