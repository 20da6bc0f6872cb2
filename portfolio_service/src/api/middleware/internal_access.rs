//! Shared-secret gate for the /internal admin routes.

use crate::api::context::ApiContext;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

pub const INTERNAL_AUTH_HEADER: &str = "x-internal-auth";

pub async fn handler(
    State(ctx): State<ApiContext>,
    request: Request,
    next: Next,
) -> Response {
    let provided = request
        .headers()
        .get(INTERNAL_AUTH_HEADER)
        .and_then(|value| value.to_str().ok());

    if provided != Some(ctx.config.internal_auth_key.as_str()) {
        tracing::warn!(path = %request.uri().path(), "rejected internal request");
        return (StatusCode::UNAUTHORIZED, "invalid internal auth key").into_response();
    }

    next.run(request).await
}
