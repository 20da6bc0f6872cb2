use crate::api::{context::ApiContext, error::HttpError};
use axum::{Json, extract::State};
use models_portfolio::Profile;
use models_portfolio::api::requests::UpdateProfileRequest;
use portfolio_db_client::profile::{get_or_create_profile, update_profile};

/// The admin view of the profile is the same get-or-create the public pages
/// use, so the operator always sees the row they are about to edit.
#[utoipa::path(
    get,
    tag = "admin",
    path = "/internal/profile",
    responses(
        (status = 200, body = Profile),
        (status = 401, body = String),
        (status = 500, body = String),
    )
)]
#[tracing::instrument(skip(app_state))]
pub async fn get_profile_handler(
    State(app_state): State<ApiContext>,
) -> Result<Json<Profile>, HttpError> {
    let profile = get_or_create_profile(&app_state.db).await?;
    Ok(Json(profile))
}

#[utoipa::path(
    put,
    tag = "admin",
    path = "/internal/profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, body = Profile),
        (status = 400, description = "Validation failure with field-level messages"),
        (status = 401, body = String),
        (status = 500, body = String),
    )
)]
#[tracing::instrument(skip(app_state, request))]
pub async fn update_profile_handler(
    State(app_state): State<ApiContext>,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<Profile>, HttpError> {
    let profile = update_profile(&app_state.db, &request).await?;
    Ok(Json(profile))
}
