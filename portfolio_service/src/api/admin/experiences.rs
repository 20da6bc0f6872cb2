use crate::api::{context::ApiContext, error::HttpError};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use models_portfolio::api::requests::ExperienceRequest;
use models_portfolio::api::responses::ExperienceResponse;
use portfolio_db_client::experiences::{
    create_experience, delete_experience, get_experience, get_experiences, update_experience,
};

#[utoipa::path(
    get,
    tag = "admin",
    path = "/internal/experiences",
    responses(
        (status = 200, body = Vec<ExperienceResponse>),
        (status = 401, body = String),
        (status = 500, body = String),
    )
)]
#[tracing::instrument(skip(app_state))]
pub async fn list_experiences_handler(
    State(app_state): State<ApiContext>,
) -> Result<Json<Vec<ExperienceResponse>>, HttpError> {
    let experiences = get_experiences(&app_state.db).await?;
    Ok(Json(experiences.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    tag = "admin",
    path = "/internal/experiences/{id}",
    params(("id" = i64, Path, description = "experience id")),
    responses(
        (status = 200, body = ExperienceResponse),
        (status = 401, body = String),
        (status = 404, body = String),
    )
)]
#[tracing::instrument(skip(app_state))]
pub async fn get_experience_handler(
    State(app_state): State<ApiContext>,
    Path(id): Path<i64>,
) -> Result<Json<ExperienceResponse>, HttpError> {
    let experience = get_experience(&app_state.db, id).await?;
    Ok(Json(experience.into()))
}

#[utoipa::path(
    post,
    tag = "admin",
    path = "/internal/experiences",
    request_body = ExperienceRequest,
    responses(
        (status = 201, body = ExperienceResponse),
        (status = 400, description = "Validation failure with field-level messages"),
        (status = 401, body = String),
    )
)]
#[tracing::instrument(skip(app_state, request))]
pub async fn create_experience_handler(
    State(app_state): State<ApiContext>,
    Json(request): Json<ExperienceRequest>,
) -> Result<(StatusCode, Json<ExperienceResponse>), HttpError> {
    let experience = create_experience(&app_state.db, &request).await?;
    Ok((StatusCode::CREATED, Json(experience.into())))
}

#[utoipa::path(
    put,
    tag = "admin",
    path = "/internal/experiences/{id}",
    params(("id" = i64, Path, description = "experience id")),
    request_body = ExperienceRequest,
    responses(
        (status = 200, body = ExperienceResponse),
        (status = 400, description = "Validation failure with field-level messages"),
        (status = 401, body = String),
        (status = 404, body = String),
    )
)]
#[tracing::instrument(skip(app_state, request))]
pub async fn update_experience_handler(
    State(app_state): State<ApiContext>,
    Path(id): Path<i64>,
    Json(request): Json<ExperienceRequest>,
) -> Result<Json<ExperienceResponse>, HttpError> {
    let experience = update_experience(&app_state.db, id, &request).await?;
    Ok(Json(experience.into()))
}

#[utoipa::path(
    delete,
    tag = "admin",
    path = "/internal/experiences/{id}",
    params(("id" = i64, Path, description = "experience id")),
    responses(
        (status = 204),
        (status = 401, body = String),
        (status = 404, body = String),
    )
)]
#[tracing::instrument(skip(app_state))]
pub async fn delete_experience_handler(
    State(app_state): State<ApiContext>,
    Path(id): Path<i64>,
) -> Result<StatusCode, HttpError> {
    delete_experience(&app_state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
