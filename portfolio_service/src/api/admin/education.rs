use crate::api::{context::ApiContext, error::HttpError};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use models_portfolio::api::requests::EducationRequest;
use models_portfolio::api::responses::EducationResponse;
use portfolio_db_client::education::{
    create_education, delete_education, get_education, get_education_entry, update_education,
};

#[utoipa::path(
    get,
    tag = "admin",
    path = "/internal/education",
    responses(
        (status = 200, body = Vec<EducationResponse>),
        (status = 401, body = String),
        (status = 500, body = String),
    )
)]
#[tracing::instrument(skip(app_state))]
pub async fn list_education_handler(
    State(app_state): State<ApiContext>,
) -> Result<Json<Vec<EducationResponse>>, HttpError> {
    let entries = get_education(&app_state.db).await?;
    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    tag = "admin",
    path = "/internal/education/{id}",
    params(("id" = i64, Path, description = "education id")),
    responses(
        (status = 200, body = EducationResponse),
        (status = 401, body = String),
        (status = 404, body = String),
    )
)]
#[tracing::instrument(skip(app_state))]
pub async fn get_education_handler(
    State(app_state): State<ApiContext>,
    Path(id): Path<i64>,
) -> Result<Json<EducationResponse>, HttpError> {
    let entry = get_education_entry(&app_state.db, id).await?;
    Ok(Json(entry.into()))
}

#[utoipa::path(
    post,
    tag = "admin",
    path = "/internal/education",
    request_body = EducationRequest,
    responses(
        (status = 201, body = EducationResponse),
        (status = 400, description = "Validation failure with field-level messages"),
        (status = 401, body = String),
    )
)]
#[tracing::instrument(skip(app_state, request))]
pub async fn create_education_handler(
    State(app_state): State<ApiContext>,
    Json(request): Json<EducationRequest>,
) -> Result<(StatusCode, Json<EducationResponse>), HttpError> {
    let entry = create_education(&app_state.db, &request).await?;
    Ok((StatusCode::CREATED, Json(entry.into())))
}

#[utoipa::path(
    put,
    tag = "admin",
    path = "/internal/education/{id}",
    params(("id" = i64, Path, description = "education id")),
    request_body = EducationRequest,
    responses(
        (status = 200, body = EducationResponse),
        (status = 400, description = "Validation failure with field-level messages"),
        (status = 401, body = String),
        (status = 404, body = String),
    )
)]
#[tracing::instrument(skip(app_state, request))]
pub async fn update_education_handler(
    State(app_state): State<ApiContext>,
    Path(id): Path<i64>,
    Json(request): Json<EducationRequest>,
) -> Result<Json<EducationResponse>, HttpError> {
    let entry = update_education(&app_state.db, id, &request).await?;
    Ok(Json(entry.into()))
}

#[utoipa::path(
    delete,
    tag = "admin",
    path = "/internal/education/{id}",
    params(("id" = i64, Path, description = "education id")),
    responses(
        (status = 204),
        (status = 401, body = String),
        (status = 404, body = String),
    )
)]
#[tracing::instrument(skip(app_state))]
pub async fn delete_education_handler(
    State(app_state): State<ApiContext>,
    Path(id): Path<i64>,
) -> Result<StatusCode, HttpError> {
    delete_education(&app_state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
