use crate::api::{context::ApiContext, error::HttpError};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use models_portfolio::Project;
use models_portfolio::api::requests::{BulkPublishRequest, CreateProjectRequest, EditProjectRequest};
use models_portfolio::api::responses::{BulkPublishResponse, ProjectListItem};
use portfolio_db_client::projects::{
    create_project, delete_project, edit_project, get_project, get_projects, set_published,
};
use uuid::Uuid;

#[utoipa::path(
    get,
    tag = "admin",
    path = "/internal/projects",
    responses(
        (status = 200, body = Vec<ProjectListItem>),
        (status = 401, body = String),
        (status = 500, body = String),
    )
)]
#[tracing::instrument(skip(app_state))]
pub async fn list_projects_handler(
    State(app_state): State<ApiContext>,
) -> Result<Json<Vec<ProjectListItem>>, HttpError> {
    let projects = get_projects(&app_state.db).await?;
    Ok(Json(projects.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    tag = "admin",
    path = "/internal/projects/{id}",
    params(("id" = Uuid, Path, description = "project id")),
    responses(
        (status = 200, body = Project),
        (status = 401, body = String),
        (status = 404, body = String),
    )
)]
#[tracing::instrument(skip(app_state))]
pub async fn get_project_handler(
    State(app_state): State<ApiContext>,
    Path(id): Path<Uuid>,
) -> Result<Json<Project>, HttpError> {
    let project = get_project(&app_state.db, &id).await?;
    Ok(Json(project))
}

#[utoipa::path(
    post,
    tag = "admin",
    path = "/internal/projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 201, body = Project),
        (status = 400, description = "Validation failure, including duplicate slugs"),
        (status = 401, body = String),
    )
)]
#[tracing::instrument(skip(app_state, request), fields(title = %request.title))]
pub async fn create_project_handler(
    State(app_state): State<ApiContext>,
    Json(request): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<Project>), HttpError> {
    let project = create_project(&app_state.db, &request).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

#[utoipa::path(
    put,
    tag = "admin",
    path = "/internal/projects/{id}",
    params(("id" = Uuid, Path, description = "project id")),
    request_body = EditProjectRequest,
    responses(
        (status = 200, body = Project),
        (status = 400, description = "Validation failure with field-level messages"),
        (status = 401, body = String),
        (status = 404, body = String),
    )
)]
#[tracing::instrument(skip(app_state, request))]
pub async fn edit_project_handler(
    State(app_state): State<ApiContext>,
    Path(id): Path<Uuid>,
    Json(request): Json<EditProjectRequest>,
) -> Result<Json<Project>, HttpError> {
    let project = edit_project(&app_state.db, &id, &request).await?;
    Ok(Json(project))
}

#[utoipa::path(
    delete,
    tag = "admin",
    path = "/internal/projects/{id}",
    params(("id" = Uuid, Path, description = "project id")),
    responses(
        (status = 204),
        (status = 401, body = String),
        (status = 404, body = String),
    )
)]
#[tracing::instrument(skip(app_state))]
pub async fn delete_project_handler(
    State(app_state): State<ApiContext>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, HttpError> {
    delete_project(&app_state.db, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    tag = "admin",
    path = "/internal/projects/publish",
    request_body = BulkPublishRequest,
    responses(
        (status = 200, body = BulkPublishResponse),
        (status = 401, body = String),
    )
)]
#[tracing::instrument(skip(app_state, request), fields(count = request.ids.len()))]
pub async fn publish_projects_handler(
    State(app_state): State<ApiContext>,
    Json(request): Json<BulkPublishRequest>,
) -> Result<Json<BulkPublishResponse>, HttpError> {
    let updated = set_published(&app_state.db, &request.ids, true).await?;
    Ok(Json(BulkPublishResponse::new(updated, true)))
}

#[utoipa::path(
    post,
    tag = "admin",
    path = "/internal/projects/unpublish",
    request_body = BulkPublishRequest,
    responses(
        (status = 200, body = BulkPublishResponse),
        (status = 401, body = String),
    )
)]
#[tracing::instrument(skip(app_state, request), fields(count = request.ids.len()))]
pub async fn unpublish_projects_handler(
    State(app_state): State<ApiContext>,
    Json(request): Json<BulkPublishRequest>,
) -> Result<Json<BulkPublishResponse>, HttpError> {
    let updated = set_published(&app_state.db, &request.ids, false).await?;
    Ok(Json(BulkPublishResponse::new(updated, false)))
}
