//! Internal admin API. All routes are authenticated via the internal_access
//! middleware.

use crate::api::context::ApiContext;
use axum::{
    Router,
    routing::{get, post},
};

pub mod education;
pub mod experiences;
pub mod profile;
pub mod projects;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route(
            "/profile",
            get(profile::get_profile_handler).put(profile::update_profile_handler),
        )
        .route(
            "/experiences",
            get(experiences::list_experiences_handler).post(experiences::create_experience_handler),
        )
        .route(
            "/experiences/:id",
            get(experiences::get_experience_handler)
                .put(experiences::update_experience_handler)
                .delete(experiences::delete_experience_handler),
        )
        .route(
            "/education",
            get(education::list_education_handler).post(education::create_education_handler),
        )
        .route(
            "/education/:id",
            get(education::get_education_handler)
                .put(education::update_education_handler)
                .delete(education::delete_education_handler),
        )
        .route(
            "/projects",
            get(projects::list_projects_handler).post(projects::create_project_handler),
        )
        .route(
            "/projects/publish",
            post(projects::publish_projects_handler),
        )
        .route(
            "/projects/unpublish",
            post(projects::unpublish_projects_handler),
        )
        .route(
            "/projects/:id",
            get(projects::get_project_handler)
                .put(projects::edit_project_handler)
                .delete(projects::delete_project_handler),
        )
}
