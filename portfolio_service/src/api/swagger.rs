use models_portfolio::api::error::{FieldValidationError, ValidationErrors};
use models_portfolio::api::requests::{
    BulkPublishRequest, CreateProjectRequest, EditProjectRequest, EducationRequest,
    ExperienceRequest, UpdateProfileRequest,
};
use models_portfolio::api::responses::{
    BulkPublishResponse, EducationResponse, ExperienceResponse, ProjectListItem,
};
use models_portfolio::{Education, Experience, Profile, Project};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Profile
        crate::api::admin::profile::get_profile_handler,
        crate::api::admin::profile::update_profile_handler,
        // Experiences
        crate::api::admin::experiences::list_experiences_handler,
        crate::api::admin::experiences::get_experience_handler,
        crate::api::admin::experiences::create_experience_handler,
        crate::api::admin::experiences::update_experience_handler,
        crate::api::admin::experiences::delete_experience_handler,
        // Education
        crate::api::admin::education::list_education_handler,
        crate::api::admin::education::get_education_handler,
        crate::api::admin::education::create_education_handler,
        crate::api::admin::education::update_education_handler,
        crate::api::admin::education::delete_education_handler,
        // Projects
        crate::api::admin::projects::list_projects_handler,
        crate::api::admin::projects::get_project_handler,
        crate::api::admin::projects::create_project_handler,
        crate::api::admin::projects::edit_project_handler,
        crate::api::admin::projects::delete_project_handler,
        crate::api::admin::projects::publish_projects_handler,
        crate::api::admin::projects::unpublish_projects_handler,
    ),
    components(
        schemas(
            Profile,
            Experience,
            Education,
            Project,
            UpdateProfileRequest,
            ExperienceRequest,
            EducationRequest,
            CreateProjectRequest,
            EditProjectRequest,
            BulkPublishRequest,
            ExperienceResponse,
            EducationResponse,
            ProjectListItem,
            BulkPublishResponse,
            FieldValidationError,
            ValidationErrors,
        )
    ),
    tags(
        (name = "admin", description = "Internal portfolio content management")
    )
)]
pub struct ApiDoc;
