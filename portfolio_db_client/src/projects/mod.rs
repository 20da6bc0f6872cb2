pub mod create_project;
pub mod delete_project;
pub mod edit_project;
pub mod get_project;
pub mod get_projects;
pub mod set_published;

pub use create_project::create_project;
pub use delete_project::delete_project;
pub use edit_project::edit_project;
pub use get_project::{get_project, get_published_project_by_slug};
pub use get_projects::{get_projects, get_published_projects};
pub use set_published::set_published;

pub(crate) const PROJECT_COLUMNS: &str = r#"
    id, title, slug, description, association, time_frame, role,
    featured_image, custom_fields, is_published, display_order,
    created_at, updated_at
"#;
