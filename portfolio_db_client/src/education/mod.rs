pub mod create_education;
pub mod delete_education;
pub mod get_education;
pub mod update_education;

pub use create_education::create_education;
pub use delete_education::delete_education;
pub use get_education::{get_education, get_education_entry};
pub use update_education::update_education;
