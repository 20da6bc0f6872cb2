pub mod create_experience;
pub mod delete_experience;
pub mod get_experiences;
pub mod update_experience;

pub use create_experience::create_experience;
pub use delete_experience::delete_experience;
pub use get_experiences::{get_experience, get_experiences};
pub use update_experience::update_experience;
