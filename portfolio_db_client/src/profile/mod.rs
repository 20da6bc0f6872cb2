pub mod get_profile;
pub mod update_profile;

pub use get_profile::get_or_create_profile;
pub use update_profile::update_profile;
