pub mod internal_access;
