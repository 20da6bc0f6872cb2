//! Presentation helpers: markdown conversion, key formatting, and the maud
//! page templates.

pub mod markdown;
pub mod pages;
pub mod text;
