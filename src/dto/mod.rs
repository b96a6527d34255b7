//! DTO modules that bridge services with the presentation layer.

pub mod courses;
pub mod students;
