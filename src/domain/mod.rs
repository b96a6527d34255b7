//! Domain aggregates exposed by the roster service layer.

pub mod auth;
pub mod course;
pub mod student;
pub mod types;
