//! Form definitions and import parsers feeding the roster services.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod student;
pub mod upload;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid name")]
    InvalidName,

    #[error("invalid email address")]
    InvalidEmail,

    #[error("invalid course")]
    InvalidCourse,

    #[error("invalid status")]
    InvalidStatus,

    #[error("invalid gpa")]
    InvalidGpa,

    #[error("invalid enrollment date")]
    InvalidDate,

    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid row on line {line}: {source}")]
    InvalidRow {
        line: usize,
        #[source]
        source: TypeConstraintError,
    },
}
