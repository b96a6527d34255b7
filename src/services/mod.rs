use thiserror::Error;

use crate::domain::auth::AuthenticatedUser;
use crate::repository::errors::RepositoryError;

pub mod courses;
pub mod students;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Sign-in required")]
    Unauthorized,

    #[error("Entity not found")]
    NotFound,

    #[error("Form error: {0}")]
    Form(String),

    #[error("Type constraint violated: {0}")]
    TypeConstraint(String),

    #[error("Repository error: {0}")]
    Repository(RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Rejects anonymous callers of actions that sit behind sign-in.
pub fn ensure_signed_in(user: Option<&AuthenticatedUser>) -> ServiceResult<&AuthenticatedUser> {
    user.ok_or(ServiceError::Unauthorized)
}
