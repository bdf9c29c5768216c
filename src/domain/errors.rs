// src/domain/errors.rs
use crate::domain::slug::SlugError;
use crate::domain::validation::FieldErrors;
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("invalid fields: {0}")]
    InvalidFields(FieldErrors),
    #[error(transparent)]
    Slug(#[from] SlugError),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl From<FieldErrors> for DomainError {
    fn from(errors: FieldErrors) -> Self {
        Self::InvalidFields(errors)
    }
}
