use crate::domain::{
    errors::{DomainError, DomainResult},
    validation::required_text,
};

pub(super) const MIN_PASSWORD_CHARS: usize = 8;
pub(super) const MAX_PASSWORD_CHARS: usize = 4096;

pub(super) fn validate_password(password: Option<String>) -> DomainResult<String> {
    let password = required_text(password.unwrap_or_default(), Some(MAX_PASSWORD_CHARS))?;
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(DomainError::Validation(format!(
            "This value is too short. It should have {MIN_PASSWORD_CHARS} characters or more."
        )));
    }
    Ok(password)
}
