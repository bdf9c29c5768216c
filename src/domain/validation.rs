// src/domain/validation.rs
use crate::domain::errors::{DomainError, DomainResult};
use chrono::NaiveDate;
use std::{collections::BTreeMap, fmt};

pub const NOT_BLANK: &str = "This value should not be blank.";

/// Every rule a record failed, keyed by field name.
///
/// Only the first failure per field is kept so the map reads like a form
/// error summary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_owned())
            .or_insert_with(|| message.into());
    }

    /// Record the failure of `result` under `field` and hand back the value on success.
    pub fn capture<T>(&mut self, field: &str, result: DomainResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(DomainError::Validation(message)) => {
                self.add(field, message);
                None
            }
            Err(other) => {
                self.add(field, other.to_string());
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.0
    }

    pub fn into_result(self) -> DomainResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(DomainError::InvalidFields(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

fn too_long(max_chars: usize) -> DomainError {
    DomainError::Validation(format!(
        "This value is too long. It should have {max_chars} characters or less."
    ))
}

/// A non-blank string of at most `max_chars` characters (unbounded when `None`).
pub fn required_text(value: impl Into<String>, max_chars: Option<usize>) -> DomainResult<String> {
    let value = value.into();
    if value.trim().is_empty() {
        return Err(DomainError::Validation(NOT_BLANK.into()));
    }
    match max_chars {
        Some(max) if value.chars().count() > max => Err(too_long(max)),
        _ => Ok(value),
    }
}

/// Optional free text; blank input is stored as absent.
pub fn optional_text(value: Option<String>, max_chars: Option<usize>) -> DomainResult<Option<String>> {
    match value {
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => match max_chars {
            Some(max) if value.chars().count() > max => Err(too_long(max)),
            _ => Ok(Some(value)),
        },
        None => Ok(None),
    }
}

pub const INVALID_DATE: &str = "This value is not a valid date.";

/// Optional `YYYY-MM-DD` date; blank input clears it.
pub fn optional_date(value: Option<String>) -> DomainResult<Option<NaiveDate>> {
    match value {
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
            .map(Some)
            .map_err(|_| DomainError::Validation(INVALID_DATE.into())),
        None => Ok(None),
    }
}
