use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Slug substituted when normalization leaves nothing behind.
pub const SENTINEL_SLUG: &str = "n-a";

/// Lowercase ASCII letters and digits separated by single hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if !is_well_formed(&value) {
            return Err(DomainError::Validation(format!(
                "slug '{value}' must contain only lowercase letters, digits and single hyphens"
            )));
        }
        Ok(Self(value))
    }

    /// `self` for suffix zero, `self-<suffix>` otherwise.
    pub fn with_suffix(&self, suffix: u32) -> Self {
        if suffix == 0 {
            self.clone()
        } else {
            Self(format!("{}-{suffix}", self.0))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

fn is_well_formed(value: &str) -> bool {
    value
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
        && !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}
