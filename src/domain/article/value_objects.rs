use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::RecordType;
use crate::domain::validation::required_text;
use std::fmt;

/// Slug namespace shared by every article.
pub enum ArticleRecord {}

impl RecordType for ArticleRecord {
    const NAME: &'static str = "article";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub const MAX_CHARS: usize = 255;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        required_text(value, Some(Self::MAX_CHARS)).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-form article category, e.g. `news` or `blog`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleKind(String);

impl ArticleKind {
    pub const MAX_CHARS: usize = 255;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        required_text(value, Some(Self::MAX_CHARS)).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
