// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleKind, ArticleRecord, ArticleTitle};
use crate::domain::errors::DomainResult;
use crate::domain::slug::{Slug, Sluggable};
use crate::domain::user::UserId;
use crate::domain::validation::{FieldErrors, NOT_BLANK, optional_text, required_text};
use chrono::{DateTime, Utc};

const STATUS_MAX_CHARS: usize = 255;

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub kind: ArticleKind,
    pub title: ArticleTitle,
    pub summary: String,
    pub content: String,
    pub status: Option<String>,
    pub thumbnail: Option<String>,
    pub banner: Option<String>,
    pub author_id: UserId,
    pub slug: Slug,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Article {
    /// Current field values, ready to be overlaid with an update.
    pub fn changes(&self) -> ArticleChanges {
        ArticleChanges {
            kind: Some(self.kind.as_str().to_owned()),
            title: Some(self.title.as_str().to_owned()),
            summary: Some(self.summary.clone()),
            content: Some(self.content.clone()),
            status: self.status.clone(),
            thumbnail: self.thumbnail.clone(),
            banner: self.banner.clone(),
        }
    }

    /// Replace the editable fields. Returns whether the title changed.
    pub fn apply(&mut self, draft: ArticleDraft, now: DateTime<Utc>) -> bool {
        let title_changed = self.title != draft.title;
        self.kind = draft.kind;
        self.title = draft.title;
        self.summary = draft.summary;
        self.content = draft.content;
        self.status = draft.status;
        self.thumbnail = draft.thumbnail;
        self.banner = draft.banner;
        self.updated_at = Some(now);
        title_changed
    }
}

impl Sluggable for Article {
    type Record = ArticleRecord;

    fn slug(&self) -> Option<&Slug> {
        Some(&self.slug)
    }

    fn set_slug(&mut self, slug: Slug) {
        self.slug = slug;
    }
}

/// Raw article fields as submitted by a client. `None` means "not provided".
#[derive(Debug, Clone, Default)]
pub struct ArticleChanges {
    pub kind: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub status: Option<String>,
    pub thumbnail: Option<String>,
    pub banner: Option<String>,
}

impl ArticleChanges {
    /// Overlay every provided field of `other` on top of `self`.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            kind: other.kind.or(self.kind),
            title: other.title.or(self.title),
            summary: other.summary.or(self.summary),
            content: other.content.or(self.content),
            status: other.status.or(self.status),
            thumbnail: other.thumbnail.or(self.thumbnail),
            banner: other.banner.or(self.banner),
        }
    }
}

/// Article fields that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDraft {
    pub kind: ArticleKind,
    pub title: ArticleTitle,
    pub summary: String,
    pub content: String,
    pub status: Option<String>,
    pub thumbnail: Option<String>,
    pub banner: Option<String>,
}

impl ArticleDraft {
    /// Check every field and report all failures at once.
    pub fn validate(changes: ArticleChanges) -> DomainResult<Self> {
        let mut errors = FieldErrors::new();
        let kind = errors.capture("type", ArticleKind::new(changes.kind.unwrap_or_default()));
        let title = errors.capture("title", ArticleTitle::new(changes.title.unwrap_or_default()));
        let summary = errors.capture("summary", required_text(changes.summary.unwrap_or_default(), None));
        let content = errors.capture("content", required_text(changes.content.unwrap_or_default(), None));
        let status = errors.capture("status", optional_text(changes.status, Some(STATUS_MAX_CHARS)));
        let thumbnail = errors.capture("thumbnail", optional_text(changes.thumbnail, None));
        let banner = errors.capture("banner", optional_text(changes.banner, None));

        match (kind, title, summary, content, status, thumbnail, banner) {
            (
                Some(kind),
                Some(title),
                Some(summary),
                Some(content),
                Some(status),
                Some(thumbnail),
                Some(banner),
            ) if errors.is_empty() => Ok(Self {
                kind,
                title,
                summary,
                content,
                status,
                thumbnail,
                banner,
            }),
            _ => {
                if errors.is_empty() {
                    errors.add("article", NOT_BLANK);
                }
                Err(errors.into())
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub kind: ArticleKind,
    pub title: ArticleTitle,
    pub summary: String,
    pub content: String,
    pub status: Option<String>,
    pub thumbnail: Option<String>,
    pub banner: Option<String>,
    pub author_id: UserId,
    /// Unset until a slug has been assigned.
    pub slug: Option<Slug>,
    pub created_at: DateTime<Utc>,
}

impl NewArticle {
    pub fn new(draft: ArticleDraft, author_id: UserId, created_at: DateTime<Utc>) -> Self {
        Self {
            kind: draft.kind,
            title: draft.title,
            summary: draft.summary,
            content: draft.content,
            status: draft.status,
            thumbnail: draft.thumbnail,
            banner: draft.banner,
            author_id,
            slug: None,
            created_at,
        }
    }
}

impl Sluggable for NewArticle {
    type Record = ArticleRecord;

    fn slug(&self) -> Option<&Slug> {
        self.slug.as_ref()
    }

    fn set_slug(&mut self, slug: Slug) {
        self.slug = Some(slug);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;

    fn full_changes() -> ArticleChanges {
        ArticleChanges {
            kind: Some("news".into()),
            title: Some("A Title".into()),
            summary: Some("summary".into()),
            content: Some("content".into()),
            status: Some("draft".into()),
            thumbnail: None,
            banner: None,
        }
    }

    fn sample_article() -> Article {
        let draft = ArticleDraft::validate(full_changes()).unwrap();
        Article {
            id: ArticleId::new(1).unwrap(),
            kind: draft.kind,
            title: draft.title,
            summary: draft.summary,
            content: draft.content,
            status: draft.status,
            thumbnail: None,
            banner: None,
            author_id: UserId::new(1).unwrap(),
            slug: Slug::new("a-title").unwrap(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn validate_reports_every_missing_field() {
        let err = ArticleDraft::validate(ArticleChanges::default()).unwrap_err();
        let DomainError::InvalidFields(errors) = err else {
            panic!("expected field errors");
        };
        for field in ["type", "title", "summary", "content"] {
            assert_eq!(errors.get(field), Some(NOT_BLANK), "{field}");
        }
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn validate_enforces_title_length() {
        let changes = ArticleChanges {
            title: Some("x".repeat(256)),
            ..full_changes()
        };
        let DomainError::InvalidFields(errors) = ArticleDraft::validate(changes).unwrap_err() else {
            panic!("expected field errors");
        };
        assert!(errors.get("title").is_some());
    }

    #[test]
    fn merge_keeps_unprovided_fields() {
        let merged = full_changes().merge(ArticleChanges {
            summary: Some("new summary".into()),
            ..ArticleChanges::default()
        });
        assert_eq!(merged.title.as_deref(), Some("A Title"));
        assert_eq!(merged.summary.as_deref(), Some("new summary"));
    }

    #[test]
    fn apply_reports_title_change_and_touches_updated_at() {
        let mut article = sample_article();
        let now = Utc::now();

        let same_title = ArticleDraft::validate(article.changes().merge(ArticleChanges {
            content: Some("edited".into()),
            ..ArticleChanges::default()
        }))
        .unwrap();
        assert!(!article.apply(same_title, now));
        assert_eq!(article.content, "edited");
        assert_eq!(article.updated_at, Some(now));

        let renamed = ArticleDraft::validate(article.changes().merge(ArticleChanges {
            title: Some("Another Title".into()),
            ..ArticleChanges::default()
        }))
        .unwrap();
        assert!(article.apply(renamed, now));
        // slug is left for the assigner
        assert_eq!(article.slug.as_str(), "a-title");
    }

    #[test]
    fn new_article_starts_unslugged() {
        let draft = ArticleDraft::validate(full_changes()).unwrap();
        let mut article = NewArticle::new(draft, UserId::new(3).unwrap(), Utc::now());
        assert!(Sluggable::slug(&article).is_none());
        article.set_slug(Slug::new("a-title").unwrap());
        assert_eq!(article.slug.as_ref().map(Slug::as_str), Some("a-title"));
    }
}
