use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub content: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub banner: Option<String>,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            kind: article.kind.into_inner(),
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            summary: article.summary,
            content: article.content,
            status: article.status,
            thumbnail: article.thumbnail,
            banner: article.banner,
            author_id: article.author_id.into(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// Article as shown on the public blog: no authorship details.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicArticleDto {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub content: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub banner: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<ArticleDto> for PublicArticleDto {
    fn from(article: ArticleDto) -> Self {
        Self {
            id: article.id,
            kind: article.kind,
            title: article.title,
            slug: article.slug,
            summary: article.summary,
            content: article.content,
            status: article.status,
            thumbnail: article.thumbnail,
            banner: article.banner,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}
