// src/infrastructure/repositories/postgres_article.rs
use super::{map_sqlx, map_sqlx_for};
use crate::domain::article::{
    Article, ArticleId, ArticleKind, ArticleReadRepository, ArticleRecord, ArticleTitle,
    ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{Slug, SlugIndex};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const ARTICLE_COLUMNS: &str = "id, kind, title, summary, content, status, thumbnail, banner, \
     author_id, slug, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    kind: String,
    title: String,
    summary: String,
    content: String,
    status: Option<String>,
    thumbnail: Option<String>,
    banner: Option<String>,
    author_id: i64,
    slug: String,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ArticleId::new(row.id)?,
            kind: ArticleKind::new(row.kind)?,
            title: ArticleTitle::new(row.title)?,
            summary: row.summary,
            content: row.content,
            status: row.status,
            thumbnail: row.thumbnail,
            banner: row.banner,
            author_id: UserId::new(row.author_id)?,
            slug: Slug::new(row.slug)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            kind,
            title,
            summary,
            content,
            status,
            thumbnail,
            banner,
            author_id,
            slug,
            created_at,
        } = article;
        let slug =
            slug.ok_or_else(|| DomainError::Validation("article has no slug assigned".into()))?;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (kind, title, summary, content, status, thumbnail, banner, author_id, slug, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(kind.as_str())
        .bind(title.as_str())
        .bind(summary)
        .bind(content)
        .bind(status)
        .bind(thumbnail)
        .bind(banner)
        .bind(i64::from(author_id))
        .bind(slug.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_for(&slug))?;

        Article::try_from(row)
    }

    async fn update(&self, article: Article) -> DomainResult<Article> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "UPDATE articles
             SET kind = $1, title = $2, summary = $3, content = $4, status = $5,
                 thumbnail = $6, banner = $7, slug = $8, updated_at = $9
             WHERE id = $10
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(article.kind.as_str())
        .bind(article.title.as_str())
        .bind(&article.summary)
        .bind(&article.content)
        .bind(&article.status)
        .bind(&article.thumbnail)
        .bind(&article.banner)
        .bind(article.slug.as_str())
        .bind(article.updated_at)
        .bind(i64::from(article.id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_for(&article.slug))?;

        row.ok_or_else(|| DomainError::NotFound("article not found".into()))
            .and_then(Article::try_from)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl SlugIndex<ArticleRecord> for PostgresArticleReadRepository {
    async fn slug_exists(&self, slug: &Slug) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM articles WHERE slug = $1)")
            .bind(slug.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}
