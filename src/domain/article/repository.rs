use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleRecord};
use crate::domain::errors::DomainResult;
use crate::domain::slug::{Slug, SlugIndex};
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Fails with a validation error when `article.slug` is unset.
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, article: Article) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: SlugIndex<ArticleRecord> {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Article>>;
    /// Newest first.
    async fn list(&self) -> DomainResult<Vec<Article>>;
}
