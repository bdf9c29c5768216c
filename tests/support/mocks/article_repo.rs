// tests/support/mocks/article_repo.rs
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use folio_core::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleRecord, ArticleWriteRepository, NewArticle,
};
use folio_core::domain::errors::{DomainError, DomainResult};
use folio_core::domain::slug::{Slug, SlugError, SlugIndex};
use tokio::sync::Barrier;

/// Holds the first `parties` slug lookups, after they read the store, until
/// all of them have arrived. Concurrent writers then act on the same snapshot.
struct LookupGate {
    barrier: Barrier,
    parties: usize,
    seen: AtomicUsize,
}

/// Serves both the read and the write side, with a unique slug key.
#[derive(Default)]
pub struct InMemoryArticleRepo {
    inner: Mutex<BTreeMap<i64, Article>>,
    gate: Option<LookupGate>,
}

impl InMemoryArticleRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lookup_barrier(parties: usize) -> Self {
        Self {
            gate: Some(LookupGate {
                barrier: Barrier::new(parties),
                parties,
                seen: AtomicUsize::new(0),
            }),
            ..Self::default()
        }
    }

    pub fn slugs(&self) -> Vec<String> {
        let articles = self.inner.lock().unwrap();
        articles.values().map(|a| a.slug.to_string()).collect()
    }

    fn check_slug(articles: &BTreeMap<i64, Article>, id: Option<i64>, slug: &Slug) -> DomainResult<()> {
        let taken = articles
            .values()
            .any(|a| Some(a.id.0) != id && a.slug == *slug);
        if taken {
            return Err(SlugError::PersistenceConflict(slug.to_string()).into());
        }
        Ok(())
    }
}

#[async_trait]
impl SlugIndex<ArticleRecord> for InMemoryArticleRepo {
    async fn slug_exists(&self, slug: &Slug) -> DomainResult<bool> {
        let exists = {
            let articles = self.inner.lock().unwrap();
            articles.values().any(|a| a.slug == *slug)
        };
        if let Some(gate) = &self.gate {
            if gate.seen.fetch_add(1, Ordering::SeqCst) < gate.parties {
                gate.barrier.wait().await;
            }
        }
        Ok(exists)
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let slug = article
            .slug
            .ok_or_else(|| DomainError::Validation("article has no slug assigned".into()))?;
        let mut articles = self.inner.lock().unwrap();
        Self::check_slug(&articles, None, &slug)?;

        let id = articles.keys().next_back().copied().unwrap_or(0) + 1;
        let stored = Article {
            id: ArticleId::new(id)?,
            kind: article.kind,
            title: article.title,
            summary: article.summary,
            content: article.content,
            status: article.status,
            thumbnail: article.thumbnail,
            banner: article.banner,
            author_id: article.author_id,
            slug,
            created_at: article.created_at,
            updated_at: None,
        };
        articles.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, article: Article) -> DomainResult<Article> {
        let mut articles = self.inner.lock().unwrap();
        if !articles.contains_key(&article.id.0) {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Self::check_slug(&articles, Some(article.id.0), &article.slug)?;
        articles.insert(article.id.0, article.clone());
        Ok(article)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.inner
            .lock()
            .unwrap()
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.inner.lock().unwrap().get(&id.0).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Article>> {
        let articles = self.inner.lock().unwrap();
        Ok(articles.values().find(|a| a.slug == *slug).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        let articles = self.inner.lock().unwrap();
        Ok(articles.values().rev().cloned().collect())
    }
}
