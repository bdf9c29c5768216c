// src/domain/slug/assigner.rs
use std::{future::Future, marker::PhantomData, sync::Arc};

use async_trait::async_trait;

use super::{Slug, SlugError, SlugGenerator};
use crate::domain::errors::{DomainError, DomainResult};

/// A category of persisted records sharing one slug namespace.
pub trait RecordType: Send + Sync + 'static {
    const NAME: &'static str;
}

/// A record owning exactly one slug field.
pub trait Sluggable {
    type Record: RecordType;

    fn slug(&self) -> Option<&Slug>;
    fn set_slug(&mut self, slug: Slug);
}

/// Point-in-time, exact-match lookup of slugs within one record type.
#[async_trait]
pub trait SlugIndex<T: RecordType>: Send + Sync {
    async fn slug_exists(&self, slug: &Slug) -> DomainResult<bool>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlugPolicy {
    /// Candidates tried by one assignment before giving up.
    pub max_attempts: u32,
    /// Re-assignments after the store rejected a slug as already taken.
    pub persist_retries: u32,
}

impl SlugPolicy {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;
    pub const DEFAULT_PERSIST_RETRIES: u32 = 5;
}

impl Default for SlugPolicy {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            persist_retries: Self::DEFAULT_PERSIST_RETRIES,
        }
    }
}

/// Outcome of a successful assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugAssignment {
    pub slug: Slug,
    pub suffix: u32,
}

/// Finds an unused slug for records of type `T` and writes it into the record.
///
/// The assigner never persists anything. Callers either save the record
/// themselves or go through [`SlugAssigner::assign_and_persist`], which also
/// recovers when a concurrent writer claimed the same slug between the
/// existence check and the insert.
pub struct SlugAssigner<T, I: ?Sized> {
    index: Arc<I>,
    generator: Arc<dyn SlugGenerator>,
    policy: SlugPolicy,
    _record: PhantomData<fn() -> T>,
}

impl<T, I> SlugAssigner<T, I>
where
    T: RecordType,
    I: SlugIndex<T> + ?Sized,
{
    pub fn new(index: Arc<I>, generator: Arc<dyn SlugGenerator>, policy: SlugPolicy) -> Self {
        Self {
            index,
            generator,
            policy,
            _record: PhantomData,
        }
    }

    pub async fn assign<R>(
        &self,
        identifying_text: &str,
        record: &mut R,
    ) -> DomainResult<SlugAssignment>
    where
        R: Sluggable<Record = T> + Send,
    {
        self.assign_from(identifying_text, record, 0).await
    }

    /// Like [`Self::assign`], but the first candidate carries `start_suffix`.
    pub async fn assign_from<R>(
        &self,
        identifying_text: &str,
        record: &mut R,
        start_suffix: u32,
    ) -> DomainResult<SlugAssignment>
    where
        R: Sluggable<Record = T> + Send,
    {
        if identifying_text.trim().is_empty() {
            return Err(SlugError::EmptyIdentifyingText.into());
        }

        let base = Slug::new(self.generator.slugify(identifying_text))?;
        let mut suffix = start_suffix;

        for _ in 0..self.policy.max_attempts {
            let proposed = base.with_suffix(suffix);

            // The record's own slug is never a collision with itself.
            let owned = record.slug() == Some(&proposed);
            if owned || !self.index.slug_exists(&proposed).await? {
                record.set_slug(proposed.clone());
                return Ok(SlugAssignment {
                    slug: proposed,
                    suffix,
                });
            }

            tracing::debug!(record_type = T::NAME, slug = %proposed, "slug already taken");
            let Some(next) = suffix.checked_add(1) else {
                break;
            };
            suffix = next;
        }

        tracing::warn!(
            record_type = T::NAME,
            base = %base,
            attempts = self.policy.max_attempts,
            "giving up on slug assignment"
        );
        Err(SlugError::Exhausted {
            base: base.into_inner(),
            attempts: self.policy.max_attempts,
        }
        .into())
    }

    /// Assign a slug, then hand a copy of the record to `persist`.
    ///
    /// When `persist` reports [`SlugError::PersistenceConflict`], assignment
    /// restarts one suffix past the rejected candidate, at most
    /// `persist_retries` times.
    pub async fn assign_and_persist<R, F, Fut, O>(
        &self,
        identifying_text: &str,
        record: &mut R,
        persist: F,
    ) -> DomainResult<O>
    where
        R: Sluggable<Record = T> + Clone + Send,
        F: Fn(R) -> Fut + Send + Sync,
        Fut: Future<Output = DomainResult<O>> + Send,
    {
        let mut start_suffix = 0;
        let mut retries = 0;

        loop {
            let assignment = self
                .assign_from(identifying_text, record, start_suffix)
                .await?;

            match persist(record.clone()).await {
                Err(DomainError::Slug(SlugError::PersistenceConflict(slug)))
                    if retries < self.policy.persist_retries =>
                {
                    retries += 1;
                    start_suffix = assignment.suffix.saturating_add(1);
                    tracing::warn!(
                        record_type = T::NAME,
                        %slug,
                        retry = retries,
                        "slug claimed concurrently, reassigning"
                    );
                }
                other => return other,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    enum Widget {}

    impl RecordType for Widget {
        const NAME: &'static str = "widget";
    }

    #[derive(Debug, Clone, Default)]
    struct WidgetRecord {
        slug: Option<Slug>,
    }

    impl Sluggable for WidgetRecord {
        type Record = Widget;

        fn slug(&self) -> Option<&Slug> {
            self.slug.as_ref()
        }

        fn set_slug(&mut self, slug: Slug) {
            self.slug = Some(slug);
        }
    }

    struct LowercaseSlugger;

    impl SlugGenerator for LowercaseSlugger {
        fn slugify(&self, input: &str) -> String {
            input.trim().to_lowercase().replace(' ', "-")
        }
    }

    #[derive(Default)]
    struct FakeIndex {
        taken: HashSet<String>,
        lookups: AtomicUsize,
        fail: bool,
    }

    impl FakeIndex {
        fn with(taken: &[&str]) -> Self {
            Self {
                taken: taken.iter().map(|s| (*s).to_string()).collect(),
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl SlugIndex<Widget> for FakeIndex {
        async fn slug_exists(&self, slug: &Slug) -> DomainResult<bool> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(DomainError::Persistence("connection reset".into()));
            }
            Ok(self.taken.contains(slug.as_str()))
        }
    }

    fn build(index: FakeIndex, policy: SlugPolicy) -> (Arc<FakeIndex>, SlugAssigner<Widget, FakeIndex>) {
        let index = Arc::new(index);
        let assigner = SlugAssigner::new(Arc::clone(&index), Arc::new(LowercaseSlugger), policy);
        (index, assigner)
    }

    #[tokio::test]
    async fn free_candidate_is_used_as_is() {
        let (_, assigner) = build(FakeIndex::default(), SlugPolicy::default());
        let mut record = WidgetRecord::default();
        let assignment = assigner.assign("A Title", &mut record).await.unwrap();
        assert_eq!(assignment.suffix, 0);
        assert_eq!(record.slug.unwrap().as_str(), "a-title");
    }

    #[tokio::test]
    async fn collisions_advance_the_numeric_suffix() {
        let (index, assigner) = build(FakeIndex::with(&["a-title", "a-title-1"]), SlugPolicy::default());
        let mut record = WidgetRecord::default();
        let assignment = assigner.assign("A Title", &mut record).await.unwrap();
        assert_eq!(assignment.slug.as_str(), "a-title-2");
        assert_eq!(assignment.suffix, 2);
        assert_eq!(record.slug.unwrap().as_str(), "a-title-2");
        assert_eq!(index.lookups.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn blank_text_is_rejected_without_lookup() {
        let (index, assigner) = build(FakeIndex::default(), SlugPolicy::default());
        let mut record = WidgetRecord::default();
        for text in ["", "   "] {
            let err = assigner.assign(text, &mut record).await.unwrap_err();
            assert!(matches!(err, DomainError::Slug(SlugError::EmptyIdentifyingText)));
        }
        assert!(record.slug.is_none());
        assert_eq!(index.lookups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn lookup_failure_propagates_unchanged() {
        let index = FakeIndex {
            fail: true,
            ..FakeIndex::default()
        };
        let (_, assigner) = build(index, SlugPolicy::default());
        let mut record = WidgetRecord::default();
        let err = assigner.assign("Anything", &mut record).await.unwrap_err();
        assert!(matches!(err, DomainError::Persistence(msg) if msg == "connection reset"));
        assert!(record.slug.is_none());
    }

    #[tokio::test]
    async fn attempts_are_bounded() {
        let policy = SlugPolicy {
            max_attempts: 3,
            ..SlugPolicy::default()
        };
        let (index, assigner) = build(FakeIndex::with(&["x", "x-1", "x-2", "x-3"]), policy);
        let mut record = WidgetRecord::default();
        let err = assigner.assign("x", &mut record).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Slug(SlugError::Exhausted { ref base, attempts: 3 }) if base == "x"
        ));
        assert_eq!(index.lookups.load(Ordering::SeqCst), 3);
        assert!(record.slug.is_none());
    }

    #[tokio::test]
    async fn record_keeps_its_own_slug() {
        let (index, assigner) = build(FakeIndex::with(&["a-title"]), SlugPolicy::default());
        let mut record = WidgetRecord {
            slug: Some(Slug::new("a-title").unwrap()),
        };
        let assignment = assigner.assign("A title", &mut record).await.unwrap();
        assert_eq!(assignment.slug.as_str(), "a-title");
        assert_eq!(index.lookups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn persistence_conflict_moves_past_the_rejected_slug() {
        // The index is stale: it reports every slug as free.
        let (_, assigner) = build(FakeIndex::default(), SlugPolicy::default());
        let stored = Mutex::new(HashSet::from(["a-title".to_string(), "a-title-1".to_string()]));
        let mut record = WidgetRecord::default();

        let saved = assigner
            .assign_and_persist("A Title", &mut record, |candidate: WidgetRecord| {
                let stored = &stored;
                async move {
                    let slug = candidate.slug.clone().unwrap();
                    let mut stored = stored.lock().unwrap();
                    if stored.insert(slug.as_str().to_string()) {
                        Ok(slug)
                    } else {
                        Err(DomainError::from(SlugError::PersistenceConflict(
                            slug.into_inner(),
                        )))
                    }
                }
            })
            .await
            .unwrap();

        assert_eq!(saved.as_str(), "a-title-2");
        assert_eq!(record.slug.unwrap().as_str(), "a-title-2");
    }

    #[tokio::test]
    async fn persistence_conflict_retries_are_bounded() {
        let policy = SlugPolicy {
            persist_retries: 2,
            ..SlugPolicy::default()
        };
        let (_, assigner) = build(FakeIndex::default(), policy);
        let calls = AtomicUsize::new(0);
        let mut record = WidgetRecord::default();

        let err = assigner
            .assign_and_persist("busy", &mut record, |candidate: WidgetRecord| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    let slug = candidate.slug.unwrap().into_inner();
                    Err::<(), DomainError>(SlugError::PersistenceConflict(slug).into())
                }
            })
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Slug(SlugError::PersistenceConflict(s)) if s == "busy-2"));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn other_persistence_errors_are_not_retried() {
        let (_, assigner) = build(FakeIndex::default(), SlugPolicy::default());
        let calls = AtomicUsize::new(0);
        let mut record = WidgetRecord::default();

        let err = assigner
            .assign_and_persist("busy", &mut record, |_candidate: WidgetRecord| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err::<(), DomainError>(DomainError::Persistence("disk full".into())) }
            })
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Persistence(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
