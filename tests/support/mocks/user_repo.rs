// tests/support/mocks/user_repo.rs
use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use folio_core::domain::errors::{DomainError, DomainResult};
use folio_core::domain::slug::{Slug, SlugError, SlugIndex};
use folio_core::domain::user::{
    ApiTokenHash, Email, NewUser, User, UserId, UserRecord, UserRepository,
};

/// Enforces the same unique keys as the `users` table.
#[derive(Default)]
pub struct InMemoryUserRepo {
    inner: Mutex<BTreeMap<i64, User>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: UserId) -> Option<User> {
        self.inner.lock().unwrap().get(&id.0).cloned()
    }

    fn check_unique(
        users: &BTreeMap<i64, User>,
        id: Option<i64>,
        email: &Email,
        slug: &Slug,
    ) -> DomainResult<()> {
        let others = users.values().filter(|u| Some(u.id.0) != id);
        for other in others {
            if other.email == *email {
                return Err(DomainError::Conflict("email is already registered".into()));
            }
            if other.slug == *slug {
                return Err(SlugError::PersistenceConflict(slug.to_string()).into());
            }
        }
        Ok(())
    }
}

#[async_trait]
impl SlugIndex<UserRecord> for InMemoryUserRepo {
    async fn slug_exists(&self, slug: &Slug) -> DomainResult<bool> {
        let users = self.inner.lock().unwrap();
        Ok(users.values().any(|u| u.slug == *slug))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn count(&self) -> DomainResult<u64> {
        Ok(self.inner.lock().unwrap().len() as u64)
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let slug = new_user
            .slug
            .ok_or_else(|| DomainError::Validation("user has no slug assigned".into()))?;
        let mut users = self.inner.lock().unwrap();
        Self::check_unique(&users, None, &new_user.email, &slug)?;

        let id = users.keys().next_back().copied().unwrap_or(0) + 1;
        let user = User {
            id: UserId::new(id)?,
            email: new_user.email,
            password_hash: new_user.password_hash,
            role: new_user.role,
            is_active: new_user.is_active,
            profile: new_user.profile,
            api_token_hash: new_user.api_token_hash,
            slug,
            created_at: new_user.created_at,
            updated_at: None,
        };
        users.insert(id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> DomainResult<User> {
        let mut users = self.inner.lock().unwrap();
        if !users.contains_key(&user.id.0) {
            return Err(DomainError::NotFound("user not found".into()));
        }
        Self::check_unique(&users, Some(user.id.0), &user.email, &user.slug)?;

        // The token column is only written through `set_api_token_hash`.
        let token = users.get(&user.id.0).and_then(|u| u.api_token_hash.clone());
        let stored = User {
            api_token_hash: token,
            ..user
        };
        users.insert(stored.id.0, stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        self.inner
            .lock()
            .unwrap()
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("user not found".into()))
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.get(id))
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let users = self.inner.lock().unwrap();
        Ok(users.values().find(|u| u.email == *email).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<User>> {
        let users = self.inner.lock().unwrap();
        Ok(users.values().find(|u| u.slug == *slug).cloned())
    }

    async fn find_by_api_token_hash(&self, hash: &ApiTokenHash) -> DomainResult<Option<User>> {
        let users = self.inner.lock().unwrap();
        Ok(users
            .values()
            .find(|u| u.api_token_hash.as_ref() == Some(hash))
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<User>> {
        Ok(self.inner.lock().unwrap().values().cloned().collect())
    }

    async fn set_api_token_hash(&self, id: UserId, hash: Option<ApiTokenHash>) -> DomainResult<()> {
        let mut users = self.inner.lock().unwrap();
        let user = users
            .get_mut(&id.0)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        user.api_token_hash = hash;
        Ok(())
    }
}
