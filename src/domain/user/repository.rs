use crate::domain::errors::DomainResult;
use crate::domain::slug::{Slug, SlugIndex};
use crate::domain::user::entity::{NewUser, User};
use crate::domain::user::value_objects::{ApiTokenHash, Email, UserId, UserRecord};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: SlugIndex<UserRecord> {
    async fn count(&self) -> DomainResult<u64>;

    /// Fails with a validation error when `new_user.slug` is unset.
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn update(&self, user: User) -> DomainResult<User>;

    async fn delete(&self, id: UserId) -> DomainResult<()>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<User>>;

    async fn find_by_api_token_hash(&self, hash: &ApiTokenHash) -> DomainResult<Option<User>>;

    /// Oldest first.
    async fn list(&self) -> DomainResult<Vec<User>>;

    /// Replace (or clear, with `None`) the stored token digest.
    async fn set_api_token_hash(&self, id: UserId, hash: Option<ApiTokenHash>) -> DomainResult<()>;
}
