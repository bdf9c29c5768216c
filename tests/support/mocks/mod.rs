// tests/support/mocks/mod.rs
pub mod article_repo;
pub mod security;
pub mod time;
pub mod user_repo;

pub use article_repo::InMemoryArticleRepo;
pub use security::{CountingTokenGenerator, PlainPasswordHasher};
pub use time::{FixedClock, fixed_now};
pub use user_repo::InMemoryUserRepo;
