// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_article;
mod postgres_user;

pub(crate) use error::{map_sqlx, map_sqlx_for};
pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use postgres_user::PostgresUserRepository;
