// src/application/commands/users/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{
        security::{PasswordHasher, TokenGenerator},
        time::Clock,
    },
    domain::{
        slug::SlugAssigner,
        user::{UserRecord, UserRepository},
    },
};

pub type UserSlugAssigner = SlugAssigner<UserRecord, dyn UserRepository>;

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_generator: Arc<dyn TokenGenerator>,
    pub(super) slugs: Arc<UserSlugAssigner>,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_generator: Arc<dyn TokenGenerator>,
        slugs: Arc<UserSlugAssigner>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            token_generator,
            slugs,
            clock,
        }
    }
}
