// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{
            articles::{ArticleCommandService, ArticleSlugAssigner},
            users::{UserCommandService, UserSlugAssigner},
        },
        dto::AuthenticatedUser,
        error::ApplicationError,
        ports::{ClockPort, PasswordHasherPort, SlugGeneratorPort, TokenGeneratorPort},
        queries::{articles::ArticleQueryService, users::UserQueryService},
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        slug::SlugPolicy,
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub user_queries: Arc<UserQueryService>,
    user_repo: Arc<dyn UserRepository>,
    token_generator: Arc<TokenGeneratorPort>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        password_hasher: Arc<PasswordHasherPort>,
        token_generator: Arc<TokenGeneratorPort>,
        clock: Arc<ClockPort>,
        slugger: Arc<SlugGeneratorPort>,
        slug_policy: SlugPolicy,
    ) -> Self {
        let user_slugs = Arc::new(UserSlugAssigner::new(
            Arc::clone(&user_repo),
            Arc::clone(&slugger),
            slug_policy,
        ));
        let article_slugs = Arc::new(ArticleSlugAssigner::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&slugger),
            slug_policy,
        ));

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_generator),
            user_slugs,
            Arc::clone(&clock),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            article_slugs,
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_read_repo)));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));

        Self {
            user_commands,
            article_commands,
            article_queries,
            user_queries,
            user_repo,
            token_generator,
        }
    }

    /// Resolve a raw bearer token to the account it belongs to.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        if token.trim().is_empty() {
            return Err(ApplicationError::unauthorized("invalid token"));
        }

        let hash = self.token_generator.hash(token)?;
        let user = self
            .user_repo
            .find_by_api_token_hash(&hash)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid token"))?;

        if !user.is_active {
            return Err(ApplicationError::unauthorized("account is disabled"));
        }

        Ok(AuthenticatedUser::from(&user))
    }
}
