// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::{ArticleChanges, ArticleDraft, NewArticle},
};

pub struct CreateArticleCommand {
    pub fields: ArticleChanges,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let draft = ArticleDraft::validate(command.fields)?;
        let mut article = NewArticle::new(draft, actor.id, self.clock.now());
        let title = article.title.to_string();
        let repo = &self.write_repo;

        let created = self
            .slugs
            .assign_and_persist(&title, &mut article, move |candidate| repo.insert(candidate))
            .await?;

        tracing::info!(article_id = created.id.0, slug = %created.slug, "article created");
        Ok(created.into())
    }
}
