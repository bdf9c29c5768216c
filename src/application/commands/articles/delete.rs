// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::{
        commands::access::ensure_can_manage,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        let id = ArticleId::new(command.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        ensure_can_manage(actor, article.author_id, "article")?;

        self.write_repo.delete(id).await?;
        tracing::info!(article_id = id.0, actor_id = actor.id.0, "article deleted");
        Ok(())
    }
}
