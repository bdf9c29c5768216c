use super::ArticleCommandService;
use crate::{
    application::{
        commands::access::ensure_can_manage,
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleChanges, ArticleDraft, ArticleId},
};

pub struct UpdateArticleCommand {
    pub id: i64,
    /// Only the provided fields are changed.
    pub fields: ArticleChanges,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        ensure_can_manage(actor, article.author_id, "article")?;

        let draft = ArticleDraft::validate(article.changes().merge(command.fields))?;
        let title_changed = article.apply(draft, self.clock.now());

        let updated = if title_changed {
            let title = article.title.to_string();
            let repo = &self.write_repo;
            self.slugs
                .assign_and_persist(&title, &mut article, move |candidate| repo.update(candidate))
                .await?
        } else {
            self.write_repo.update(article).await?
        };

        Ok(updated.into())
    }
}
