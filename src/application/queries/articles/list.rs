use super::ArticleQueryService;
use crate::application::{
    dto::{ArticleDto, PublicArticleDto},
    error::ApplicationResult,
};

impl ArticleQueryService {
    /// Every article, newest first.
    pub async fn list_articles(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let records = self.read_repo.list().await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    /// Same listing as [`Self::list_articles`], in its anonymous form.
    pub async fn list_public_articles(&self) -> ApplicationResult<Vec<PublicArticleDto>> {
        let articles = self.list_articles().await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }
}
