use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleSummaryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::account::AccountEmail,
};

impl ArticleQueryService {
    /// Every article regardless of status, ordered by id.
    pub async fn list_public(&self) -> ApplicationResult<Vec<ArticleSummaryDto>> {
        let articles = self
            .read_repo
            .list_all()
            .await
            .map_err(ApplicationError::from_store)?;
        Ok(articles.into_iter().map(Into::into).collect())
    }

    pub async fn list_own(&self, email: &AccountEmail) -> ApplicationResult<Vec<ArticleSummaryDto>> {
        let account = self.accounts.resolve(email).await?;
        let articles = self
            .read_repo
            .list_by_author(account.id)
            .await
            .map_err(ApplicationError::from_store)?;
        Ok(articles.into_iter().map(Into::into).collect())
    }
}
