// src/application/commands/articles/status.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleStatusDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        account::AccountEmail,
        article::{ArticleId, ArticleStatus, lifecycle},
    },
};

pub struct ChangeArticleStatusCommand {
    pub id: i64,
    /// Wire value as received; only `PUBLISHED` and `ARCHIVED` are accepted.
    pub status: String,
}

impl ArticleCommandService {
    pub async fn change_status(
        &self,
        email: &AccountEmail,
        command: ChangeArticleStatusCommand,
    ) -> ApplicationResult<ArticleStatusDto> {
        let account = self.accounts.resolve(email).await?;

        let requested: ArticleStatus = command
            .status
            .parse()
            .map_err(|_| ApplicationError::validation("status must be PUBLISHED or ARCHIVED"))?;
        lifecycle::ensure_requestable(requested)?;

        let id = ArticleId::new(command.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await
            .map_err(ApplicationError::from_store)?
            .ok_or_else(|| ApplicationError::validation("article not found"))?;

        let update = article
            .plan_status_change(requested, self.clock.now())
            .inspect_err(|err| {
                tracing::debug!(
                    article_id = %id,
                    from = %article.status,
                    to = %requested,
                    reason = %err,
                    "status transition rejected"
                );
            })?;

        self.write_repo
            .update_status(id, account.id, update)
            .await
            .map_err(ApplicationError::from_scoped_write)?;

        tracing::info!(
            article_id = %id,
            author_id = %account.id,
            from = %article.status,
            to = %update.status,
            "article status changed"
        );
        Ok(ArticleStatusDto {
            id: id.into(),
            status: update.status,
            published_at: update.published_at,
        })
    }
}
