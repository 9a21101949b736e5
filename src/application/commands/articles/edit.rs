// src/application/commands/articles/edit.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::EditedArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        account::AccountEmail,
        article::{ArticleContent, ArticleContentUpdate, ArticleId, ArticleSubtitle, ArticleTitle},
    },
};

pub struct EditArticleCommand {
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    pub content: String,
}

impl ArticleCommandService {
    /// Replaces the text of an article owned by the caller.
    ///
    /// The article's status is not consulted, so archived articles remain
    /// editable by their author.
    pub async fn edit_article(
        &self,
        email: &AccountEmail,
        command: EditArticleCommand,
    ) -> ApplicationResult<EditedArticleDto> {
        let account = self.accounts.resolve(email).await?;

        let id = ArticleId::new(command.id)?;
        let update = ArticleContentUpdate {
            title: ArticleTitle::new(command.title)?,
            subtitle: ArticleSubtitle::new(command.subtitle)?,
            content: ArticleContent::new(command.content)?,
            last_modified_at: self.clock.now(),
        };

        self.write_repo
            .update_content(id, account.id, update.clone())
            .await
            .map_err(ApplicationError::from_scoped_write)?;

        tracing::info!(article_id = %id, author_id = %account.id, "article edited");
        Ok(EditedArticleDto {
            id: id.into(),
            title: update.title.into_inner(),
            subtitle: update.subtitle.into_inner(),
            content: update.content.into_inner(),
            last_modified_at: update.last_modified_at,
        })
    }
}
