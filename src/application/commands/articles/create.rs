// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        account::AccountEmail,
        article::{Article, ArticleContent, ArticleSubtitle, ArticleTitle, NewArticle},
        errors::DomainError,
    },
};

pub struct CreateArticleCommand {
    pub title: String,
    pub subtitle: String,
    pub content: String,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    subtitle: Option<String>,
    content: Option<String>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            subtitle: self.subtitle.ok_or("subtitle is required")?,
            content: self.content.ok_or("content is required")?,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        email: &AccountEmail,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let account = self.accounts.resolve(email).await?;

        let title = ArticleTitle::new(command.title)?;
        let subtitle = ArticleSubtitle::new(command.subtitle)?;
        let content = ArticleContent::new(command.content)?;
        let now = self.clock.now();

        let new_article = NewArticle::draft(title, subtitle, content, account.id, now);
        let id = self
            .write_repo
            .insert(new_article.clone())
            .await
            .map_err(|err| match err {
                DomainError::NotFound(_) => {
                    ApplicationError::validation("author account no longer exists")
                }
                other => ApplicationError::from_store(other),
            })?;

        tracing::info!(article_id = %id, author_id = %account.id, "article created");
        Ok(Article::from_new(id, new_article).into())
    }
}
