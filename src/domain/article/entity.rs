// src/domain/article/entity.rs
use crate::domain::account::AccountId;
use crate::domain::article::value_objects::{
    ArticleContent, ArticleId, ArticleStatus, ArticleSubtitle, ArticleTitle,
};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, FixedOffset};

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub subtitle: ArticleSubtitle,
    pub content: ArticleContent,
    pub status: ArticleStatus,
    pub created_at: DateTime<FixedOffset>,
    pub published_at: Option<DateTime<FixedOffset>>,
    pub last_modified_at: Option<DateTime<FixedOffset>>,
    pub author_id: AccountId,
}

impl Article {
    pub fn from_new(id: ArticleId, new: NewArticle) -> Self {
        Self {
            id,
            title: new.title,
            subtitle: new.subtitle,
            content: new.content,
            status: new.status,
            created_at: new.created_at,
            published_at: None,
            last_modified_at: None,
            author_id: new.author_id,
        }
    }

    /// Rejects records whose status and `published_at` disagree.
    pub fn ensure_consistent(&self) -> DomainResult<()> {
        match (self.status, self.published_at) {
            (ArticleStatus::Draft, Some(_)) => Err(DomainError::Persistence(format!(
                "article {} is a draft but carries published_at",
                self.id
            ))),
            (ArticleStatus::Published, None) => Err(DomainError::Persistence(format!(
                "article {} is published without published_at",
                self.id
            ))),
            _ => Ok(()),
        }
    }

    pub fn apply_content(&mut self, update: &ArticleContentUpdate) {
        self.title = update.title.clone();
        self.subtitle = update.subtitle.clone();
        self.content = update.content.clone();
        self.last_modified_at = Some(update.last_modified_at);
    }

    pub fn apply_status(&mut self, update: &ArticleStatusUpdate) {
        self.status = update.status;
        self.published_at = update.published_at;
    }
}

/// An article that has not been persisted yet. Always starts as a draft.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub subtitle: ArticleSubtitle,
    pub content: ArticleContent,
    pub status: ArticleStatus,
    pub created_at: DateTime<FixedOffset>,
    pub author_id: AccountId,
}

impl NewArticle {
    pub fn draft(
        title: ArticleTitle,
        subtitle: ArticleSubtitle,
        content: ArticleContent,
        author_id: AccountId,
        created_at: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            title,
            subtitle,
            content,
            status: ArticleStatus::Draft,
            created_at,
            author_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArticleContentUpdate {
    pub title: ArticleTitle,
    pub subtitle: ArticleSubtitle,
    pub content: ArticleContent,
    pub last_modified_at: DateTime<FixedOffset>,
}

/// `from` is the status the plan was made against. Stores apply the update
/// only while the article still has that status.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArticleStatusUpdate {
    pub from: ArticleStatus,
    pub status: ArticleStatus,
    pub published_at: Option<DateTime<FixedOffset>>,
}
