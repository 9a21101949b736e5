// src/domain/article/repository.rs
use crate::domain::account::AccountId;
use crate::domain::article::entity::{
    Article, ArticleContentUpdate, ArticleStatusUpdate, NewArticle,
};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Writes are scoped by `(id, author_id)` in a single statement. When nothing
/// matches the store answers `DomainError::NotFound` without saying whether the
/// article is missing or owned by someone else.
#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<ArticleId>;

    async fn update_content(
        &self,
        id: ArticleId,
        author_id: AccountId,
        update: ArticleContentUpdate,
    ) -> DomainResult<()>;

    async fn update_status(
        &self,
        id: ArticleId,
        author_id: AccountId,
        update: ArticleStatusUpdate,
    ) -> DomainResult<()>;
}

/// Listings are ordered by id ascending and include every status.
#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn list_all(&self) -> DomainResult<Vec<Article>>;
    async fn list_by_author(&self, author_id: AccountId) -> DomainResult<Vec<Article>>;
}
