use crate::domain::article::{Article, ArticleStatus};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    pub content: String,
    #[schema(value_type = String, example = "DRAFT")]
    pub status: ArticleStatus,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<FixedOffset>,
    #[serde(default)]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub published_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub last_modified_at: Option<DateTime<FixedOffset>>,
    pub author_id: i64,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            subtitle: article.subtitle.into_inner(),
            content: article.content.into_inner(),
            status: article.status,
            created_at: article.created_at,
            published_at: article.published_at,
            last_modified_at: article.last_modified_at,
            author_id: article.author_id.into(),
        }
    }
}

/// Listing projection. Carries the author's id only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ArticleSummaryDto {
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    pub content: String,
    #[schema(value_type = String, example = "PUBLISHED")]
    pub status: ArticleStatus,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<FixedOffset>,
    #[serde(default)]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub published_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub last_modified_at: Option<DateTime<FixedOffset>>,
    pub author_id: i64,
}

impl From<Article> for ArticleSummaryDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            subtitle: article.subtitle.into_inner(),
            content: article.content.into_inner(),
            status: article.status,
            created_at: article.created_at,
            published_at: article.published_at,
            last_modified_at: article.last_modified_at,
            author_id: article.author_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EditedArticleDto {
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    pub content: String,
    #[schema(value_type = String, format = DateTime)]
    pub last_modified_at: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ArticleStatusDto {
    pub id: i64,
    #[schema(value_type = String, example = "PUBLISHED")]
    pub status: ArticleStatus,
    #[serde(default)]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub published_at: Option<DateTime<FixedOffset>>,
}
