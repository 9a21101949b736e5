// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::account::AccountId;
use crate::domain::article::{
    Article, ArticleContent, ArticleContentUpdate, ArticleId, ArticleReadRepository,
    ArticleStatus, ArticleStatusUpdate, ArticleSubtitle, ArticleTitle, ArticleWriteRepository,
    NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use sqlx::{FromRow, PgPool};

const ARTICLE_COLUMNS: &str = "id, title, subtitle, content, status, created_at, published_at, last_modified_at, author_id";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Reads articles back with timestamps in `offset`, the offset the clock
/// stamps them with.
#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
    offset: FixedOffset,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool, offset: FixedOffset) -> Self {
        Self { pool, offset }
    }

    fn decode_rows(&self, rows: Vec<ArticleRow>) -> DomainResult<Vec<Article>> {
        rows.into_iter()
            .map(|row| row.into_article(self.offset))
            .collect()
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    subtitle: String,
    content: String,
    status: String,
    created_at: DateTime<Utc>,
    published_at: Option<DateTime<Utc>>,
    last_modified_at: Option<DateTime<Utc>>,
    author_id: i64,
}

fn corrupt(field: &str, err: DomainError) -> DomainError {
    DomainError::Persistence(format!("stored article has invalid {field}: {err}"))
}

impl ArticleRow {
    fn into_article(self, offset: FixedOffset) -> DomainResult<Article> {
        let article = Article {
            id: ArticleId::new(self.id).map_err(|err| corrupt("id", err))?,
            title: ArticleTitle::new(self.title).map_err(|err| corrupt("title", err))?,
            subtitle: ArticleSubtitle::new(self.subtitle).map_err(|err| corrupt("subtitle", err))?,
            content: ArticleContent::new(self.content).map_err(|err| corrupt("content", err))?,
            status: self
                .status
                .parse::<ArticleStatus>()
                .map_err(|err| corrupt("status", err))?,
            created_at: self.created_at.with_timezone(&offset),
            published_at: self.published_at.map(|at| at.with_timezone(&offset)),
            last_modified_at: self.last_modified_at.map(|at| at.with_timezone(&offset)),
            author_id: AccountId::new(self.author_id).map_err(|err| corrupt("author_id", err))?,
        };
        article.ensure_consistent()?;
        Ok(article)
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<ArticleId> {
        let NewArticle {
            title,
            subtitle,
            content,
            status,
            created_at,
            author_id,
        } = article;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO articles (title, subtitle, content, status, created_at, author_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id",
        )
        .bind(title.as_str())
        .bind(subtitle.as_str())
        .bind(content.as_str())
        .bind(status.as_str())
        .bind(created_at)
        .bind(i64::from(author_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ArticleId::new(id)
    }

    async fn update_content(
        &self,
        id: ArticleId,
        author_id: AccountId,
        update: ArticleContentUpdate,
    ) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE articles
             SET title = $1, subtitle = $2, content = $3, last_modified_at = $4
             WHERE id = $5 AND author_id = $6",
        )
        .bind(update.title.as_str())
        .bind(update.subtitle.as_str())
        .bind(update.content.as_str())
        .bind(update.last_modified_at)
        .bind(i64::from(id))
        .bind(i64::from(author_id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("article {id} for author {author_id}")));
        }
        Ok(())
    }

    async fn update_status(
        &self,
        id: ArticleId,
        author_id: AccountId,
        update: ArticleStatusUpdate,
    ) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE articles SET status = $1, published_at = $2
             WHERE id = $3 AND author_id = $4 AND status = $5",
        )
        .bind(update.status.as_str())
        .bind(update.published_at)
        .bind(i64::from(id))
        .bind(i64::from(author_id))
        .bind(update.from.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("article {id} for author {author_id}")));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(|row| row.into_article(self.offset)).transpose()
    }

    async fn list_all(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles ORDER BY id ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        self.decode_rows(rows)
    }

    async fn list_by_author(&self, author_id: AccountId) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE author_id = $1 ORDER BY id ASC"
        ))
        .bind(i64::from(author_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        self.decode_rows(rows)
    }
}
