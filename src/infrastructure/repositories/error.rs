use crate::domain::errors::DomainError;

const CNT_ACCOUNT_EMAIL: &str = "accounts_email_key";
const CNT_ARTICLE_AUTHOR: &str = "articles_author_id_fkey";
const CNT_ARTICLE_STATUS: &str = "articles_status_chk";
const CNT_ARTICLE_PUBLISHED_CHECK: &str = "articles_published_requires_timestamp_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ACCOUNT_EMAIL => DomainError::Conflict("email already registered".into()),
                    CNT_ARTICLE_AUTHOR => DomainError::NotFound("author not found".into()),
                    CNT_ARTICLE_STATUS => {
                        DomainError::Validation("unknown article status".into())
                    }
                    CNT_ARTICLE_PUBLISHED_CHECK => DomainError::Validation(
                        "article status and published_at disagree".into(),
                    ),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::PoolTimedOut => {
            DomainError::Persistence("timed out waiting for a database connection".into())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
