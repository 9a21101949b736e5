// src/infrastructure/repositories/postgres_account.rs
use super::map_sqlx;
use crate::domain::account::{
    Account, AccountEmail, AccountId, AccountRepository, NewAccount, PasswordHash, PersonName,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresAccountRepository {
    pool: PgPool,
    offset: FixedOffset,
}

impl PostgresAccountRepository {
    pub fn new(pool: PgPool, offset: FixedOffset) -> Self {
        Self { pool, offset }
    }
}

#[derive(Debug, FromRow)]
struct AccountRow {
    id: i64,
    email: String,
    first_name: String,
    last_name: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl AccountRow {
    fn into_account(self, offset: FixedOffset) -> DomainResult<Account> {
        let invalid = |field: &str, err: DomainError| {
            DomainError::Persistence(format!("stored account has invalid {field}: {err}"))
        };
        Ok(Account {
            id: AccountId::new(self.id).map_err(|e| invalid("id", e))?,
            email: AccountEmail::new(self.email).map_err(|e| invalid("email", e))?,
            first_name: PersonName::new(self.first_name).map_err(|e| invalid("first_name", e))?,
            last_name: PersonName::new(self.last_name).map_err(|e| invalid("last_name", e))?,
            password_hash: PasswordHash::new(self.password_hash)
                .map_err(|e| invalid("password_hash", e))?,
            created_at: self.created_at.with_timezone(&offset),
        })
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn insert(&self, new_account: NewAccount) -> DomainResult<Account> {
        let row = sqlx::query_as::<_, AccountRow>(
            "INSERT INTO accounts (email, first_name, last_name, password_hash, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, email, first_name, last_name, password_hash, created_at",
        )
        .bind(new_account.email.as_str())
        .bind(new_account.first_name.as_str())
        .bind(new_account.last_name.as_str())
        .bind(new_account.password_hash.as_str())
        .bind(new_account.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.into_account(self.offset)
    }

    async fn find_by_email(&self, email: &AccountEmail) -> DomainResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            "SELECT id, email, first_name, last_name, password_hash, created_at
             FROM accounts WHERE email = $1",
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(|row| row.into_account(self.offset)).transpose()
    }
}
