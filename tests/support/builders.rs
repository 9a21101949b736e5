// tests/support/builders.rs
use chrono::{DateTime, Duration, FixedOffset};
use scriptorium_core::domain::account::{
    Account, AccountEmail, AccountId, PasswordHash, PersonName,
};
use scriptorium_core::domain::article::*;

use super::mocks::fixed_now;

pub struct ArticleBuilder {
    id: i64,
    title: String,
    subtitle: String,
    content: String,
    status: ArticleStatus,
    created_at: DateTime<FixedOffset>,
    published_at: Option<DateTime<FixedOffset>>,
    author_id: i64,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: "Test Article".into(),
            subtitle: "A subtitle".into(),
            content: "Test content".into(),
            status: ArticleStatus::Draft,
            created_at: fixed_now() - Duration::days(2),
            published_at: None,
            author_id: 1,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn author(mut self, author_id: i64) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// 公開済み (published_at は作成の 1 日後)
    pub fn published(mut self) -> Self {
        self.status = ArticleStatus::Published;
        self.published_at = Some(self.created_at + Duration::days(1));
        self
    }

    /// アーカイブ済み (公開日時は保持)
    pub fn archived(mut self) -> Self {
        self = self.published();
        self.status = ArticleStatus::Archived;
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            subtitle: ArticleSubtitle::new(self.subtitle).unwrap(),
            content: ArticleContent::new(self.content).unwrap(),
            status: self.status,
            created_at: self.created_at,
            published_at: self.published_at,
            last_modified_at: None,
            author_id: AccountId::new(self.author_id).unwrap(),
        }
    }
}

impl Default for ArticleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct AccountBuilder {
    id: i64,
    email: String,
    first_name: String,
    last_name: String,
    password: String,
}

impl AccountBuilder {
    pub fn new(id: i64, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            first_name: "Test".into(),
            last_name: "Writer".into(),
            password: "correct horse".into(),
        }
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn build(self) -> Account {
        Account {
            id: AccountId::new(self.id).unwrap(),
            email: AccountEmail::new(self.email).unwrap(),
            first_name: PersonName::new(self.first_name).unwrap(),
            last_name: PersonName::new(self.last_name).unwrap(),
            // DummyPasswordHasher と同じ形式
            password_hash: PasswordHash::new(format!("hashed:{}", self.password)).unwrap(),
            created_at: fixed_now() - Duration::days(30),
        }
    }
}

/// アカウント 1 (writer) と 2 (other)
pub fn default_accounts() -> Vec<Account> {
    vec![
        AccountBuilder::new(1, "writer@example.com").build(),
        AccountBuilder::new(2, "other@example.com").build(),
    ]
}
