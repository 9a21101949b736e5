// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod account_repo;
pub mod article_repos;
pub mod security;
pub mod time;

// 時刻関連
pub use time::{FixedClock, fixed_now};

// セキュリティ関連
pub use security::{
    DummyPasswordHasher, DummyTokenManager, EXPIRED_TOKEN, GHOST_TOKEN, OTHER_TOKEN, TEST_TOKEN,
    token_for,
};

// アカウントリポジトリ
pub use account_repo::InMemoryAccountRepo;

// 記事リポジトリ
pub use article_repos::{FailingArticleRepo, InMemoryArticleRepo, SlowArticleRepo};
