// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use scriptorium_core::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedAccount, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use scriptorium_core::domain::account::{AccountEmail, AccountId};

/// アカウント 1 (writer@example.com) のトークン
pub const TEST_TOKEN: &str = "token:1:writer@example.com";
/// アカウント 2 (other@example.com) のトークン
pub const OTHER_TOKEN: &str = "token:2:other@example.com";
/// 署名は正しいがアカウントが存在しないトークン
pub const GHOST_TOKEN: &str = "token:99:ghost@example.com";
/// 期限切れトークン
pub const EXPIRED_TOKEN: &str = "expired-token";

pub fn token_for(account_id: i64, email: &str) -> String {
    format!("token:{account_id}:{email}")
}

/// `hashed:<password>` 形式で保存する決定論的ハッシャー
pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("hashed:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

/// `token:<id>:<email>` 形式のトークンを発行・検証するダミー
pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = chrono::Utc::now();
        Ok(AuthTokenDto {
            token: token_for(i64::from(subject.account_id), subject.email.as_str()),
            issued_at: now,
            expires_at: now + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedAccount> {
        let invalid = || ApplicationError::unauthorized("invalid token");

        let mut parts = token.splitn(3, ':');
        if parts.next() != Some("token") {
            return Err(invalid());
        }
        let id = parts
            .next()
            .and_then(|raw| raw.parse::<i64>().ok())
            .ok_or_else(invalid)?;
        let email = parts.next().ok_or_else(invalid)?;

        let now = chrono::Utc::now();
        Ok(AuthenticatedAccount {
            id: AccountId::new(id).map_err(|_| invalid())?,
            email: AccountEmail::new(email).map_err(|_| invalid())?,
            issued_at: now,
            expires_at: now + Duration::hours(1),
        })
    }
}
