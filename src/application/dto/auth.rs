use crate::domain::account::{AccountEmail, AccountId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthTokenDto {
    pub token: String,
    #[schema(value_type = String, format = DateTime)]
    pub issued_at: DateTime<Utc>,
    #[schema(value_type = String, format = DateTime)]
    pub expires_at: DateTime<Utc>,
    pub expires_in: i64,
}

/// Claims recovered from a verified bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedAccount {
    pub id: AccountId,
    pub email: AccountEmail,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct TokenSubject {
    pub account_id: AccountId,
    pub email: AccountEmail,
}
