// src/domain/account/entity.rs
use crate::domain::account::value_objects::{AccountEmail, AccountId, PasswordHash, PersonName};
use chrono::{DateTime, FixedOffset};

#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub email: AccountEmail,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<FixedOffset>,
}

#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: AccountEmail,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<FixedOffset>,
}
