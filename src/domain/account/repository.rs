// src/domain/account/repository.rs
use crate::domain::account::{
    entity::{Account, NewAccount},
    value_objects::AccountEmail,
};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Fails with `DomainError::Conflict` when the email is already registered.
    async fn insert(&self, new_account: NewAccount) -> DomainResult<Account>;

    async fn find_by_email(&self, email: &AccountEmail) -> DomainResult<Option<Account>>;
}
