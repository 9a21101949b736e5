// src/application/identity.rs
use std::sync::Arc;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::account::{Account, AccountEmail, AccountRepository},
};

/// Resolves the email claim of the current request to a stored account.
///
/// A claim with no matching account is reported as invalid input; any other
/// lookup failure is an infrastructure error.
#[derive(Clone)]
pub struct AccountResolver {
    account_repo: Arc<dyn AccountRepository>,
}

impl AccountResolver {
    pub fn new(account_repo: Arc<dyn AccountRepository>) -> Self {
        Self { account_repo }
    }

    pub async fn resolve(&self, email: &AccountEmail) -> ApplicationResult<Account> {
        match self.account_repo.find_by_email(email).await {
            Ok(Some(account)) => Ok(account),
            Ok(None) => {
                tracing::debug!(%email, "no account for authenticated email");
                Err(ApplicationError::validation("account not found"))
            }
            Err(err) => {
                tracing::error!(error = %err, %email, "account lookup failed");
                Err(ApplicationError::infrastructure(err.to_string()))
            }
        }
    }
}
