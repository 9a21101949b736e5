// tests/support/mocks/account_repo.rs
use async_trait::async_trait;
use scriptorium_core::domain::{
    account::{Account, AccountEmail, AccountId, AccountRepository, NewAccount},
    errors::{DomainError, DomainResult},
};
use std::sync::Mutex;

/// メモリ上のアカウントリポジトリ
#[derive(Default)]
pub struct InMemoryAccountRepo {
    accounts: Mutex<Vec<Account>>,
}

impl InMemoryAccountRepo {
    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        Self {
            accounts: Mutex::new(accounts),
        }
    }

    pub fn len(&self) -> usize {
        self.accounts.lock().unwrap().len()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepo {
    async fn insert(&self, new_account: NewAccount) -> DomainResult<Account> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.iter().any(|a| a.email == new_account.email) {
            return Err(DomainError::Conflict("email already registered".into()));
        }

        let next_id = accounts.iter().map(|a| i64::from(a.id)).max().unwrap_or(0) + 1;
        let account = Account {
            id: AccountId::new(next_id)?,
            email: new_account.email,
            first_name: new_account.first_name,
            last_name: new_account.last_name,
            password_hash: new_account.password_hash,
            created_at: new_account.created_at,
        };
        accounts.push(account.clone());
        Ok(account)
    }

    async fn find_by_email(&self, email: &AccountEmail) -> DomainResult<Option<Account>> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| &a.email == email)
            .cloned())
    }
}
