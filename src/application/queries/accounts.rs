use crate::application::{dto::AccountDto, error::ApplicationResult, identity::AccountResolver};
use crate::domain::account::AccountEmail;

pub struct AccountQueryService {
    accounts: AccountResolver,
}

impl AccountQueryService {
    pub fn new(accounts: AccountResolver) -> Self {
        Self { accounts }
    }

    pub async fn profile(&self, email: &AccountEmail) -> ApplicationResult<AccountDto> {
        let account = self.accounts.resolve(email).await?;
        Ok(account.into())
    }
}
