use super::{AccountCommandService, password::validate_password};
use crate::{
    application::{
        dto::AccountDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        account::{AccountEmail, NewAccount, PasswordHash, PersonName},
        errors::DomainError,
    },
};

pub struct RegisterAccountCommand {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl AccountCommandService {
    pub async fn register(&self, command: RegisterAccountCommand) -> ApplicationResult<AccountDto> {
        let email = AccountEmail::new(command.email)?;
        let first_name = PersonName::new(command.first_name)?;
        let last_name = PersonName::new(command.last_name)?;
        validate_password(&command.password)?;

        if self.account_repo.find_by_email(&email).await?.is_some() {
            return Err(ApplicationError::conflict("email already registered"));
        }

        let hashed = self.password_hasher.hash(&command.password).await?;
        let new_account = NewAccount {
            email,
            first_name,
            last_name,
            password_hash: PasswordHash::new(hashed)?,
            created_at: self.clock.now(),
        };

        // The unique constraint still decides when two registrations race.
        let account = self
            .account_repo
            .insert(new_account)
            .await
            .map_err(|err| match err {
                DomainError::Conflict(_) => ApplicationError::conflict("email already registered"),
                other => ApplicationError::from(other),
            })?;

        tracing::info!(account_id = %account.id, "account registered");
        Ok(account.into())
    }
}
