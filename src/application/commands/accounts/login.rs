use super::AccountCommandService;
use crate::{
    application::{
        dto::{AuthenticationDto, TokenSubject},
        error::{ApplicationError, ApplicationResult},
    },
    domain::account::{Account, AccountEmail},
};

pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

impl AccountCommandService {
    pub async fn login(&self, command: LoginCommand) -> ApplicationResult<AuthenticationDto> {
        // A malformed email cannot belong to anyone; answer like a wrong password.
        let email = AccountEmail::new(command.email)
            .map_err(|_| ApplicationError::unauthorized("invalid credentials"))?;
        let account = self.find_and_authenticate(&email, &command.password).await?;

        let subject = TokenSubject {
            account_id: account.id,
            email: account.email.clone(),
        };
        let token = self.token_manager.issue(subject).await?;

        Ok(AuthenticationDto {
            token,
            profile: account.into(),
        })
    }

    async fn find_and_authenticate(
        &self,
        email: &AccountEmail,
        password: &str,
    ) -> ApplicationResult<Account> {
        let account = self
            .account_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid credentials"))?;

        self.password_hasher
            .verify(password, account.password_hash.as_str())
            .await?;

        Ok(account)
    }
}
