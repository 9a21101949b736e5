use std::sync::Arc;

use crate::application::ports::{
    security::{PasswordHasher, TokenManager},
    time::Clock,
};
use crate::domain::account::AccountRepository;

pub struct AccountCommandService {
    pub(super) account_repo: Arc<dyn AccountRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) clock: Arc<dyn Clock>,
}

impl AccountCommandService {
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            account_repo,
            password_hasher,
            token_manager,
            clock,
        }
    }
}
