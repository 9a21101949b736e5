// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{accounts::AccountCommandService, articles::ArticleCommandService},
        dto::AuthenticatedAccount,
        identity::AccountResolver,
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
        },
        queries::{accounts::AccountQueryService, articles::ArticleQueryService},
        ApplicationResult,
    },
    domain::{
        account::AccountRepository,
        article::{ArticleReadRepository, ArticleWriteRepository},
    },
};

pub struct ApplicationServices {
    pub account_commands: Arc<AccountCommandService>,
    pub account_queries: Arc<AccountQueryService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let resolver = AccountResolver::new(Arc::clone(&account_repo));

        let account_commands = Arc::new(AccountCommandService::new(
            Arc::clone(&account_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
            Arc::clone(&clock),
        ));
        let account_queries = Arc::new(AccountQueryService::new(resolver.clone()));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            resolver.clone(),
            Arc::clone(&clock),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            resolver,
        ));

        Self {
            account_commands,
            account_queries,
            article_commands,
            article_queries,
            token_manager,
        }
    }

    /// Verifies a raw bearer token. Presentation code calls this before any
    /// operation that needs the caller's email.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedAccount> {
        self.token_manager.authenticate(token).await
    }
}
