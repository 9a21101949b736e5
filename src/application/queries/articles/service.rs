use std::sync::Arc;

use crate::{application::identity::AccountResolver, domain::article::ArticleReadRepository};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) accounts: AccountResolver,
}

impl ArticleQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>, accounts: AccountResolver) -> Self {
        Self {
            read_repo,
            accounts,
        }
    }
}
