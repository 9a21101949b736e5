// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{identity::AccountResolver, ports::time::Clock},
    domain::article::{ArticleReadRepository, ArticleWriteRepository},
};

/// Mutating side of the article lifecycle: creation, content edits and
/// status transitions. Holds no state beyond its ports.
pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) accounts: AccountResolver,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        accounts: AccountResolver,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            accounts,
            clock,
        }
    }
}
