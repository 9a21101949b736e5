use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct GetArticleByIdQuery {
    pub id: i64,
}

impl ArticleQueryService {
    /// Any status is returned and no ownership is checked.
    // TODO: decide whether drafts and archived articles should stay readable by id
    // for callers other than the author.
    pub async fn get_article(&self, query: GetArticleByIdQuery) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(query.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await
            .map_err(ApplicationError::from_store)?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        Ok(article.into())
    }
}
