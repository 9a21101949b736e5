pub mod accounts;
pub mod articles;
pub mod auth;

pub use accounts::{AccountDto, AuthenticationDto};
pub use articles::{ArticleDto, ArticleStatusDto, ArticleSummaryDto, EditedArticleDto};
pub use auth::{AuthTokenDto, AuthenticatedAccount, TokenSubject};
