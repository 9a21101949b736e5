// src/application/commands/articles/mod.rs
mod create;
mod edit;
mod service;
mod status;

pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use edit::EditArticleCommand;
pub use service::ArticleCommandService;
pub use status::ChangeArticleStatusCommand;
