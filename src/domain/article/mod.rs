pub mod entity;
pub mod lifecycle;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleContentUpdate, ArticleStatusUpdate, NewArticle};
pub use lifecycle::StatusTransitionError;
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{ArticleContent, ArticleId, ArticleStatus, ArticleSubtitle, ArticleTitle};
