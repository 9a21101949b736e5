// tests/support/mocks/article_repos.rs
use async_trait::async_trait;
use scriptorium_core::domain::{
    account::AccountId,
    article::{
        Article, ArticleContentUpdate, ArticleId, ArticleReadRepository, ArticleStatusUpdate,
        ArticleWriteRepository, NewArticle,
    },
    errors::{DomainError, DomainResult},
};
use std::{sync::Mutex, time::Duration};

/* -------------------------------- InMemoryArticleRepo -------------------------------- */

/// `(id, author_id)` スコープの更新を再現するメモリ上の記事リポジトリ
#[derive(Default)]
pub struct InMemoryArticleRepo {
    articles: Mutex<Vec<Article>>,
}

impl InMemoryArticleRepo {
    pub fn with_articles(articles: Vec<Article>) -> Self {
        Self {
            articles: Mutex::new(articles),
        }
    }

    pub fn get(&self, id: i64) -> Option<Article> {
        self.articles
            .lock()
            .unwrap()
            .iter()
            .find(|a| i64::from(a.id) == id)
            .cloned()
    }

    pub fn snapshot(&self) -> Vec<Article> {
        let mut articles = self.articles.lock().unwrap().clone();
        articles.sort_by_key(|a| i64::from(a.id));
        articles
    }

    fn scoped_update<G, F>(
        &self,
        id: ArticleId,
        author_id: AccountId,
        guard: G,
        apply: F,
    ) -> DomainResult<()>
    where
        G: Fn(&Article) -> bool,
        F: FnOnce(&mut Article),
    {
        let mut articles = self.articles.lock().unwrap();
        match articles
            .iter_mut()
            .find(|a| a.id == id && a.author_id == author_id && guard(a))
        {
            Some(article) => {
                apply(article);
                Ok(())
            }
            None => Err(DomainError::NotFound(format!(
                "article {id} for author {author_id}"
            ))),
        }
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<ArticleId> {
        let mut articles = self.articles.lock().unwrap();
        let next_id = articles.iter().map(|a| i64::from(a.id)).max().unwrap_or(0) + 1;
        let id = ArticleId::new(next_id)?;
        articles.push(Article::from_new(id, article));
        Ok(id)
    }

    async fn update_content(
        &self,
        id: ArticleId,
        author_id: AccountId,
        update: ArticleContentUpdate,
    ) -> DomainResult<()> {
        self.scoped_update(id, author_id, |_| true, |article| {
            article.apply_content(&update)
        })
    }

    async fn update_status(
        &self,
        id: ArticleId,
        author_id: AccountId,
        update: ArticleStatusUpdate,
    ) -> DomainResult<()> {
        self.scoped_update(
            id,
            author_id,
            |article| article.status == update.from,
            |article| article.apply_status(&update),
        )
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.get(i64::from(id)))
    }

    async fn list_all(&self) -> DomainResult<Vec<Article>> {
        Ok(self.snapshot())
    }

    async fn list_by_author(&self, author_id: AccountId) -> DomainResult<Vec<Article>> {
        Ok(self
            .snapshot()
            .into_iter()
            .filter(|a| a.author_id == author_id)
            .collect())
    }
}

/* -------------------------------- FailingArticleRepo -------------------------------- */

/// すべての操作が永続化エラーになるリポジトリ
pub struct FailingArticleRepo;

fn unavailable<T>() -> DomainResult<T> {
    Err(DomainError::Persistence("connection refused".into()))
}

#[async_trait]
impl ArticleWriteRepository for FailingArticleRepo {
    async fn insert(&self, _article: NewArticle) -> DomainResult<ArticleId> {
        unavailable()
    }

    async fn update_content(
        &self,
        _id: ArticleId,
        _author_id: AccountId,
        _update: ArticleContentUpdate,
    ) -> DomainResult<()> {
        unavailable()
    }

    async fn update_status(
        &self,
        _id: ArticleId,
        _author_id: AccountId,
        _update: ArticleStatusUpdate,
    ) -> DomainResult<()> {
        unavailable()
    }
}

#[async_trait]
impl ArticleReadRepository for FailingArticleRepo {
    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        unavailable()
    }

    async fn list_all(&self) -> DomainResult<Vec<Article>> {
        unavailable()
    }

    async fn list_by_author(&self, _author_id: AccountId) -> DomainResult<Vec<Article>> {
        unavailable()
    }
}

/* -------------------------------- SlowArticleRepo -------------------------------- */

/// 読み取りが指定時間ブロックするリポジトリ (キャンセル検証用)
pub struct SlowArticleRepo {
    pub delay: Duration,
}

#[async_trait]
impl ArticleReadRepository for SlowArticleRepo {
    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        tokio::time::sleep(self.delay).await;
        Ok(None)
    }

    async fn list_all(&self) -> DomainResult<Vec<Article>> {
        tokio::time::sleep(self.delay).await;
        Ok(Vec::new())
    }

    async fn list_by_author(&self, _author_id: AccountId) -> DomainResult<Vec<Article>> {
        tokio::time::sleep(self.delay).await;
        Ok(Vec::new())
    }
}
