// src/domain/article/lifecycle.rs
//! Status transition table for articles.
//!
//! | from      | to        | outcome                       |
//! |-----------|-----------|-------------------------------|
//! | DRAFT     | PUBLISHED | allowed, `published_at = now` |
//! | PUBLISHED | ARCHIVED  | allowed, `published_at` kept  |
//! | DRAFT     | ARCHIVED  | rejected                      |
//! | PUBLISHED | PUBLISHED | rejected                      |
//! | ARCHIVED  | *         | rejected                      |
//!
//! Requesting `DRAFT` is never valid input.
use crate::domain::article::{
    entity::{Article, ArticleStatusUpdate},
    value_objects::ArticleStatus,
};
use chrono::{DateTime, FixedOffset};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatusTransitionError {
    #[error("status {0} cannot be requested")]
    UnsupportedTarget(ArticleStatus),
    #[error("archived articles cannot change status")]
    Archived,
    #[error("article is already published")]
    AlreadyPublished,
    #[error("only published articles can be archived")]
    NotPublished,
}

impl StatusTransitionError {
    /// Invalid input rather than a refusal to act on a valid request.
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, StatusTransitionError::UnsupportedTarget(_))
    }
}

/// Validates a requested target before any article is loaded.
pub fn ensure_requestable(requested: ArticleStatus) -> Result<(), StatusTransitionError> {
    if requested.is_requestable() {
        Ok(())
    } else {
        Err(StatusTransitionError::UnsupportedTarget(requested))
    }
}

impl ArticleStatus {
    /// Target status reached from `self` when `requested` is asked for.
    pub fn transition_to(
        self,
        requested: ArticleStatus,
    ) -> Result<ArticleStatus, StatusTransitionError> {
        ensure_requestable(requested)?;

        match (self, requested) {
            (ArticleStatus::Archived, _) => Err(StatusTransitionError::Archived),
            (ArticleStatus::Draft, ArticleStatus::Published) => Ok(ArticleStatus::Published),
            (ArticleStatus::Published, ArticleStatus::Published) => {
                Err(StatusTransitionError::AlreadyPublished)
            }
            (ArticleStatus::Published, ArticleStatus::Archived) => Ok(ArticleStatus::Archived),
            (ArticleStatus::Draft, ArticleStatus::Archived) => Err(StatusTransitionError::NotPublished),
            (_, ArticleStatus::Draft) => Err(StatusTransitionError::UnsupportedTarget(requested)),
        }
    }
}

/// Computes the patch moving `current` to `requested`.
pub fn plan_transition(
    current: ArticleStatus,
    current_published_at: Option<DateTime<FixedOffset>>,
    requested: ArticleStatus,
    now: DateTime<FixedOffset>,
) -> Result<ArticleStatusUpdate, StatusTransitionError> {
    let status = current.transition_to(requested)?;
    let published_at = match status {
        ArticleStatus::Published => Some(now),
        _ => current_published_at,
    };
    Ok(ArticleStatusUpdate {
        from: current,
        status,
        published_at,
    })
}

impl Article {
    pub fn plan_status_change(
        &self,
        requested: ArticleStatus,
        now: DateTime<FixedOffset>,
    ) -> Result<ArticleStatusUpdate, StatusTransitionError> {
        plan_transition(self.status, self.published_at, requested, now)
    }
}
