// src/domain/article/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

macro_rules! required_text {
    ($name:ident, $label:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> DomainResult<Self> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(DomainError::Validation(
                        concat!($label, " cannot be empty").into(),
                    ));
                }
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

required_text!(ArticleTitle, "title");
required_text!(ArticleSubtitle, "subtitle");
required_text!(ArticleContent, "content");

/// Publication state of an article. Moves forward only:
/// `DRAFT -> PUBLISHED -> ARCHIVED`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ArticleStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl ArticleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Draft => "DRAFT",
            ArticleStatus::Published => "PUBLISHED",
            ArticleStatus::Archived => "ARCHIVED",
        }
    }

    /// Only these targets may be requested through a status change.
    pub fn is_requestable(&self) -> bool {
        matches!(self, ArticleStatus::Published | ArticleStatus::Archived)
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRAFT" => Ok(ArticleStatus::Draft),
            "PUBLISHED" => Ok(ArticleStatus::Published),
            "ARCHIVED" => Ok(ArticleStatus::Archived),
            other => Err(DomainError::Validation(format!(
                "unknown article status '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_articles_default_to_draft() {
        assert_eq!(ArticleStatus::default(), ArticleStatus::Draft);
    }

    #[test]
    fn status_round_trips_through_wire_names() {
        for status in [
            ArticleStatus::Draft,
            ArticleStatus::Published,
            ArticleStatus::Archived,
        ] {
            assert_eq!(status.as_str().parse::<ArticleStatus>().unwrap(), status);
        }
    }

    #[test]
    fn status_parsing_is_case_sensitive() {
        assert!("published".parse::<ArticleStatus>().is_err());
        assert!("".parse::<ArticleStatus>().is_err());
    }

    #[test]
    fn only_published_and_archived_are_requestable() {
        assert!(!ArticleStatus::Draft.is_requestable());
        assert!(ArticleStatus::Published.is_requestable());
        assert!(ArticleStatus::Archived.is_requestable());
    }

    #[test]
    fn status_serializes_upper_case() {
        let json = serde_json::to_string(&ArticleStatus::Published).unwrap();
        assert_eq!(json, "\"PUBLISHED\"");
    }

    #[test]
    fn blank_text_fields_are_rejected() {
        assert!(ArticleTitle::new("  ").is_err());
        assert!(ArticleSubtitle::new("").is_err());
        assert!(ArticleContent::new("\n").is_err());
        assert_eq!(ArticleTitle::new("t").unwrap().as_str(), "t");
    }
}
