use std::fmt;

use serde::{Deserialize, Serialize};

/// Message stored in `SearchResult::error` when a page yields no pods.
pub const NO_RESULTS_MESSAGE: &str = "No results found";

/// One titled result section of an answer page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pod {
    pub title: String,
    pub content: Vec<String>,
    pub images: Vec<ImageRef>,
    pub formulas: Vec<String>,
}

impl Pod {
    /// A pod is worth keeping when it has a title, some text or a formula.
    pub fn has_data(&self) -> bool {
        !self.title.is_empty() || !self.content.is_empty() || !self.formulas.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    Pending,
    Success,
    NoResults,
    Error,
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchStatus::Pending => write!(f, "pending"),
            SearchStatus::Success => write!(f, "success"),
            SearchStatus::NoResults => write!(f, "no_results"),
            SearchStatus::Error => write!(f, "error"),
        }
    }
}

/// Outcome of a single query. Field names match the persisted JSON layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub query: String,
    pub url: String,
    pub results: Vec<Pod>,
    pub status: SearchStatus,
    pub error: Option<String>,
}

impl SearchResult {
    pub fn pending(query: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            url: url.into(),
            results: Vec::new(),
            status: SearchStatus::Pending,
            error: None,
        }
    }

    /// Finish a fetched query: `success` with pods, otherwise `no_results`.
    pub fn with_pods(self, pods: Vec<Pod>) -> Self {
        if pods.is_empty() {
            Self {
                results: Vec::new(),
                status: SearchStatus::NoResults,
                error: Some(NO_RESULTS_MESSAGE.to_string()),
                ..self
            }
        } else {
            Self {
                results: pods,
                status: SearchStatus::Success,
                error: None,
                ..self
            }
        }
    }

    /// Finish a query whose fetch or decode step failed.
    pub fn failed(self, message: impl Into<String>) -> Self {
        Self {
            results: Vec::new(),
            status: SearchStatus::Error,
            error: Some(message.into()),
            ..self
        }
    }
}
