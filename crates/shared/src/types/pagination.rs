//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-indexed).
    #[serde(default = "default_page")]
    pub page: u32,
    /// Number of items per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    100
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

impl PageRequest {
    /// Returns the query pairs understood by the backend.
    #[must_use]
    pub fn query(&self) -> [(&'static str, String); 2] {
        [
            ("page", self.page.to_string()),
            ("page_size", self.page_size.to_string()),
        ]
    }
}

/// Paginated envelope returned by the dashboard backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total number of items across all pages.
    pub count: u64,
    /// URL of the next page, if any.
    pub next: Option<String>,
    /// URL of the previous page, if any.
    pub previous: Option<String>,
    /// The items in the current page.
    pub results: Vec<T>,
}

/// A list endpoint body: either a bare array or a paginated envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    /// Paginated envelope.
    Paginated(Page<T>),
    /// Bare JSON array.
    Plain(Vec<T>),
}

impl<T> ListResponse<T> {
    /// Returns the items regardless of the envelope shape.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Paginated(page) => page.results,
            Self::Plain(items) => items,
        }
    }

    /// Splits the body into its items and the URL of the next page.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, Option<String>) {
        match self {
            Self::Paginated(page) => (page.results, page.next),
            Self::Plain(items) => (items, None),
        }
    }

    /// Returns true if the backend reported further pages.
    #[must_use]
    pub fn has_more(&self) -> bool {
        matches!(self, Self::Paginated(page) if page.next.is_some())
    }
}
