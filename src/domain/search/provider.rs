// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::budget::Locale;
use crate::domain::models::search_result::SearchResultItem;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SearchError {
    #[error("Search API error: status {0}")]
    HttpStatus(u16),
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Timeout")]
    Timeout,
}

#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Fetch a single page of organic results at the given offset.
    ///
    /// An empty vec means the API has no further results for this query
    /// (exhaustion), not an error.
    async fn search_page(
        &self,
        query: &str,
        locale: &Locale,
        start: usize,
        page_size: usize,
    ) -> Result<Vec<SearchResultItem>, SearchError>;

    /// Get the name of the search provider
    fn name(&self) -> &'static str;
}
