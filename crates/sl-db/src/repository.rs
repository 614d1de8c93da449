//! Data-source trait
//!
//! "Given a field and a direction, return the collection in that order."

use async_trait::async_trait;
use sl_queries::SortSpec;

/// Error type for data-source operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Cannot order by unknown field: {0}")]
    UnknownField(String),

    #[error("Backend error: {0}")]
    Backend(String),
}

/// Result type for data-source operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// A collection that can be fetched in a requested order
#[async_trait]
pub trait ListSource<T>: Send + Sync {
    /// Fetch items ordered by `sort`, skipping `offset` and returning at
    /// most `limit` (all remaining when `None`)
    async fn fetch_ordered(
        &self,
        sort: &SortSpec,
        limit: Option<usize>,
        offset: usize,
    ) -> RepositoryResult<Vec<T>>;

    /// Count all items
    async fn count(&self) -> RepositoryResult<usize>;
}
