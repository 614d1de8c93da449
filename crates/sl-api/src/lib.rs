//! # sl-api
//!
//! Axum integration for sortable list views.
//!
//! [`SortableListView`] combines a [`sl_queries::SortResolver`] with a
//! [`sl_db::ListSource`]: it resolves the sort from the request, fetches
//! the ordered (and optionally paginated) items, and returns a
//! [`ListContext`] holding `current_sort_query` and `sort_link_list` for
//! rendering sortable column headers.

pub mod error;
pub mod extractors;
pub mod view;

pub use error::{ApiError, ApiResult};
pub use extractors::SortRequest;
pub use view::{list_objects, ListContext, SortableListView};
