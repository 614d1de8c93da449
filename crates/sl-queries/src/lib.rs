//! # sl-queries
//!
//! Sort resolution for sortable list views.
//!
//! A request's query parameters are turned into a validated sort, an
//! ordering directive for the data layer, and one link per sortable column
//! for rendering clickable headers.
//!
//! ## Structure
//!
//! - `sorts` - Sort specs and the directive string format (`-name`)
//! - `params` - Ordered, multi-valued query parameters
//! - `links` - Column link descriptors and active-sort indicators
//! - `resolver` - The resolver tying configuration and request together
//!
//! ## Example
//!
//! ```
//! use sl_core::config::{SortConfig, SortDirection};
//! use sl_queries::{QueryParams, SortResolver};
//!
//! let config = SortConfig::new("id")
//!     .field("id", SortDirection::Desc, "ID")
//!     .field("name", SortDirection::Asc, "Name");
//! let resolver = SortResolver::new(config).unwrap();
//!
//! let context = resolver.context("/projects", &QueryParams::parse("sort=name"));
//! assert_eq!(context.ordering(), "name");
//! assert_eq!(context.current_sort_query, "sort=name");
//! assert_eq!(context.sort_link_list[1].url, "/projects?sort=-name");
//! ```

pub mod links;
pub mod params;
pub mod resolver;
pub mod sorts;

// Re-exports for convenience
pub use links::{LinkDescriptor, SortIndicator};
pub use params::QueryParams;
pub use resolver::{SortContext, SortResolver};
pub use sl_core::config::SortDirection;
pub use sorts::SortSpec;
