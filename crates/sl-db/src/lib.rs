//! # sl-db
//!
//! Data sources for sortable list views.
//!
//! The list view never runs queries itself; it hands a resolved sort to a
//! [`ListSource`], which returns one window of the collection in that order.
//! Any backend can implement the trait. This crate ships an in-memory
//! implementation and the `ORDER BY` rendering SQL backends need.

pub mod memory;
pub mod order_clause;
pub mod repository;

pub use memory::{InMemorySource, SortKey, SortValue};
pub use order_clause::ColumnMap;
pub use repository::{ListSource, RepositoryError, RepositoryResult};
