//! # sl-core
//!
//! Core types shared by every Sortable Listview RS crate.
//!
//! - Error types for configuration failures
//! - Configuration types (sort allowlist, server settings) and loading
//! - Page-number pagination consumed downstream of the sorted listing

pub mod config;
pub mod error;
pub mod pagination;

pub use crate::config::*;
pub use crate::error::*;
pub use crate::pagination::*;
