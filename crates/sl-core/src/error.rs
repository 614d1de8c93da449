//! Core error types for Sortable Listview RS
//!
//! Invalid sort input from a request is never an error; it degrades to the
//! configured default. The errors here cover programmer mistakes in the
//! static configuration and requests for pages that do not exist.

use thiserror::Error;

/// Configuration error, raised once at startup rather than per request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Allowed sort fields must not be empty")]
    NoSortFields,

    #[error("Sort field names must not be empty")]
    EmptyFieldName,

    #[error("Sort field {0} is declared more than once")]
    DuplicateField(String),

    #[error("Default sort field {0} is not an allowed sort field")]
    UnknownDefaultField(String),

    #[error("Sort parameter name must not be empty")]
    EmptySortParameter,

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("Config file error: {0}")]
    FileError(String),
}

impl From<::config::ConfigError> for ConfigError {
    fn from(err: ::config::ConfigError) -> Self {
        ConfigError::FileError(err.to_string())
    }
}

/// Pagination error (mirrors the framework's InvalidPage / EmptyPage)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("Page {0} is not a valid page number")]
    NotANumber(String),

    #[error("Page {page} contains no results (last page is {last})")]
    Empty { page: usize, last: usize },
}

impl PageError {
    pub fn status_code(&self) -> u16 {
        404
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            PageError::NotANumber(_) => "invalid_page",
            PageError::Empty { .. } => "empty_page",
        }
    }
}
