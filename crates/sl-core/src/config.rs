//! Configuration types and loading
//!
//! The sort options keep the names a list view is configured with:
//! `sort_parameter`, `default_sort_field`, `allowed_sort_fields`,
//! `sort_with_querystring` and `sort_without_pagination`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ConfigError;

/// Environment variable naming an optional configuration file
pub const CONFIG_FILE_ENV: &str = "SORTABLE_CONFIG";

/// Prefix for configuration overrides from the environment (`SORTABLE__SERVER__PORT`)
pub const ENV_PREFIX: &str = "SORTABLE";

/// Sort direction
///
/// A closed two-value type: there is no third state a toggle could land in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum SortDirection {
    /// Ascending order (A-Z, 1-9, oldest first)
    #[default]
    Asc,
    /// Descending order (Z-A, 9-1, newest first)
    Desc,
}

impl SortDirection {
    /// Parse from a configuration value.
    ///
    /// Accepts `asc`/`desc`, the long forms, and the directive prefixes
    /// `""` and `"-"`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" | "" => Some(Self::Asc),
            "desc" | "descending" | "-" => Some(Self::Desc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// The prefix this direction contributes to a directive string
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Asc => "",
            Self::Desc => "-",
        }
    }

    /// Get the opposite direction
    pub fn reverse(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl TryFrom<String> for SortDirection {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| ConfigError::InvalidValue {
            key: "default_direction".into(),
            message: format!("{:?} is not one of asc, desc, \"\", \"-\"", value),
        })
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the sort allowlist
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SortFieldConfig {
    /// Field name as it appears in the sort parameter and the ordering
    pub name: String,
    /// Direction used the first time a user clicks this column
    #[serde(default)]
    pub default_direction: SortDirection,
    /// Column header title
    pub verbose_name: String,
}

impl SortFieldConfig {
    pub fn new(
        name: impl Into<String>,
        default_direction: SortDirection,
        verbose_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            default_direction,
            verbose_name: verbose_name.into(),
        }
    }
}

/// Sorting configuration for one list view
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct SortConfig {
    /// Query parameter carrying the sort directive, e.g. `?page=1&sort=-id`
    pub sort_parameter: String,
    pub default_sort_field: String,
    /// Allowlist, in column order
    pub allowed_sort_fields: Vec<SortFieldConfig>,
    /// Keep the other query parameters when building sort links
    pub sort_with_querystring: bool,
    /// Drop the page parameter when building sort links (merge mode only)
    pub sort_without_pagination: bool,
    /// Name of the pagination parameter dropped by `sort_without_pagination`
    pub page_parameter: String,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            sort_parameter: "sort".to_string(),
            default_sort_field: "id".to_string(),
            allowed_sort_fields: vec![SortFieldConfig::new("id", SortDirection::Desc, "ID")],
            sort_with_querystring: false,
            sort_without_pagination: false,
            page_parameter: "page".to_string(),
        }
    }
}

impl SortConfig {
    /// Start an empty allowlist with the given default field
    pub fn new(default_sort_field: impl Into<String>) -> Self {
        Self {
            default_sort_field: default_sort_field.into(),
            allowed_sort_fields: vec![],
            ..Default::default()
        }
    }

    /// Append an allowed field (builder pattern)
    pub fn field(
        mut self,
        name: impl Into<String>,
        default_direction: SortDirection,
        verbose_name: impl Into<String>,
    ) -> Self {
        self.allowed_sort_fields
            .push(SortFieldConfig::new(name, default_direction, verbose_name));
        self
    }

    pub fn sort_parameter(mut self, name: impl Into<String>) -> Self {
        self.sort_parameter = name.into();
        self
    }

    pub fn with_querystring(mut self, enabled: bool) -> Self {
        self.sort_with_querystring = enabled;
        self
    }

    pub fn without_pagination(mut self, enabled: bool) -> Self {
        self.sort_without_pagination = enabled;
        self
    }

    /// Look up an allowed field by name
    pub fn find_field(&self, name: &str) -> Option<&SortFieldConfig> {
        self.allowed_sort_fields.iter().find(|f| f.name == name)
    }

    /// Check the static invariants: a non-empty allowlist of unique,
    /// non-empty names that contains the default field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sort_parameter.is_empty() {
            return Err(ConfigError::EmptySortParameter);
        }
        if self.allowed_sort_fields.is_empty() {
            return Err(ConfigError::NoSortFields);
        }
        for (i, field) in self.allowed_sort_fields.iter().enumerate() {
            if field.name.is_empty() {
                return Err(ConfigError::EmptyFieldName);
            }
            if self.allowed_sort_fields[..i].iter().any(|f| f.name == field.name) {
                return Err(ConfigError::DuplicateField(field.name.clone()));
            }
        }
        if self.find_field(&self.default_sort_field).is_none() {
            return Err(ConfigError::UnknownDefaultField(
                self.default_sort_field.clone(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,

    /// Sorting for the served listing
    pub sort: SortConfig,

    /// Page size; `None` disables pagination
    pub paginate_by: Option<usize>,
}

impl AppConfig {
    /// Load from the file named by `SORTABLE_CONFIG` (if set), overridden by
    /// `SORTABLE__*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_FILE_ENV).ok();
        let mut builder = ::config::Config::builder();
        if let Some(path) = path.as_deref() {
            tracing::debug!(path, "Loading configuration file");
            builder = builder.add_source(::config::File::with_name(path));
        }
        let settings = builder
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        Self::finish(settings.try_deserialize()?)
    }

    /// Parse a TOML document
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::from_str(contents, ::config::FileFormat::Toml))
            .build()?;
        Self::finish(settings.try_deserialize()?)
    }

    fn finish(config: AppConfig) -> Result<Self, ConfigError> {
        if config.paginate_by == Some(0) {
            return Err(ConfigError::InvalidValue {
                key: "paginate_by".into(),
                message: "must be at least 1".into(),
            });
        }
        config.sort.validate()?;
        Ok(config)
    }

    /// Socket address string for the listener
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
