//! Sort resolution
//!
//! Turns one request's query parameters into the effective sort, the
//! canonical query-string fragment for it, and the header links. A resolver
//! is built once from validated configuration and shared; everything it
//! computes for a request is returned in a [`SortContext`].

use serde::Serialize;
use sl_core::config::{SortConfig, SortFieldConfig};
use sl_core::error::ConfigError;
use url::form_urlencoded;

use crate::links::{LinkDescriptor, SortIndicator};
use crate::params::QueryParams;
use crate::sorts::SortSpec;

/// Per-request sort state handed to the data and rendering layers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortContext {
    /// The effective sort
    pub sort: SortSpec,
    /// Sort fragment for the current URL; empty for the default sort
    pub current_sort_query: String,
    /// One link per allowed field, in allowlist order
    pub sort_link_list: Vec<LinkDescriptor>,
}

impl SortContext {
    /// Ordering directive for the data layer, e.g. `-created_at`
    pub fn ordering(&self) -> String {
        self.sort.directive()
    }
}

/// Resolves sort directives against a validated allowlist
#[derive(Debug, Clone)]
pub struct SortResolver {
    config: SortConfig,
    default_spec: SortSpec,
}

impl SortResolver {
    /// Validate the configuration and build a resolver.
    ///
    /// Fails when the allowlist is empty, has blank or duplicate names, or
    /// does not contain the default field.
    pub fn new(config: SortConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let default_field = config
            .find_field(&config.default_sort_field)
            .ok_or_else(|| ConfigError::UnknownDefaultField(config.default_sort_field.clone()))?;
        let default_spec = SortSpec::new(
            default_field.name.clone(),
            default_field.default_direction,
        );
        Ok(Self {
            config,
            default_spec,
        })
    }

    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// The sort used when the request asks for none, or for an unknown field
    pub fn default_spec(&self) -> &SortSpec {
        &self.default_spec
    }

    /// Allowed fields in declaration order
    pub fn fields(&self) -> &[SortFieldConfig] {
        &self.config.allowed_sort_fields
    }

    pub fn is_allowed(&self, field: &str) -> bool {
        self.config.find_field(field).is_some()
    }

    /// Resolve the sort for a request.
    ///
    /// Reads the sort parameter (last value wins), falling back to the
    /// default sort when it is missing or names a field outside the
    /// allowlist. Never fails.
    pub fn resolve(&self, params: &QueryParams) -> SortSpec {
        match params.get(&self.config.sort_parameter) {
            Some(raw) => self.resolve_directive(raw),
            None => self.default_spec.clone(),
        }
    }

    /// Parse and validate one directive string
    pub fn resolve_directive(&self, raw: &str) -> SortSpec {
        let spec = SortSpec::parse(raw);
        if self.is_allowed(&spec.field) {
            spec
        } else {
            tracing::debug!(
                requested = raw,
                fallback = %self.default_spec,
                "Unknown sort field, using default sort"
            );
            self.default_spec.clone()
        }
    }

    /// Query-string fragment for `spec`: empty for the default sort,
    /// otherwise `<sort_parameter>=<directive>`.
    pub fn canonical_query_string(&self, spec: &SortSpec) -> String {
        if *spec == self.default_spec {
            return String::new();
        }
        form_urlencoded::Serializer::new(String::new())
            .append_pair(&self.config.sort_parameter, &spec.directive())
            .finish()
    }

    /// The sort a click on `field`'s header selects.
    ///
    /// Clicking the active column flips its direction; clicking any other
    /// column sorts by it in that column's own default direction. An unknown
    /// field resolves to ascending.
    pub fn next_spec(&self, field: &str, current: &SortSpec) -> SortSpec {
        if field == current.field {
            return current.clone().reversed();
        }
        let direction = self
            .config
            .find_field(field)
            .map(|f| f.default_direction)
            .unwrap_or_default();
        SortSpec::new(field, direction)
    }

    /// Canonical query string of [`next_spec`](Self::next_spec)
    pub fn next_sort_query(&self, field: &str, current: &SortSpec) -> String {
        self.canonical_query_string(&self.next_spec(field, current))
    }

    pub fn indicator_for(&self, field: &str, current: &SortSpec) -> SortIndicator {
        SortIndicator::for_field(field, current)
    }

    /// Link target for selecting `next` from the page at `path`.
    ///
    /// By default every other parameter is dropped, which also sends the
    /// user back to the first page. With `sort_with_querystring` the other
    /// parameters are kept and only the sort parameter changes (and the page
    /// parameter is dropped under `sort_without_pagination`). The `?` is
    /// omitted whenever no parameters remain.
    pub fn link_url(&self, path: &str, params: &QueryParams, next: &SortSpec) -> String {
        let is_default = *next == self.default_spec;

        if !self.config.sort_with_querystring {
            let query = self.canonical_query_string(next);
            return join_query(path, &query);
        }

        let mut query_params = params.clone();
        if is_default {
            query_params.remove(&self.config.sort_parameter);
        } else {
            query_params.set(self.config.sort_parameter.as_str(), next.directive());
        }
        if self.config.sort_without_pagination {
            query_params.remove(&self.config.page_parameter);
        }
        join_query(path, &query_params.encode())
    }

    /// Build one link per allowed field, in allowlist order
    pub fn build_links(
        &self,
        path: &str,
        params: &QueryParams,
        current: &SortSpec,
    ) -> Vec<LinkDescriptor> {
        self.config
            .allowed_sort_fields
            .iter()
            .map(|field| {
                let next = self.next_spec(&field.name, current);
                LinkDescriptor {
                    field: field.name.clone(),
                    url: self.link_url(path, params, &next),
                    indicator: self.indicator_for(&field.name, current),
                    title: field.verbose_name.clone(),
                }
            })
            .collect()
    }

    /// Run the whole pipeline for one request
    pub fn context(&self, path: &str, params: &QueryParams) -> SortContext {
        let sort = self.resolve(params);
        let current_sort_query = self.canonical_query_string(&sort);
        let sort_link_list = self.build_links(path, params, &sort);
        SortContext {
            sort,
            current_sort_query,
            sort_link_list,
        }
    }
}

fn join_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}
