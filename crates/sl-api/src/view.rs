//! Sortable list view
//!
//! Per request: resolve the sort, order the data source by it, optionally
//! paginate, and expose the sort state for rendering.

use axum::{extract::State, Json};
use serde::Serialize;
use sl_core::config::SortConfig;
use sl_core::error::ConfigError;
use sl_core::pagination::{Page, Paginator};
use sl_db::ListSource;
use sl_queries::{LinkDescriptor, SortResolver, SortSpec};
use std::sync::Arc;

use crate::error::ApiResult;
use crate::extractors::SortRequest;

/// Everything a list template or API client needs for one request
#[derive(Debug, Clone, Serialize)]
pub struct ListContext<T> {
    pub object_list: Vec<T>,
    /// Directive the data source was ordered by, e.g. `-created_at`
    pub ordering: String,
    pub current_sort_query: String,
    pub sort_link_list: Vec<LinkDescriptor>,
    pub is_paginated: bool,
    pub page: Page,
}

/// A list view whose column headers re-sort the list
pub struct SortableListView<T> {
    resolver: SortResolver,
    source: Arc<dyn ListSource<T>>,
    paginate_by: Option<usize>,
}

impl<T> SortableListView<T> {
    pub fn new(resolver: SortResolver, source: Arc<dyn ListSource<T>>) -> Self {
        Self {
            resolver,
            source,
            paginate_by: None,
        }
    }

    /// Validate `config` and build a view over `source`
    pub fn from_config(config: SortConfig, source: Arc<dyn ListSource<T>>) -> Result<Self, ConfigError> {
        Ok(Self::new(SortResolver::new(config)?, source))
    }

    /// Paginate with `per_page` items per page (at least 1)
    pub fn paginate_by(mut self, per_page: usize) -> Self {
        self.paginate_by = Some(per_page.max(1));
        self
    }

    pub fn resolver(&self) -> &SortResolver {
        &self.resolver
    }

    /// Handle one request
    pub async fn get(&self, request: &SortRequest) -> ApiResult<ListContext<T>> {
        let sort = self.resolver.context(&request.path, &request.params);

        let (object_list, page) = match self.paginate_by {
            Some(per_page) => {
                let count = self.source.count().await?;
                let paginator = Paginator::new(count, per_page);
                let page_parameter = &self.resolver.config().page_parameter;
                let number = paginator.validate_number(request.params.get(page_parameter))?;
                let page = paginator.page(number);
                let items = self
                    .source
                    .fetch_ordered(&sort.sort, Some(page.limit), page.offset)
                    .await?;
                (items, page)
            }
            None => {
                let items = self.fetch_all(&sort.sort).await?;
                let page = Page::unpaginated(items.len());
                (items, page)
            }
        };

        tracing::debug!(
            path = %request.path,
            ordering = %sort.sort,
            page = page.number,
            count = object_list.len(),
            "Sorted list"
        );

        Ok(ListContext {
            object_list,
            ordering: sort.ordering(),
            current_sort_query: sort.current_sort_query,
            sort_link_list: sort.sort_link_list,
            is_paginated: self.paginate_by.is_some(),
            page,
        })
    }

    async fn fetch_all(&self, sort: &SortSpec) -> ApiResult<Vec<T>> {
        Ok(self.source.fetch_ordered(sort, None, 0).await?)
    }
}

/// `GET` handler serving a [`SortableListView`] as JSON
pub async fn list_objects<T>(
    State(view): State<Arc<SortableListView<T>>>,
    request: SortRequest,
) -> ApiResult<Json<ListContext<T>>>
where
    T: Serialize + Send + Sync + 'static,
{
    Ok(Json(view.get(&request).await?))
}
