//! Axum extractors for list handlers

use axum::{
    async_trait,
    extract::{FromRequestParts, OriginalUri},
    http::request::Parts,
};
use sl_queries::QueryParams;
use std::convert::Infallible;

/// The parts of a request sorting needs: its path and query parameters.
///
/// The path is taken from the original URI so links stay correct inside
/// nested routers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortRequest {
    pub path: String,
    pub params: QueryParams,
}

impl SortRequest {
    pub fn new(path: impl Into<String>, query: &str) -> Self {
        Self {
            path: path.into(),
            params: QueryParams::parse(query),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for SortRequest
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let uri = parts
            .extensions
            .get::<OriginalUri>()
            .map(|original| &original.0)
            .unwrap_or(&parts.uri);
        Ok(SortRequest::new(uri.path(), uri.query().unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    #[tokio::test]
    async fn test_extracts_path_and_params() {
        let (mut parts, _) = Request::builder()
            .uri("/projects?filter=active&sort=-name")
            .body(())
            .unwrap()
            .into_parts();

        let request = SortRequest::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(request.path, "/projects");
        assert_eq!(request.params.get("sort"), Some("-name"));
        assert_eq!(request.params.get("filter"), Some("active"));
    }

    #[tokio::test]
    async fn test_prefers_original_uri() {
        let (mut parts, _) = Request::builder()
            .uri("/?sort=name")
            .body(())
            .unwrap()
            .into_parts();
        parts
            .extensions
            .insert(OriginalUri("/admin/projects?sort=name".parse().unwrap()));

        let request = SortRequest::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(request.path, "/admin/projects");
    }
}
