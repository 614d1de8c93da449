//! Sortable Listview RS Server
//!
//! Serves the demo project catalog as a sortable, paginated JSON listing.

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sl_api::{list_objects, SortableListView};
use sl_core::config::AppConfig;
use sl_db::{InMemorySource, ListSource};
use sl_queries::SortResolver;

mod catalog;

use catalog::Project;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging
    init_tracing();

    dotenvy::dotenv().ok();
    let config = AppConfig::load()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.server.host,
        port = config.server.port,
        default_sort = %config.sort.default_sort_field,
        "Starting Sortable Listview RS"
    );

    let view = build_view(&config)?;
    let app = build_router(Arc::new(view));

    let addr = config.server_addr();
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,sl_server=debug,sl_api=debug,tower_http=debug".into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

/// Build the project listing, rejecting sort fields projects do not have
fn build_view(config: &AppConfig) -> anyhow::Result<SortableListView<Project>> {
    if let Some(field) = config
        .sort
        .allowed_sort_fields
        .iter()
        .find(|f| !catalog::is_sortable(&f.name))
    {
        anyhow::bail!("Projects cannot be sorted by {}", field.name);
    }

    let resolver = SortResolver::new(config.sort.clone())?;
    let source: Arc<dyn ListSource<Project>> = Arc::new(InMemorySource::new(catalog::projects()));
    let mut view = SortableListView::new(resolver, source);
    if let Some(per_page) = config.paginate_by {
        view = view.paginate_by(per_page);
    }
    Ok(view)
}

/// Build the application router
fn build_router(view: Arc<SortableListView<Project>>) -> Router {
    let list_routes = Router::new()
        .route("/projects", get(list_objects::<Project>))
        .with_state(view);

    Router::new()
        .route("/health", get(health))
        .merge(list_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use sl_core::config::SortDirection;
    use tower::ServiceExt;

    fn test_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.sort = sl_core::config::SortConfig::new("created_at")
            .field("id", SortDirection::Desc, "ID")
            .field("name", SortDirection::Asc, "Name")
            .field("created_at", SortDirection::Desc, "Created")
            .with_querystring(true)
            .without_pagination(true);
        config.paginate_by = Some(3);
        config
    }

    fn test_app() -> Router {
        let view = build_view(&test_config()).unwrap();
        build_router(Arc::new(view))
    }

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let response = test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (status, json) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_projects_default_sort() {
        let (status, json) = get_json("/projects").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["ordering"], "-created_at");
        assert_eq!(json["current_sort_query"], "");
        assert_eq!(json["page"]["num_pages"], 3);
        // newest project first
        assert_eq!(json["object_list"][0]["name"], "Data warehouse");
    }

    #[tokio::test]
    async fn test_projects_sorted_by_name_with_filters() {
        let (status, json) = get_json("/projects?sort=name&q=app&page=2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["ordering"], "name");
        assert_eq!(json["current_sort_query"], "sort=name");
        assert_eq!(json["page"]["number"], 2);
        assert_eq!(json["object_list"][0]["name"], "Internal wiki");

        let links = json["sort_link_list"].as_array().unwrap();
        assert_eq!(links.len(), 3);
        assert_eq!(links[0]["url"], "/projects?sort=-id&q=app");
        assert_eq!(links[1]["url"], "/projects?sort=-name&q=app");
        assert_eq!(links[1]["indicator"], "sort-asc");
        assert_eq!(links[2]["url"], "/projects?q=app");
    }

    #[tokio::test]
    async fn test_projects_invalid_page() {
        let (status, json) = get_json("/projects?page=99").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "not_found");
    }

    #[test]
    fn test_build_view_rejects_unknown_project_field() {
        let mut config = test_config();
        config.sort = config.sort.field("budget", SortDirection::Desc, "Budget");
        assert!(build_view(&config).is_err());
    }
}
