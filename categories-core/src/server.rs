use axum::routing::get;
use axum::{Json, Router};
use thiserror::Error;
use tokio::signal;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_scalar::{Scalar, Servable};

use crate::middleware;
use crate::routes as handlers;

pub const APP_TITLE: &str = "Categories API";
pub const APP_DESCRIPTION: &str = "Simple service that returns a list of categories";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(OpenApi)]
#[openapi(tags(
    (name = "system", description = "Service identity and liveness"),
    (name = "categories", description = "Category directory")
))]
struct ApiDoc;

/// The OpenAPI document, with title, description and version filled in from the crate.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut api = ApiDoc::openapi();
    api.info.title = APP_TITLE.to_string();
    api.info.description = Some(APP_DESCRIPTION.to_string());
    api.info.version = APP_VERSION.to_string();
    api
}

/// Build the Axum router with CORS, request tracing, all routes, the OpenAPI
/// document at `/openapi.json` and its docs page at `/docs`.
pub fn build_router() -> Router {
    let (api_routes, api) = OpenApiRouter::with_openapi(api_doc())
        .routes(routes!(handlers::root::get_root))
        .routes(routes!(handlers::health::get_health))
        .routes(routes!(handlers::categories::get_categories))
        .routes(routes!(handlers::categories::get_category))
        .split_for_parts();

    let spec = api.clone();
    Router::new()
        .merge(api_routes)
        .route(
            "/openapi.json",
            get(move || {
                let spec = spec.clone();
                async move { Json(spec) }
            }),
        )
        .merge(Scalar::with_url("/docs", api))
        .layer(middleware::cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// Bind to `host:port` and serve until Ctrl+C or SIGTERM.
pub async fn run_server(port: u16, host: &str) -> Result<(), ServerError> {
    let app = build_router();
    let addr = format!("{host}:{port}");
    tracing::info!("Starting {APP_TITLE} v{APP_VERSION} on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Resolves on SIGINT (Ctrl+C) or, on unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
