//! HTTP front end for the todo service.
//!
//! # Overview
//! `GET/POST /todos` and `GET/DELETE /todos/{id}`, all behind an `X-API-KEY`
//! check, plus an open `GET /` liveness route. Storage is whatever
//! `TodoStore` the router is built with.
//!
//! # Design
//! - The store and the expected API key travel in `AppState`; nothing is
//!   global, so tests build the router over `MemoryStore`.
//! - Failures are `ApiError` values rendered as `{"error": "..."}`.
//! - Permissive CORS and request tracing wrap the whole router.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::http::{header, HeaderName, Method};
use axum::routing::get;
use axum::Router;
use todo_core::TodoStore;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub use auth::{ApiKey, API_KEY_HEADER, DEFAULT_API_KEY};
pub use config::{Config, MongoConfig};
pub use error::{ApiError, ApiResult, ErrorBody};

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState<S> {
    pub store: S,
    pub api_key: Arc<str>,
}

impl<S: TodoStore> AppState<S> {
    pub fn new(store: S, api_key: impl Into<Arc<str>>) -> Self {
        Self {
            store,
            api_key: api_key.into(),
        }
    }
}

pub fn app<S: TodoStore>(state: AppState<S>) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route(
            "/todos",
            get(handlers::list_todos::<S>).post(handlers::create_todo::<S>),
        )
        .route(
            "/todos/{id}",
            get(handlers::get_todo::<S>).delete(handlers::delete_todo::<S>),
        )
        .with_state(state)
        .layer(cors())
        .layer(TraceLayer::new_for_http())
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(API_KEY_HEADER)])
}

/// Serve until the listener fails.
pub async fn run<S: TodoStore>(
    listener: TcpListener,
    state: AppState<S>,
) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state)).await
}

/// Serve until Ctrl-C or SIGTERM, then drain in-flight requests.
pub async fn run_until_shutdown<S: TodoStore>(
    listener: TcpListener,
    state: AppState<S>,
) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(%err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!(%err, "failed to listen for SIGTERM");
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
    info!("shutting down");
}
