//! Application startup and lifecycle management.

use axum::{
    http::{header, HeaderValue, Method},
    middleware::from_fn,
    routing::get,
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    metrics_middleware, request_id_middleware, security_headers_middleware, REQUEST_ID_HEADER,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::TeacherConfig;
use crate::handlers::{self, teachers};
use crate::services::{MongoTeacherStore, TeacherDirectory, TeacherStore};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: TeacherConfig,
    pub directory: TeacherDirectory,
}

/// Origins usable in an explicit allow-list. A wildcard cannot be combined
/// with credentials, so `*` is skipped like any unparseable origin.
fn allowed_origin_values(allowed_origins: &[String]) -> Vec<HeaderValue> {
    allowed_origins
        .iter()
        .filter_map(|o| {
            if o.trim() == "*" {
                tracing::error!("Wildcard CORS origin is not allowed with credentials. Skipping.");
                return None;
            }
            match o.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::error!("Invalid CORS origin '{}': {}. Skipping.", o, e);
                    None
                }
            }
        })
        .collect()
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origin_values(allowed_origins))
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors.allowed_origins);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics))
        .route(
            "/teachers",
            get(teachers::list_teachers).post(teachers::create_teacher),
        )
        .route(
            "/teachers/:id",
            get(teachers::get_teacher)
                .put(teachers::update_teacher)
                .delete(teachers::delete_teacher),
        )
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(security_headers_middleware))
        .layer(cors)
        .with_state(state)
}

/// Connects to MongoDB once. A missing URI or failed connection leaves the
/// service running without storage.
async fn connect_store(config: &TeacherConfig) -> Option<Arc<dyn TeacherStore>> {
    let Some(uri) = config.mongodb.uri() else {
        tracing::warn!("MONGO_URI is not set. The API will run without a database.");
        return None;
    };

    match MongoTeacherStore::connect(uri, &config.mongodb.database).await {
        Ok(store) => Some(Arc::new(store)),
        Err(e) => {
            tracing::error!("Failed to connect to MongoDB: {}. Data routes will answer 503.", e);
            None
        }
    }
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: TeacherConfig) -> Result<Self, AppError> {
        let directory = match connect_store(&config).await {
            Some(store) => TeacherDirectory::new(store),
            None => TeacherDirectory::unavailable(),
        };

        Self::build_with_directory(config, directory).await
    }

    /// Build the application around an already constructed store.
    pub async fn build_with_store(
        config: TeacherConfig,
        store: Arc<dyn TeacherStore>,
    ) -> Result<Self, AppError> {
        Self::build_with_directory(config, TeacherDirectory::new(store)).await
    }

    async fn build_with_directory(
        config: TeacherConfig,
        directory: TeacherDirectory,
    ) -> Result<Self, AppError> {
        // Port 0 binds a random port for tests.
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Teacher service: HTTP on port {}", port);

        Ok(Self {
            port,
            listener,
            state: AppState { config, directory },
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn state(&self) -> AppState {
        self.state.clone()
    }

    /// Serve until Ctrl+C or SIGTERM.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                e
            })
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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

    tracing::info!("Shutdown signal received");
}
