//! Spotlight HTTP API.
//!
//! - `GET /api/users`: featured users (mock or aggregated); the number of
//!   lookups left out of an aggregated list is sent in `x-omitted-lookups`
//! - `GET /api/users/{username}`: full profile, 404 when unknown
//! - `GET /health`

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::{header::CONTENT_TYPE, Method},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use super::error::ApiError;
use crate::domain::models::{ServerConfig, UserData};
use crate::domain::ports::{ProfileSource, UserDirectory};

/// Header carrying the number of omitted lookups on `/api/users`.
pub const OMITTED_HEADER: &str = "x-omitted-lookups";

/// Shared state for the HTTP handlers.
struct AppState {
    directory: Arc<dyn UserDirectory>,
    profiles: Arc<dyn ProfileSource>,
}

/// Spotlight API server.
pub struct ApiServer {
    config: ServerConfig,
    directory: Arc<dyn UserDirectory>,
    profiles: Arc<dyn ProfileSource>,
}

impl ApiServer {
    pub fn new(
        config: ServerConfig,
        directory: Arc<dyn UserDirectory>,
        profiles: Arc<dyn ProfileSource>,
    ) -> Self {
        Self {
            config,
            directory,
            profiles,
        }
    }

    /// Build the router.
    pub fn build_router(&self) -> Router {
        let state = Arc::new(AppState {
            directory: self.directory.clone(),
            profiles: self.profiles.clone(),
        });

        let app = Router::new()
            .route("/api/users", get(list_users))
            .route("/api/users/{username}", get(get_user))
            .route("/health", get(health_check))
            .with_state(state);

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::OPTIONS])
                .allow_headers([CONTENT_TYPE])
                .expose_headers([axum::http::HeaderName::from_static(OMITTED_HEADER)])
                .max_age(Duration::from_secs(60 * 60));
            app.layer(cors).layer(TraceLayer::new_for_http())
        } else {
            app.layer(TraceLayer::new_for_http())
        }
    }

    /// Start the server with a shutdown signal.
    pub async fn serve_with_shutdown<F>(
        self,
        shutdown: F,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port).parse()?;
        let router = self.build_router();

        let listener = TcpListener::bind(addr).await?;
        info!(%addr, source = ?self.config.source, "Spotlight API listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;
        Ok(())
    }

    /// Start the server and run until Ctrl+C or SIGTERM.
    pub async fn serve(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.serve_with_shutdown(shutdown_signal()).await
    }
}

async fn health_check() -> &'static str {
    "OK"
}

async fn list_users(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    let listing = state.directory.list_users().await?;
    debug!(
        users = listing.users.len(),
        omitted = listing.omitted_count(),
        "serving user list"
    );

    Ok((
        [(OMITTED_HEADER, listing.omitted_count().to_string())],
        Json(listing.users),
    ))
}

async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Json<UserData>, ApiError> {
    let profile = state.profiles.get_profile(&username).await?;
    Ok(Json(profile))
}

/// Resolves on Ctrl+C or, on unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!(error = %e, "failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!(error = %e, "failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
