//! HTTP server module
//!
//! Exposes the relay endpoints:
//!
//! - `POST /send-message`: validate, enrich, and forward a message.
//! - `GET /`: status page.
//! - `GET /health`: liveness probe.

use std::{net::SocketAddr, sync::Arc};

use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::{
    config::AppConfig,
    http_client::{HttpClientError, create_http_client},
    notification::{
        NotificationError, Notifier, TelegramNotifier, TemplateService, TemplateServiceError,
    },
};

mod error;
mod send_message;
mod status;

pub use error::ApiError;

/// Errors that prevent the HTTP server from starting or keep it from running.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Binding or serving on the listen address failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The notification templates could not be compiled.
    #[error("Template error: {0}")]
    Template(#[from] TemplateServiceError),

    /// The outbound HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] HttpClientError),

    /// The Telegram notifier could not be configured.
    #[error("Notifier error: {0}")]
    Notifier(#[from] NotificationError),
}

/// Shared state available to every handler.
#[derive(Clone)]
pub struct ApiState {
    /// Application configuration, built once at startup.
    pub config: Arc<AppConfig>,
    /// Compiled notification templates.
    pub templates: Arc<TemplateService>,
    /// Delivery channel. `None` when credentials are not configured.
    pub notifier: Option<Arc<dyn Notifier>>,
}

impl ApiState {
    /// Creates the state from its parts.
    pub fn new(
        config: Arc<AppConfig>,
        notifier: Option<Arc<dyn Notifier>>,
    ) -> Result<Self, ServerError> {
        Ok(Self { config, templates: Arc::new(TemplateService::new()?), notifier })
    }

    /// Creates the state for a configuration, wiring a Telegram notifier when
    /// credentials are present.
    pub fn from_config(config: Arc<AppConfig>) -> Result<Self, ServerError> {
        let notifier: Option<Arc<dyn Notifier>> = match config.telegram_credentials() {
            Some(credentials) => {
                let client = create_http_client(&config.http_base_config())?;
                let notifier =
                    TelegramNotifier::new(&config.telegram_api_url, &credentials, client)?;
                Some(Arc::new(notifier))
            }
            None => {
                tracing::warn!("BOT_TOKEN and CHAT_ID must be set in environment");
                None
            }
        };

        Self::new(config, notifier)
    }
}

/// Builds the router with all relay routes and a permissive CORS policy, so
/// the widget can be embedded on any origin.
pub fn router(state: ApiState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/", get(status::status_page))
        .route("/health", get(status::health))
        .route("/send-message", post(send_message::send_message))
        .layer(cors)
        .with_state(state)
}

/// Serves the relay on an already bound listener until a shutdown signal
/// arrives.
pub async fn run_server(listener: TcpListener, state: ApiState) -> Result<(), ServerError> {
    let app = router(state);

    tracing::info!(address = %listener.local_addr()?, "Telegram relay server listening");

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Telegram relay server stopped.");
    Ok(())
}

/// Runs the HTTP server based on the provided application configuration.
pub async fn run_server_from_config(config: Arc<AppConfig>) -> Result<(), ServerError> {
    let state = ApiState::from_config(Arc::clone(&config))?;
    let listener = TcpListener::bind(config.listen_address()).await?;
    run_server(listener, state).await
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to register SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("SIGINT (Ctrl+C) received, initiating graceful shutdown."),
        _ = terminate => tracing::info!("SIGTERM received, initiating graceful shutdown."),
    }
}
