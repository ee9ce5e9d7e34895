//! # HTTP Server
//!
//! JSON REST surface over [`FlashcardApi`](crate::api::FlashcardApi):
//!
//! | Method | Path | Success | Failure |
//! |---|---|---|---|
//! | POST | `/api/flashcards` | 201 + record | 400 validation |
//! | GET | `/api/flashcards` | 200 + list | 500 |
//! | GET | `/api/flashcards/{id}` | 200 + record | 400 bad id, 404 |
//! | PATCH | `/api/flashcards/{id}` | 200 + record | 400 bad id or body, 404 |
//! | DELETE | `/api/flashcards/{id}` | 200 + `{message}` | 400 bad id, 404 |
//!
//! Every error body is `{message, error?}`; see [`error::ErrorBody`].

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::get,
    Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

pub mod error;
pub mod routes;
pub mod state;

use crate::config::FlashcardsConfig;
use crate::error::{FlashcardError, Result};
use crate::store::DataStore;
use routes::{create_handler, delete_handler, get_handler, list_handler, update_handler};
pub use state::AppState;

pub const API_PREFIX: &str = "/api/flashcards";

pub fn build_router<S: DataStore + Send + 'static>(state: Arc<AppState<S>>, cors: CorsLayer) -> Router {
    Router::new()
        .route(
            API_PREFIX,
            get(list_handler::<S>).post(create_handler::<S>),
        )
        .route(
            &format!("{API_PREFIX}/{{id}}"),
            get(get_handler::<S>)
                .patch(update_handler::<S>)
                .delete(delete_handler::<S>),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

pub fn cors_layer(origin: Option<&str>) -> Result<CorsLayer> {
    let allow_origin = match origin {
        Some(origin) => {
            let value = HeaderValue::from_str(origin)
                .map_err(|e| FlashcardError::Config(format!("Invalid CORS origin {origin:?}: {e}")))?;
            AllowOrigin::exact(value)
        }
        None => AllowOrigin::from(Any),
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60)))
}

/// Runs the API until Ctrl+C or SIGTERM.
pub async fn serve<S: DataStore + Send + 'static>(store: S, config: &FlashcardsConfig) -> Result<()> {
    let state = AppState::new(store);
    let cors = cors_layer(config.cors_origin.as_deref())?;
    let app = build_router(state, cors);

    let address = format!("0.0.0.0:{}", config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
