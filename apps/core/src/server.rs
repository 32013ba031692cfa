//! HTTP server

use anyhow::Result;
use axum::Router;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::brain::{AnswerEngine, SpecialCaseTable};
use crate::config::AppConfig;
use crate::routes;
use crate::upstream::{HttpMessageSource, MessageSource};

/// Application state shared across handlers
pub struct AppState {
    pub engine: AnswerEngine,
    pub source: Arc<dyn MessageSource>,
    pub started_at: DateTime<Utc>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(engine: AnswerEngine, source: Arc<dyn MessageSource>) -> Self {
        Self {
            engine,
            source,
            started_at: Utc::now(),
            start_time: Instant::now(),
        }
    }

    /// Builds the engine and upstream client described by `config`
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let mut special_cases = SpecialCaseTable::builtin();
        if let Some(path) = &config.special_cases_path {
            special_cases.extend(SpecialCaseTable::load_json(path)?);
        }

        let source =
            HttpMessageSource::new(config.messages_api_url.clone(), config.upstream_timeout)?;
        info!("Messages API: {}", source.url());

        Ok(Self::new(
            AnswerEngine::with_special_cases(special_cases),
            Arc::new(source),
        ))
    }
}

/// Router with every route mounted
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(routes::ask_routes())
        .merge(routes::health_routes())
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server until the process is stopped
pub async fn run(config: AppConfig) -> Result<()> {
    let state = AppState::from_config(&config)?;
    info!(
        "{} special cases loaded",
        state.engine.special_cases().len()
    );

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Listening on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        // Without a signal handler, never resolve and keep serving.
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
