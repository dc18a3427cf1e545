use std::sync::Arc;

use crate::api;
use crate::config::Config;
use crate::data::Dataset;
use crate::error::AppError;
use crate::state::AppState;

pub async fn run(config: Config) -> Result<(), AppError> {
    let dataset = Dataset::load(&config.data_dir)?;
    let shared_state = Arc::new(AppState::new(
        dataset,
        config.default_min_score,
        config.event_buffer_size,
    ));

    let app = api::rest::app(shared_state, &config.static_dir);

    let bind_addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|err| AppError::Internal(format!("failed to bind {bind_addr}: {err}")))?;

    tracing::info!(http_port = config.http_port, "http server started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| AppError::Internal(format!("server error: {err}")))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
