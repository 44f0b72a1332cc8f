use std::sync::Arc;

use driver_gigs::config::Config;
use driver_gigs::error::AppError;
use driver_gigs::state::AppState;
use driver_gigs::{api, seed};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_level.clone()))
        .with_target(false)
        .compact()
        .init();

    let (pending, rides) = if config.seed_demo_data {
        (seed::demo_pending_orders(), seed::demo_ride_history())
    } else {
        (Vec::new(), Vec::new())
    };

    tracing::info!(
        pending_orders = pending.len(),
        rides = rides.len(),
        "order store seeded"
    );

    let shared_state = Arc::new(AppState::new(pending, rides, config.event_buffer_size));
    let app = api::rest::router(shared_state);

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
