use std::sync::Arc;

use anyhow::Result;
use log::{error, info};
use tokio::sync::broadcast;

use wayfarer::{
    config::{self, Config},
    logger::setup_logger,
    web::{start_http_server, AppState},
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger
    setup_logger()?;

    let config: Arc<Config> = Arc::new(config::read_config());
    info!("Booking backend at {}", config.api_base_url);

    let (shutdown_tx, shutdown_rx) = broadcast::channel::<()>(1);

    let server_handle = tokio::spawn(start_http_server(AppState::new(config), shutdown_rx));

    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for shutdown signal: {:?}", err);
            return;
        }
        info!("Shutting down");
        let _ = shutdown_tx.send(());
    });

    match server_handle.await {
        Ok(Ok(())) => {}
        Ok(Err(err)) => error!("HTTP server stopped with error: {:?}", err),
        Err(err) => error!("Error: {:?}", err),
    }

    Ok(())
}
