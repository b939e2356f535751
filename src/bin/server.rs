//! Receipt Processor HTTP server
//!
//! # Environment Variables
//!
//! - `RECEIPT_PROCESSOR_ADDR`: listen address (default `127.0.0.1:8080`)
//! - `RUST_LOG`: Set to `info` or `debug` to control logging verbosity

use log::info;
use receipt_processor::server::{router, AppState, ServerConfig};
use receipt_processor::{ReceiptProcessor, Result};
use std::process;

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = ServerConfig::from_env();
    let app = router(AppState::new(ReceiptProcessor::new()));

    let listener = tokio::net::TcpListener::bind(config.addr.as_str()).await?;
    info!("Listening on http://{}", config.addr);

    axum::serve(listener, app).await?;
    Ok(())
}
