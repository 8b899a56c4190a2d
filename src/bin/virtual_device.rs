//! # Virtual Device Entry Point
//!
//! Standalone producer that stands in for the real sensor hardware: it
//! fabricates temperature/humidity readings and pushes them to a running
//! beacon_sense server on a fixed interval.
//!
//! ## Example Usage
//!
//! ```bash
//! # Send to a local server every 10 seconds
//! cargo run --bin virtual_device
//!
//! # Send to a remote server every 5 seconds
//! cargo run --bin virtual_device http://192.168.0.9:8000 5
//! ```

use beacon_sense::error::BeaconError;
use beacon_sense::simulator;
use std::env;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), BeaconError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let server_url = env::args()
        .nth(1)
        .unwrap_or_else(|| "http://127.0.0.1:8000".to_string());

    let interval_secs = env::args()
        .nth(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(simulator::DEFAULT_INTERVAL_SECS);

    let cancel_token = CancellationToken::new();
    tokio::spawn({
        let cancel_token = cancel_token.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Shutdown signal received");
                cancel_token.cancel();
            }
        }
    });

    simulator::run(
        &server_url,
        Duration::from_secs(interval_secs),
        cancel_token,
    )
    .await
}
