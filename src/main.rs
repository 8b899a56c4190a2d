//! # beacon_sense Main Application Entry Point
//!
//! This is the main executable for the beacon_sense telemetry service.
//! It handles command-line argument parsing, tracing initialization,
//! server startup, and application lifecycle management.
//!
//! The application can be launched with optional command-line arguments:
//!
//! - First argument: Port number (defaults to 8000)
//! - Second argument: Path to configuration file (no file is read if omitted)
//!
//! ## Example Usage
//!
//! ```bash
//! # Run with default settings (port 8000, built-in defaults)
//! cargo run
//!
//! # Run on a specific port
//! cargo run 9000
//!
//! # Run with a specific port and configuration file
//! cargo run 9000 beacon.json5
//! ```
//!
//! The application includes logging using the tracing framework. Log levels
//! can be controlled through the `RUST_LOG` environment variable.

use std::env;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod error;
mod handlers;
mod server;
mod simulator;
mod store;
mod validation;

use crate::error::BeaconError;

/// Main entry point for the beacon_sense server
///
/// This function:
/// 1. Initializes the tracing subscriber for application logging
/// 2. Parses command line arguments for port and configuration file path
/// 3. Creates a cancellation token wired to Ctrl-C for graceful shutdown
/// 4. Starts the web server with the specified parameters
///
/// # Errors
///
/// The function returns an error if:
/// - The server fails to start
/// - Configuration cannot be loaded
/// - Any unrecoverable error occurs during execution
#[tokio::main]
async fn main() -> Result<(), BeaconError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port = env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(config::DEFAULT_PORT);

    let mut config_file_path: Option<PathBuf> = None;

    if let Some(arg2) = env::args().nth(2) {
        config_file_path = Some(PathBuf::from(arg2));
    }

    tracing::info!("Starting beacon_sense server");

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

    server::run(port, config_file_path, cancel_token).await?;

    tracing::info!("beacon_sense server shutting down");
    Ok(())
}
