use crate::config::Config;
use crate::error::Result;
use crate::handlers::{self, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::services::ServeDir;

/// Run the web server on the specified port.
///
/// # Arguments
///
/// * `port` - The port number to bind the server to
/// * `config_path` - Optional path to a JSON5 configuration file
/// * `cancel_token` - Token that triggers graceful shutdown when cancelled
///
/// # Returns
///
/// Returns `Ok(())` once the server has shut down, or a `BeaconError` if an
/// error occurs
///
/// # Errors
///
/// Returns an error if:
/// - The configuration file cannot be read or parsed
/// - The bind address cannot be parsed into a valid `SocketAddr`
/// - The server fails to bind to the specified address
pub async fn run(
    port: u16,
    config_path: Option<PathBuf>,
    cancel_token: CancellationToken,
) -> Result<()> {
    tracing::info!("Initializing server");

    let config = Config::load_or_default(config_path.as_deref())?;
    let bind_address = config.bind_address.clone();
    let static_dir = config.static_dir.clone();
    let state = Arc::new(AppState::new(config));

    let app = Router::new()
        .route("/", get(handlers::dashboard))
        .route("/sensor_data", post(handlers::receive_sensor_data))
        .route("/get_latest_data", get(handlers::get_latest_data))
        .route("/get_thresholds", get(handlers::get_thresholds))
        .route("/set_thresholds", post(handlers::set_thresholds))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state);

    tracing::debug!("Routes configured");

    let addr: SocketAddr = format!("{bind_address}:{port}").parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Site launched on: http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { cancel_token.cancelled().await })
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
