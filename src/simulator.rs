//! Virtual device producer.
//!
//! Stands in for the bench hardware: fabricates DHT-style readings and
//! pushes them to the ingest endpoint on a fixed interval. A failed send is
//! logged and dropped; the next tick sends a fresh reading instead of
//! retrying the old one.

use crate::error::Result;
use crate::store::Reading;
use rand::Rng;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Seconds between readings when no interval is given on the command line
pub const DEFAULT_INTERVAL_SECS: u64 = 10;

/// Simulated DHT sensor producing values in the same ranges the bench
/// device reports.
#[derive(Debug, Default)]
pub struct VirtualSensor;

impl VirtualSensor {
    /// Fabricate one observation: 18-35°C, 40-80% humidity.
    pub fn measure(&mut self) -> Reading {
        let mut rng = rand::thread_rng();
        Reading {
            temperature: 18.0 + rng.gen::<f64>() * 17.0,
            humidity: 40.0 + rng.gen::<f64>() * 40.0,
        }
    }
}

/// Post simulated readings to `{server_url}/sensor_data` until cancelled.
///
/// # Errors
///
/// Individual send failures are recovered locally and never returned; the
/// function only errors if the HTTP client itself cannot be built.
pub async fn run(
    server_url: &str,
    interval: Duration,
    cancel_token: CancellationToken,
) -> Result<()> {
    let endpoint = format!("{}/sensor_data", server_url.trim_end_matches('/'));
    let client = reqwest::Client::builder().build()?;
    let mut sensor = VirtualSensor::default();
    let mut ticker = tokio::time::interval(interval);

    info!(
        "Virtual device sending to {endpoint} every {} seconds",
        interval.as_secs()
    );

    loop {
        tokio::select! {
            _ = cancel_token.cancelled() => break,
            _ = ticker.tick() => {}
        }

        let reading = sensor.measure();
        info!(
            "Reading: Temp={:.2}°C, Hum={:.2}%",
            reading.temperature, reading.humidity
        );

        match client.post(&endpoint).json(&reading).send().await {
            Ok(response) if response.status().is_success() => {
                debug!("Reading delivered");
            }
            Ok(response) => {
                warn!("Server rejected reading: {}", response.status());
            }
            Err(err) => {
                warn!("Failed to send reading: {err}");
            }
        }
    }

    info!("Virtual device stopped");
    Ok(())
}
