use crate::config::Config;
use crate::store::{Reading, StateStore, Thresholds};
use crate::validation::{self, ValidationError};
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{info, warn};

/// Shared state handed to every request handler.
pub struct AppState {
    pub store: StateStore,
    pub config: Config,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config) -> Self {
        AppState {
            store: StateStore::new(),
            config,
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "status": "error",
                "detail": self.issues,
            })),
        )
            .into_response()
    }
}

/// Handles `POST /sensor_data`: the device pushing its latest reading.
///
/// The previous reading is discarded on success; a rejected payload leaves
/// the store untouched.
pub async fn receive_sensor_data(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ValidationError> {
    let reading = validation::reading_from_json(&body).map_err(|err| {
        warn!("Rejected sensor payload: {err}");
        err
    })?;

    state.store.replace_reading(reading);
    info!(
        "Received and stored: Temp={}°C, Hum={}%",
        reading.temperature, reading.humidity
    );

    Ok(Json(json!({"status": "success"})))
}

/// Handles `GET /get_latest_data` for the dashboard client.
pub async fn get_latest_data(State(state): State<Arc<AppState>>) -> Json<Reading> {
    Json(state.store.reading())
}

/// Handles `GET /get_thresholds` for the dashboard client.
pub async fn get_thresholds(State(state): State<Arc<AppState>>) -> Json<Thresholds> {
    Json(state.store.thresholds())
}

/// Handles `POST /set_thresholds`: the dashboard replacing the alert
/// boundaries.
///
/// The response echoes the stored values so the caller can confirm what
/// was kept.
pub async fn set_thresholds(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ValidationError> {
    let thresholds = validation::thresholds_from_json(&body).map_err(|err| {
        warn!("Rejected thresholds payload: {err}");
        err
    })?;

    state.store.replace_thresholds(thresholds);
    info!("Updated thresholds to: {thresholds:?}");

    Ok(Json(json!({
        "status": "success",
        "thresholds": thresholds,
    })))
}

/// Handles `GET /`: the dashboard page itself.
pub async fn dashboard(State(state): State<Arc<AppState>>) -> Response {
    let path = state.config.static_dir.join("index.html");
    match tokio::fs::read_to_string(&path).await {
        Ok(page) => Html(page).into_response(),
        Err(err) => {
            warn!("Dashboard asset {} unavailable: {err}", path.display());
            (StatusCode::NOT_FOUND, "dashboard page not found").into_response()
        }
    }
}
