use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::errors::ApiError;
use crate::models::RegisterDevice;
use crate::services::{CollectorService, DeviceList, RegisterAck};

#[derive(Clone)]
pub struct DeviceState {
    pub collector: Arc<CollectorService>,
}

pub fn device_router(state: DeviceState) -> Router {
    Router::new()
        .route("/", get(list_devices).post(register_device))
        .route("/:device_id", get(get_device))
        .with_state(state)
}

/// Heartbeat endpoint. Upserts the device keyed by its self-assigned id and
/// reports whether this was a first registration or a refresh.
pub async fn register_device(
    State(state): State<DeviceState>,
    Json(payload): Json<RegisterDevice>,
) -> Result<Json<RegisterAck>, ApiError> {
    let ack = state.collector.register_device(payload).await?;

    Ok(Json(ack))
}

pub async fn list_devices(State(state): State<DeviceState>) -> Json<DeviceList> {
    Json(state.collector.list_devices().await)
}

/// Single-device lookup for the dashboard detail view. An unknown id is an
/// empty result, not an error.
pub async fn get_device(
    Path(device_id): Path<String>,
    State(state): State<DeviceState>,
) -> Json<Value> {
    let device = state.collector.get_device(&device_id).await;

    Json(json!({ "device": device }))
}
