use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handles::{data_router, device_router, DataState, DeviceState};
use crate::services::{CollectorService, DeviceRegistry, ReadingLog};

/// Builds the collector router. Both stores are constructed exactly once
/// here and shared across handles; they live for the whole process.
pub fn create_app() -> Router {
    let registry = Arc::new(DeviceRegistry::new());
    let log = Arc::new(ReadingLog::new());
    let collector = Arc::new(CollectorService::new(registry, log));

    let devices = device_router(DeviceState {
        collector: collector.clone(),
    });

    let data = data_router(DataState {
        collector: collector.clone(),
    });

    Router::new()
        .nest("/api/devices", devices)
        .nest("/api/data", data)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
