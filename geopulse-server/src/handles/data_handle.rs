use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::errors::ApiError;
use crate::models::SubmitReading;
use crate::services::{CollectorService, ReadingList, SubmitAck};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingQuery {
    pub device_id: Option<String>,
}

#[derive(Clone)]
pub struct DataState {
    pub collector: Arc<CollectorService>,
}

pub fn data_router(state: DataState) -> Router {
    Router::new()
        .route("/", get(list_readings).post(submit_reading))
        .with_state(state)
}

pub async fn submit_reading(
    State(state): State<DataState>,
    Json(payload): Json<SubmitReading>,
) -> Result<Json<SubmitAck>, ApiError> {
    let ack = state.collector.submit_reading(payload).await?;

    Ok(Json(ack))
}

pub async fn list_readings(
    Query(query): Query<ReadingQuery>,
    State(state): State<DataState>,
) -> Json<ReadingList> {
    Json(state.collector.list_readings(query.device_id.as_deref()).await)
}
