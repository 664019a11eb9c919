use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::settings::Settings;

mod netinfo;
pub mod settings;
mod simulate;

#[derive(Debug, Serialize)]
struct Position {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HeartbeatPayload {
    id: String,
    ip: String,
    position: Position,
    status: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReadingPayload {
    value: f64,
    timestamp: String,
    device_id: String,
}

pub async fn run(settings: &Arc<Settings>) {
    let device_id = settings
        .agent
        .device_id
        .clone()
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let base_url = settings.collector.base_url.trim_end_matches('/').to_string();
    let client = reqwest::Client::new();

    tracing::info!(device_id = %device_id, collector = %base_url, "agent started");

    // First tick fires immediately, so the device registers on startup.
    let mut interval = tokio::time::interval(Duration::from_secs(settings.agent.interval_secs));
    loop {
        interval.tick().await;

        if let Err(e) = report(&client, &base_url, &device_id).await {
            tracing::warn!("report failed, will retry on next tick: {e}");
        }
    }
}

/// One scheduled tick: refresh the heartbeat, then submit exactly one
/// reading tagged with our own device id.
async fn report(client: &reqwest::Client, base_url: &str, device_id: &str) -> anyhow::Result<()> {
    register_device(client, base_url, device_id).await?;
    submit_reading(client, base_url, device_id).await?;

    Ok(())
}

async fn register_device(
    client: &reqwest::Client,
    base_url: &str,
    device_id: &str,
) -> anyhow::Result<()> {
    let (latitude, longitude) = simulate::jittered_position();

    let payload = HeartbeatPayload {
        id: device_id.to_string(),
        ip: netinfo::local_ipv4()
            .map(|ip| ip.to_string())
            .unwrap_or_else(|_| "127.0.0.1".to_string()),
        position: Position {
            latitude,
            longitude,
        },
        status: simulate::device_status().to_string(),
    };

    tracing::debug!(status = %payload.status, "registering device {device_id}");

    let ack: serde_json::Value = client
        .post(format!("{base_url}/api/devices"))
        .json(&payload)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    tracing::info!(
        "device registration successful: {}",
        ack["message"].as_str().unwrap_or("")
    );

    Ok(())
}

async fn submit_reading(
    client: &reqwest::Client,
    base_url: &str,
    device_id: &str,
) -> anyhow::Result<()> {
    let payload = ReadingPayload {
        value: simulate::sensor_value(),
        timestamp: OffsetDateTime::now_utc().format(&Rfc3339)?,
        device_id: device_id.to_string(),
    };

    client
        .post(format!("{base_url}/api/data"))
        .json(&payload)
        .send()
        .await?
        .error_for_status()?;

    tracing::info!(value = payload.value, "reading submitted");

    Ok(())
}
