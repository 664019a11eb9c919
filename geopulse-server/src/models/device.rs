use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

/// A registered device as held by the collector. `last_updated` is always
/// the collector's own clock, never a caller-supplied value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceRecord {
    pub id: String,
    pub ip: String,
    pub position: Position,
    pub status: String,
    #[serde(with = "time::serde::rfc3339")]
    pub last_updated: OffsetDateTime,
}

/// Heartbeat payload as submitted by an agent. Every field is optional so
/// that incomplete submissions reach validation instead of being rejected
/// by the deserializer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDevice {
    pub id: Option<String>,
    pub ip: Option<String>,
    pub position: Option<PositionPayload>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PositionPayload {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
