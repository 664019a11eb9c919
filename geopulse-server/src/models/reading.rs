use serde::{Deserialize, Serialize};

/// A single sensor reading. The timestamp is kept verbatim as the agent
/// reported it. `device_id` is a soft reference: nothing guarantees the
/// device is (still) registered, and older agents omit it entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    pub value: f64,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReading {
    pub value: Option<f64>,
    pub timestamp: Option<String>,
    pub device_id: Option<String>,
}
