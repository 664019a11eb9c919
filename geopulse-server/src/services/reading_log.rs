use std::collections::VecDeque;

use tokio::sync::RwLock;

use crate::errors::ValidationError;
use crate::models::{Reading, SubmitReading};

/// Insertion-ordered log of sensor readings, bounded at [`Self::CAPACITY`]
/// entries across all devices. Once full, the oldest entries are evicted
/// first; a quiet device gets no per-device minimum history.
pub struct ReadingLog {
    readings: RwLock<VecDeque<Reading>>,
}

impl ReadingLog {
    pub const CAPACITY: usize = 100;

    pub fn new() -> Self {
        Self {
            readings: RwLock::new(VecDeque::with_capacity(Self::CAPACITY)),
        }
    }

    /// Appends one reading at the back of the log, evicting from the front
    /// until the bound holds again. A value of zero is a legitimate reading;
    /// only an absent value or an absent/empty timestamp is rejected. The
    /// device id is stored as given, whether or not such a device exists.
    pub async fn append(&self, payload: SubmitReading) -> Result<(), ValidationError> {
        let timestamp = payload.timestamp.filter(|v| !v.is_empty());

        let mut fields = Vec::new();
        if payload.value.is_none() {
            fields.push("value");
        }
        if timestamp.is_none() {
            fields.push("timestamp");
        }

        let (Some(value), Some(timestamp)) = (payload.value, timestamp) else {
            return Err(ValidationError::missing(&fields));
        };

        let mut readings = self.readings.write().await;

        readings.push_back(Reading {
            value,
            timestamp,
            device_id: payload.device_id,
        });

        while readings.len() > Self::CAPACITY {
            readings.pop_front();
        }

        Ok(())
    }

    /// Snapshot of the log, oldest first. With a device id the matching
    /// subsequence is returned in the same relative order, not re-bounded.
    pub async fn list(&self, device_id: Option<&str>) -> Vec<Reading> {
        let readings = self.readings.read().await;

        match device_id {
            Some(id) => readings
                .iter()
                .filter(|reading| reading.device_id.as_deref() == Some(id))
                .cloned()
                .collect(),
            None => readings.iter().cloned().collect(),
        }
    }
}

impl Default for ReadingLog {
    fn default() -> Self {
        Self::new()
    }
}
