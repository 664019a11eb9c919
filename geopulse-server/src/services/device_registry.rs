use std::collections::hash_map::Entry;
use std::collections::HashMap;

use time::OffsetDateTime;
use tokio::sync::RwLock;

use crate::errors::ValidationError;
use crate::models::{DeviceRecord, Position, RegisterDevice};

/// Keyed store of device records, one per device id. Devices are only ever
/// inserted or replaced, never removed, for the lifetime of the process.
pub struct DeviceRegistry {
    devices: RwLock<HashMap<String, DeviceRecord>>,
}

impl DeviceRegistry {
    pub fn new() -> Self {
        Self {
            devices: RwLock::new(HashMap::new()),
        }
    }

    /// Creates or replaces the record for the payload's device id. The
    /// returned flag is true when the device was seen for the first time.
    /// `last_updated` is stamped with the collector clock on every call;
    /// nothing the caller sends for it is trusted.
    pub async fn upsert(
        &self,
        payload: RegisterDevice,
    ) -> Result<(DeviceRecord, bool), ValidationError> {
        let id = payload.id.filter(|v| !v.is_empty());
        let ip = payload.ip.filter(|v| !v.is_empty());
        let status = payload.status.filter(|v| !v.is_empty());

        let mut fields = Vec::new();
        if id.is_none() {
            fields.push("id");
        }
        if ip.is_none() {
            fields.push("ip");
        }
        if payload.position.is_none() {
            fields.push("position");
        }
        if status.is_none() {
            fields.push("status");
        }

        let (Some(id), Some(ip), Some(position), Some(status)) =
            (id, ip, payload.position, status)
        else {
            return Err(ValidationError::missing(&fields));
        };

        let (Some(latitude), Some(longitude)) = (position.latitude, position.longitude) else {
            return Err(ValidationError::InvalidPosition);
        };

        let position = Position {
            latitude,
            longitude,
        };

        let mut devices = self.devices.write().await;
        let now = OffsetDateTime::now_utc();

        match devices.entry(id) {
            Entry::Occupied(mut entry) => {
                let record = entry.get_mut();
                record.ip = ip;
                record.position = position;
                record.status = status;
                record.last_updated = now;

                Ok((record.clone(), false))
            }
            Entry::Vacant(entry) => {
                let record = DeviceRecord {
                    id: entry.key().clone(),
                    ip,
                    position,
                    status,
                    last_updated: now,
                };

                Ok((entry.insert(record).clone(), true))
            }
        }
    }

    /// Snapshot of all current devices, each exactly once. Iteration order
    /// is not part of the contract.
    pub async fn list(&self) -> Vec<DeviceRecord> {
        let devices = self.devices.read().await;
        devices.values().cloned().collect()
    }

    pub async fn get(&self, id: &str) -> Option<DeviceRecord> {
        let devices = self.devices.read().await;
        devices.get(id).cloned()
    }
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
