use std::sync::Arc;

use serde::Serialize;

use crate::errors::ValidationError;
use crate::models::{DeviceRecord, Reading, RegisterDevice, SubmitReading};
use crate::services::{DeviceRegistry, ReadingLog};

#[derive(Debug, Clone, Serialize)]
pub struct RegisterAck {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitAck {
    pub success: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeviceList {
    pub devices: Vec<DeviceRecord>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingList {
    pub data_points: Vec<Reading>,
}

/// Thin orchestration over the two stores. The stores are never locked
/// together; each call touches exactly one of them, and no cross-validation
/// ties a reading's device id to the registry.
pub struct CollectorService {
    registry: Arc<DeviceRegistry>,
    log: Arc<ReadingLog>,
}

impl CollectorService {
    pub fn new(registry: Arc<DeviceRegistry>, log: Arc<ReadingLog>) -> Self {
        Self { registry, log }
    }

    pub async fn register_device(
        &self,
        payload: RegisterDevice,
    ) -> Result<RegisterAck, ValidationError> {
        let (record, was_created) = self.registry.upsert(payload).await?;

        let message = if was_created {
            "Device registered"
        } else {
            "Device updated"
        };

        tracing::debug!(device_id = %record.id, status = %record.status, "{message}");

        Ok(RegisterAck {
            success: true,
            message: message.to_string(),
        })
    }

    pub async fn submit_reading(
        &self,
        payload: SubmitReading,
    ) -> Result<SubmitAck, ValidationError> {
        self.log.append(payload).await?;

        Ok(SubmitAck { success: true })
    }

    pub async fn list_devices(&self) -> DeviceList {
        DeviceList {
            devices: self.registry.list().await,
        }
    }

    pub async fn get_device(&self, id: &str) -> Option<DeviceRecord> {
        self.registry.get(id).await
    }

    pub async fn list_readings(&self, device_id: Option<&str>) -> ReadingList {
        ReadingList {
            data_points: self.log.list(device_id).await,
        }
    }
}
