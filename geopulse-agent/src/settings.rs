use std::env;
use std::error::Error;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collector {
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub device_id: Option<String>,
    pub interval_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub logger: Logger,
    pub collector: Collector,
    pub agent: Agent,
}

impl Settings {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let mut settings: Settings = toml::from_str(include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../",
            "configs/default.toml"
        )))?;

        // The config file wins; DEVICE_ID is the fallback for fleets that
        // provision ids through the environment.
        if settings.agent.device_id.is_none() {
            settings.agent.device_id = env::var("DEVICE_ID").ok();
        }

        Ok(settings)
    }
}
