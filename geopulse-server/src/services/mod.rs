mod collector_service;
mod device_registry;
mod reading_log;

pub use collector_service::*;
pub use device_registry::*;
pub use reading_log::*;
