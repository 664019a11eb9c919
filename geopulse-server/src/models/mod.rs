mod device;
mod reading;

pub use device::{DeviceRecord, Position, PositionPayload, RegisterDevice};
pub use reading::{Reading, SubmitReading};
