mod data_handle;
mod device_handle;

pub use data_handle::*;
pub use device_handle::*;
