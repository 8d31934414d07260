//! Model types for the synchronization core

mod device_status;
mod modes;

pub use device_status::{DeviceStatus, MAX_STATUS_TEXT, MAX_TRACK_TEXT};
pub use modes::{ButtonMode, DisplayMode};
pub use remote_protocol::PlayState;
