//! Domain-based type organization
//!
//! - device: sensor types the widget can target
//! - widget: the configuration payload and node addressing

pub mod device;
pub mod widget;

pub use device::*;
pub use widget::*;
