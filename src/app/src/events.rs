use serde::{Deserialize, Serialize};

use crate::types::*;

/// Events that can happen in the widget
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum Event {
    // Field bindings from the presentation layer
    SetDeviceType(DeviceType),
    SetThreshold(Option<f64>),
    SetNodeId(String),

    // User action
    Submit,

    // HTTP responses (internal events, skipped from serialization)
    #[serde(skip)]
    SaveConfigResponse(Result<serde_json::Value, String>),
}
