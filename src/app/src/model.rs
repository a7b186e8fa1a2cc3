use serde::{Deserialize, Serialize};

use crate::types::*;

/// Widget state - the two user-selected settings plus the node they target
/// Also serves as the ViewModel when serialized
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Model {
    pub device_type: DeviceType,
    pub threshold: Option<f64>,

    /// Target node, the placeholder until the shell provides a real id
    pub node_id: String,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            device_type: DeviceType::default(),
            threshold: None,
            node_id: PLACEHOLDER_NODE_ID.to_string(),
        }
    }
}

impl Model {
    /// Snapshot of the current fields as the payload to persist
    pub fn configuration(&self) -> WidgetConfiguration {
        WidgetConfiguration {
            device_type: self.device_type,
            custom_threshold: self.threshold,
        }
    }

    pub fn has_placeholder_node_id(&self) -> bool {
        self.node_id == PLACEHOLDER_NODE_ID
    }
}
