use serde::{Deserialize, Serialize};

use super::device::DeviceType;

/// Node identifier the widget submits to until the shell supplies a real one.
///
/// The widget has no node context of its own. Integrators are expected to
/// send `Event::SetNodeId` before the first submit.
pub const PLACEHOLDER_NODE_ID: &str = "nodeId";

/// Payload persisted for a custom alarm node
///
/// `custom_threshold` is always serialized, a missing threshold goes out as
/// `null` rather than being omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfiguration {
    pub device_type: DeviceType,
    #[serde(default)]
    pub custom_threshold: Option<f64>,
}
