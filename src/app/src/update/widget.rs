use crux_core::Command;
use log::{error, info, warn};

use crate::events::Event;
use crate::model::Model;
use crate::transport;
use crate::update_field;
use crate::Effect;

/// Handle field bindings from the presentation layer
pub fn handle_field(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::SetDeviceType(device_type) => update_field!(model.device_type, device_type),
        Event::SetThreshold(threshold) => update_field!(model.threshold, threshold),
        Event::SetNodeId(node_id) => update_field!(model.node_id, node_id),
        _ => unreachable!("Non-field event passed to field handler"),
    }
}

/// Persist the current configuration
///
/// Fields are read once here; later edits do not affect the request in flight.
pub fn handle_submit(model: &Model) -> Command<Effect, Event> {
    let config = model.configuration();

    info!("Saving custom alarm configuration: {config:?}");

    if model.has_placeholder_node_id() {
        warn!(
            "submitting to placeholder node id '{}', no node id was provided",
            model.node_id
        );
    }

    transport::save_config(&model.node_id, &config)
}

/// Report the outcome of a save. The model is left untouched either way.
pub fn handle_save_config_response(
    result: Result<serde_json::Value, String>,
) -> Command<Effect, Event> {
    match result {
        Ok(response) => info!("Settings saved successfully: {response}"),
        Err(e) => error!("Error saving settings: {e}"),
    }

    Command::done()
}
