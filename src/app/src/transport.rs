//! Configuration transport
//!
//! Describes the single request that persists a widget configuration. The
//! shell executes the HTTP effect; the command completes after emitting
//! exactly one `Event::SaveConfigResponse`.

use crux_core::Command;
use serde::Serialize;

use crate::events::Event;
use crate::http_helpers::{build_url, process_json_response};
use crate::{Effect, HttpCmd};

const SAVE_CONFIG_ACTION: &str = "Save custom alarm config";

/// Endpoint path for a node's configuration. The node id is embedded as is.
pub fn config_endpoint(node_id: &str) -> String {
    format!("/api/custom-alarm-node/{node_id}/config")
}

/// POST `config` to the node's configuration endpoint.
///
/// Every call yields an independent request; nothing is deduplicated or
/// retried.
pub fn save_config<T: Serialize>(node_id: &str, config: &T) -> Command<Effect, Event> {
    match HttpCmd::post(build_url(&config_endpoint(node_id)))
        .header("Content-Type", "application/json")
        .body_json(config)
    {
        Ok(builder) => builder.build().then_send(|result| {
            Event::SaveConfigResponse(process_json_response(SAVE_CONFIG_ACTION, result))
        }),
        Err(e) => Command::event(Event::SaveConfigResponse(Err(format!(
            "Failed to create {SAVE_CONFIG_ACTION} request: {e}"
        )))),
    }
}
