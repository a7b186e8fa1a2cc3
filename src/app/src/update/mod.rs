mod widget;

use crux_core::Command;

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        // Field bindings
        Event::SetDeviceType(_) | Event::SetThreshold(_) | Event::SetNodeId(_) => {
            widget::handle_field(event, model)
        }

        // Persistence
        Event::Submit => widget::handle_submit(model),
        Event::SaveConfigResponse(result) => widget::handle_save_config_response(result),
    }
}
