pub mod events;
pub mod http_helpers;
pub mod logging;
pub mod macros;
pub mod model;
pub mod transport;
pub mod types;
pub mod update;

#[cfg(target_arch = "wasm32")]
pub mod wasm;


use crux_core::Command;

// Re-export core types
pub use crate::{
    events::Event,
    http_helpers::{build_url, process_json_response, BASE_URL},
    model::Model,
    transport::{config_endpoint, save_config},
    types::*,
};

#[crux_macros::effect]
pub enum Effect {
    Render(crux_core::render::RenderOperation),
    Http(crux_http::protocol::HttpRequest),
}

pub type HttpCmd = crux_http::command::Http<Effect, Event>;

/// The widget core
#[derive(Default)]
pub struct App;

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = Model;
    type Effect = Effect;

    fn update(&self, event: Self::Event, model: &mut Self::Model) -> Command<Effect, Event> {
        update::update(event, model)
    }

    fn view(&self, model: &Self::Model) -> Self::ViewModel {
        model.clone()
    }
}
