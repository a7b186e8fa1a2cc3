//! WebAssembly FFI bindings for the widget core
//!
//! The dashboard shell drives the core through these functions: it forwards
//! field changes and the submit action as events, executes the returned HTTP
//! effects and feeds their responses back.

use lazy_static::lazy_static;
use wasm_bindgen::prelude::wasm_bindgen;

use crux_core::{bridge::Bridge, Core};

use crate::logging::{parse_log_level, DEFAULT_LOG_LEVEL};
use crate::App;

lazy_static! {
    static ref CORE: Bridge<App> = Bridge::new(Core::new());
}

/// Initialize the WASM module and set up logging
///
/// The logger accepts every level; filtering happens through the global max
/// level, which starts at `DEFAULT_LOG_LEVEL` and can be changed with
/// `set_log_level`.
#[wasm_bindgen(start)]
pub fn init_wasm() {
    console_log::init_with_level(log::Level::Trace).expect("Failed to initialize logger");
    log::set_max_level(DEFAULT_LOG_LEVEL);
}

/// Change the console log level at runtime
///
/// ```javascript
/// set_log_level(localStorage.getItem('rust_log') ?? 'info');
/// ```
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> Result<(), String> {
    log::set_max_level(parse_log_level(level)?);
    Ok(())
}

/// Process an event from JavaScript
///
/// Takes a bincode-serialized Event and returns bincode-serialized Effects.
#[wasm_bindgen]
pub fn process_event(event_bytes: &[u8]) -> Vec<u8> {
    let mut effects = Vec::new();
    CORE.update(event_bytes, &mut effects)
        .expect("Failed to process event");
    effects
}

/// Get the current view model
///
/// Returns a bincode-serialized ViewModel.
#[wasm_bindgen]
pub fn view() -> Vec<u8> {
    let mut view = Vec::new();
    CORE.view(&mut view).expect("Failed to get view model");
    view
}

/// Handle a response to an effect
///
/// Takes an effect ID and bincode-serialized response data.
/// Returns bincode-serialized Effects that should be processed.
#[wasm_bindgen]
pub fn handle_response(id: u32, response_bytes: &[u8]) -> Vec<u8> {
    let mut effects = Vec::new();
    CORE.resolve(
        crux_core::bridge::EffectId(id),
        response_bytes,
        &mut effects,
    )
    .expect("Failed to handle response");
    effects
}
