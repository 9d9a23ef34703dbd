pub mod audio;
pub mod config;
mod dom;
pub mod error;
mod logging;
pub mod pads;
pub mod render;
pub mod router;
pub mod state;
pub mod types;

pub use dom::DrumMachineHandle;

use config::Config;
use wasm_bindgen::prelude::*;

// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Builds the drum machine inside the page.
///
/// `config` is an optional JSON object, see [`Config`]. The widget attaches
/// to the element with id `root_id`, or to `<body>` when there is none.
#[wasm_bindgen]
pub fn mount(config: Option<String>) -> Result<DrumMachineHandle, JsValue> {
    let config = Config::from_json(config.as_deref().unwrap_or_default())?;
    logging::init(config.level_filter()?);
    Ok(dom::mount(&config)?)
}
