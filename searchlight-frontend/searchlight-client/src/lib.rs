use leptos::prelude::*;
use searchlight_app::{SearchBox, SearchConfig};
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;

/// Module entry point. Reads the page's configuration global and mounts the
/// search widget; a page without the global is a startup fault.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let config = match SearchConfig::from_window() {
        Ok(config) => config,
        Err(error) => {
            log::error!("not mounting search: {error}");
            return Err(JsValue::from_str(&error.to_string()));
        }
    };

    log::info!("mounting search against index {}", config.index_name);
    leptos::mount::mount_to_body(move || view! { <SearchBox config/> });
    Ok(())
}
