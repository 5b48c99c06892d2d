use serde::{Deserialize, Serialize};

#[cfg(feature = "hydrate")]
use crate::error::{AppError, AppResult};

/// Name of the global the host page assigns its index credentials to.
pub const CONFIG_GLOBAL: &str = "SEARCHLIGHT_CONFIG";

/// Page-provided connection settings for the hosted index, plus the base
/// URL used to turn a hit's relative `url` into an absolute link.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchConfig {
    pub application_id: String,
    pub api_key: String,
    pub index_name: String,
    #[serde(default)]
    pub baseurl: String,
}

#[cfg(feature = "hydrate")]
impl SearchConfig {
    /// Reads `window.SEARCHLIGHT_CONFIG`. The page must assign it before the
    /// widget module loads.
    pub fn from_window() -> AppResult<Self> {
        use wasm_bindgen::JsValue;

        let window = web_sys::window().ok_or(AppError::ConfigMissing(CONFIG_GLOBAL))?;
        let value = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str(CONFIG_GLOBAL))
            .map_err(|_| AppError::ConfigMissing(CONFIG_GLOBAL))?;
        if value.is_undefined() || value.is_null() {
            return Err(AppError::ConfigMissing(CONFIG_GLOBAL));
        }
        serde_wasm_bindgen::from_value(value)
            .map_err(|error| AppError::ConfigInvalid(error.to_string()))
    }
}
