pub mod api_client;
pub mod config;
pub mod error;

pub use api_client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;

use lazy_static::lazy_static;
use std::sync::RwLock;
use wasm_bindgen::prelude::*;

lazy_static! {
    static ref API_CONFIG: RwLock<Option<ApiConfig>> = RwLock::new(None);
}

/// Install the build-time configuration unless the host page already set one
/// through `init_api_config_js`.
pub fn init_api_config() {
    if let Ok(mut guard) = API_CONFIG.write() {
        if guard.is_none() {
            *guard = Some(ApiConfig::new());
        }
    }
}

/// Runtime override for deployments that only know the backend URL once the
/// page is served, e.g. `init_api_config_js(window.BACKEND_URL)`.
#[wasm_bindgen]
pub fn init_api_config_js(url: &str) {
    if let Ok(mut guard) = API_CONFIG.write() {
        *guard = Some(ApiConfig::from_url(url));
    }
}

/// Active configuration, or the local development default before start-up
/// has run (headless tests).
pub fn api_config() -> ApiConfig {
    API_CONFIG
        .read()
        .ok()
        .and_then(|guard| guard.clone())
        .unwrap_or_default()
}
