use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HashChangeEvent;

#[macro_use]
pub mod macros;

pub mod command_executors;
pub mod components;
pub mod constants;
pub mod dom_utils;
pub mod messages;
pub mod models;
pub mod network;
pub mod pages;
pub mod reducers;
pub mod state;
pub mod storage;
pub mod toast;
pub mod ui;
pub mod ui_components;
pub mod update;
pub mod utils;
pub mod views;

use messages::Message;
use storage::Route;

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    network::init_api_config();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))?;

    // Static skeleton: auth container, header, sidebar, content, toasts
    ui::setup::create_base_ui(&document)?;

    setup_hash_routing(&window)?;

    // Enter whatever route the page was opened on
    dispatch_current_route(&window);

    Ok(())
}

/// Every `hashchange` becomes a `RouteChanged` message; the navigation
/// reducer applies the auth guard.
fn setup_hash_routing(window: &web_sys::Window) -> Result<(), JsValue> {
    let listener_window = window.clone();
    let on_hash_change = Closure::wrap(Box::new(move |_event: HashChangeEvent| {
        dispatch_current_route(&listener_window);
    }) as Box<dyn FnMut(_)>);

    window.add_event_listener_with_callback("hashchange", on_hash_change.as_ref().unchecked_ref())?;
    on_hash_change.forget();
    Ok(())
}

fn dispatch_current_route(window: &web_sys::Window) {
    let hash = window.location().hash().unwrap_or_default();
    debug_log!("Route: {:?}", hash);
    state::dispatch_global_message(Message::RouteChanged {
        route: Route::parse_hash(&hash),
        authenticated: utils::is_logged_in(),
    });
}
