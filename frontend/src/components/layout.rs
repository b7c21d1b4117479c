//! Application chrome: the header bar and the sidebar navigation.

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::constants::{APP_TITLE, ID_HEADER, ID_SIDEBAR};
use crate::dom_utils::{clear_children, require_element, set_active, set_inactive};
use crate::messages::Message;
use crate::state::{dispatch_global_message, AppState};
use crate::storage::{ActiveView, Route};
use crate::ui_components::{append_text, create_secondary_button, create_text, on_click};

/// Sidebar entries in display order.
pub const NAV_VIEWS: [ActiveView; 4] = [
    ActiveView::Dashboard,
    ActiveView::Evaluation,
    ActiveView::Profile,
    ActiveView::CareerPlan,
];

pub fn render_header(document: &Document, state: &AppState) -> Result<(), JsValue> {
    let header = require_element(document, ID_HEADER)?;
    clear_children(&header);

    append_text(document, &header, "h1", "", APP_TITLE)?;

    let user_info = document.create_element("div")?;
    user_info.set_class_name("user-info");
    if let Some(user) = &state.current_user {
        let label = format!("{} ({})", user.name, user.email);
        append_text(document, &user_info, "span", "user-name", &label)?;
    }

    let logout = create_secondary_button(document, "Logout", false)?;
    logout.set_id("logout-button");
    on_click(&logout, || dispatch_global_message(Message::Logout))?;
    user_info.append_child(&logout)?;

    header.append_child(&user_info)?;
    Ok(())
}

pub fn render_sidebar(document: &Document, state: &AppState) -> Result<(), JsValue> {
    let sidebar = require_element(document, ID_SIDEBAR)?;
    clear_children(&sidebar);

    for view in NAV_VIEWS {
        let link = create_text(document, "a", "nav-link", view.nav_label())?;
        link.set_id(&format!("nav-{}", view.path()));
        link.set_attribute("role", "link")?;
        link.set_attribute("tabindex", "0")?;

        if view == state.route.view {
            set_active(&link);
        } else {
            set_inactive(&link);
        }

        on_click(&link, move || {
            dispatch_global_message(Message::Navigate(Route::new(view)));
        })?;
        sidebar.append_child(&link)?;
    }
    Ok(())
}
