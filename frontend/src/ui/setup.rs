use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::constants::{
    APP_TITLE, ID_APP_ROOT, ID_APP_STYLES, ID_AUTH_CONTAINER, ID_CONTENT, ID_HEADER, ID_SHELL,
    ID_SIDEBAR, ID_TOAST_ROOT,
};

/// Build the static skeleton every page renders into:
///
/// ```text
/// #app-root
///   #auth-container          (login / register)
///   #app-shell
///     header#header
///     div.shell-body
///       nav#sidebar
///       main#content
/// #toast-root
/// ```
pub fn create_base_ui(document: &Document) -> Result<(), JsValue> {
    inject_styles(document)?;
    document.set_title(APP_TITLE);

    let body = document.body().ok_or(JsValue::from_str("No body found"))?;

    // Idempotent so a hot reload does not stack a second shell.
    if document.get_element_by_id(ID_APP_ROOT).is_some() {
        return Ok(());
    }

    let root = document.create_element("div")?;
    root.set_id(ID_APP_ROOT);

    let auth = document.create_element("div")?;
    auth.set_id(ID_AUTH_CONTAINER);
    auth.set_class_name("auth-container hidden");
    root.append_child(&auth)?;

    let shell = document.create_element("div")?;
    shell.set_id(ID_SHELL);
    shell.set_class_name("app-shell hidden");

    let header = document.create_element("header")?;
    header.set_id(ID_HEADER);
    header.set_class_name("header");
    shell.append_child(&header)?;

    let shell_body = document.create_element("div")?;
    shell_body.set_class_name("shell-body");

    let sidebar = document.create_element("nav")?;
    sidebar.set_id(ID_SIDEBAR);
    sidebar.set_class_name("sidebar");
    sidebar.set_attribute("aria-label", "Main navigation")?;
    shell_body.append_child(&sidebar)?;

    let content = document.create_element("main")?;
    content.set_id(ID_CONTENT);
    content.set_class_name("content");
    shell_body.append_child(&content)?;

    shell.append_child(&shell_body)?;
    root.append_child(&shell)?;
    body.append_child(&root)?;

    let toasts = document.create_element("div")?;
    toasts.set_id(ID_TOAST_ROOT);
    toasts.set_class_name("toast-root");
    toasts.set_attribute("aria-live", "polite")?;
    body.append_child(&toasts)?;

    Ok(())
}

fn inject_styles(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id(ID_APP_STYLES).is_some() {
        return Ok(());
    }
    let style = document.create_element("style")?;
    style.set_id(ID_APP_STYLES);
    style.set_text_content(Some(APP_CSS));
    document
        .head()
        .ok_or(JsValue::from_str("No head found"))?
        .append_child(&style)?;
    Ok(())
}

const APP_CSS: &str = r#"
:root {
  --primary: #3b82f6;
  --primary-dark: #2563eb;
  --danger: #ef4444;
  --success: #10b981;
  --muted: #6b7280;
  --border: #e5e7eb;
  --surface: #ffffff;
  --background: #f3f4f6;
}
body { margin: 0; font-family: system-ui, sans-serif; background: var(--background); color: #111827; }
.hidden { display: none !important; }
.visible { display: block; }
.app-shell.visible { display: flex; flex-direction: column; min-height: 100vh; }
.header { display: flex; align-items: center; justify-content: space-between; padding: 0 24px; height: 56px; background: var(--surface); border-bottom: 1px solid var(--border); }
.header h1 { font-size: 18px; margin: 0; }
.header .user-info { display: flex; align-items: center; gap: 12px; color: var(--muted); }
.shell-body { display: flex; flex: 1; }
.sidebar { width: 200px; background: var(--surface); border-right: 1px solid var(--border); padding: 16px 0; }
.sidebar a { display: block; padding: 10px 24px; color: #374151; text-decoration: none; cursor: pointer; }
.sidebar a.active { background: #eff6ff; color: var(--primary-dark); font-weight: 600; border-right: 3px solid var(--primary); }
.content { flex: 1; padding: 24px; max-width: 960px; }
.auth-container.visible { display: flex; justify-content: center; align-items: center; min-height: 100vh; }
.auth-card { width: 360px; }
.card { background: var(--surface); border: 1px solid var(--border); border-radius: 8px; padding: 20px; margin-bottom: 16px; }
.card-title { margin-top: 0; font-size: 16px; }
.summary-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; }
.summary-value { font-size: 28px; font-weight: 700; }
.form-row { display: flex; flex-direction: column; gap: 4px; margin-bottom: 12px; }
.form-control { padding: 8px; border: 1px solid var(--border); border-radius: 4px; font: inherit; }
.actions-row { display: flex; gap: 8px; margin-top: 12px; }
.btn { padding: 8px 16px; border-radius: 4px; border: 1px solid var(--border); background: var(--surface); cursor: pointer; }
.btn[disabled] { opacity: 0.5; cursor: not-allowed; }
.btn-primary { background: var(--primary); border-color: var(--primary); color: white; }
.btn-outline { background: transparent; }
.btn-danger { background: var(--danger); border-color: var(--danger); color: white; }
.error { color: var(--danger); }
.notice { color: var(--success); }
.muted { color: var(--muted); }
.loading { display: flex; flex-direction: column; align-items: center; padding: 48px 0; }
.spinner { width: 32px; height: 32px; border: 3px solid var(--border); border-top-color: var(--primary); border-radius: 50%; animation: spin 1s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
.progress { height: 8px; background: var(--border); border-radius: 4px; overflow: hidden; }
.progress-bar { height: 100%; }
.score-options { display: flex; flex-direction: column; gap: 8px; margin: 16px 0; }
.score-option { text-align: left; }
.score-option.selected { background: #eff6ff; border-color: var(--primary); }
.feedback-section { margin-bottom: 16px; white-space: pre-wrap; }
.feedback-section h4 { margin: 0 0 4px; }
.field-value { white-space: pre-wrap; margin: 0 0 12px; }
.toast-root { position: fixed; top: 16px; right: 16px; display: flex; flex-direction: column; gap: 8px; z-index: 1000; }
.toast { padding: 10px 16px; border-radius: 4px; color: white; box-shadow: 0 2px 6px rgba(0,0,0,0.2); }
.toast-success { background: var(--success); }
.toast-error { background: var(--danger); }
.toast-info { background: var(--primary); }
"#;
