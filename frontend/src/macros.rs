//! Small crate-wide convenience macros.

/// Log a formatted line to the browser console in debug builds.
///
/// The call compiles on every target so reducers stay testable natively, but
/// it only reaches `console.log` on wasm32 debug builds.
///
/// ```rust,ignore
/// debug_log!("Fetched {} questions", questions.len());
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if cfg!(all(debug_assertions, target_arch = "wasm32")) {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
    };
}

/// Quick helper to embed CSS custom-properties (`var(--token)`) in inline
/// styles without sprinkling `format!("var(--{})", token)` everywhere.
///
/// ```rust,ignore
/// let color = css_var!("primary");               // "var(--primary)"
/// let spacing = css_var!(spacing_md);             // "var(--spacing_md)"
/// ```
#[macro_export]
macro_rules! css_var {
    ($name:ident) => {
        format!("var(--{})", stringify!($name))
    };
    ($name:expr) => {
        format!("var(--{})", $name)
    };
}
