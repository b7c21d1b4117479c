//! Utility helpers shared across the WASM frontend.

use chrono::{DateTime, NaiveDateTime};
use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;
use wasm_bindgen::JsValue;

use crate::storage;

/// Bearer token of the logged-in user, if any.
pub fn current_jwt() -> Option<String> {
    storage::load_token()
}

pub fn is_logged_in() -> bool {
    current_jwt().is_some()
}

/// Scores are shown with one decimal, e.g. `3.7`.
pub fn format_score(score: f64) -> String {
    format!("{:.1}", score)
}

/// Render a backend timestamp (`2024-05-01T10:00:00` with or without offset)
/// as `2024-05-01 10:00`. Unparseable input is returned unchanged.
pub fn format_timestamp(iso: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(iso) {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(iso, fmt).ok())
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| iso.to_string())
}

/// Shorten `label` to at most `max` user-perceived characters, marking the cut
/// with an ellipsis.
pub fn truncate_label(label: &str, max: usize) -> String {
    let graphemes: Vec<&str> = label.graphemes(true).collect();
    if graphemes.len() <= max {
        return label.to_string();
    }
    let keep = max.saturating_sub(1);
    let mut out: String = graphemes[..keep].concat();
    out.push('…');
    out
}

/// Dump a response payload to the console as a real JS object so it can be
/// expanded in devtools.
pub fn log_payload<T: Serialize>(label: &str, payload: &T) {
    if !cfg!(all(debug_assertions, target_arch = "wasm32")) {
        return;
    }
    match serde_wasm_bindgen::to_value(payload) {
        Ok(value) => web_sys::console::log_2(&JsValue::from_str(label), &value),
        Err(e) => web_sys::console::warn_1(&format!("{}: unserialisable payload: {}", label, e).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_have_one_decimal() {
        assert_eq!(format_score(3.0), "3.0");
        assert_eq!(format_score(3.66), "3.7");
    }

    #[test]
    fn timestamps_are_shortened() {
        assert_eq!(format_timestamp("2024-05-01T10:07:42.123456"), "2024-05-01 10:07");
        assert_eq!(format_timestamp("2024-05-01T10:07:42+09:00"), "2024-05-01 10:07");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn labels_are_cut_on_grapheme_boundaries() {
        assert_eq!(truncate_label("Teamwork", 12), "Teamwork");
        assert_eq!(truncate_label("Communication skills", 8), "Communi…");
        assert_eq!(truncate_label("課題解決能力と実行力", 5), "課題解決…");
    }
}
