//! Small browser interop helpers.

/// Root font size assumed when no computed style is available.
pub const DEFAULT_ROOT_FONT_PX: f64 = 16.0;

/// Root element font size in px, read from the computed style.
fn root_font_px() -> f64 {
    let Some(window) = web_sys::window() else {
        return DEFAULT_ROOT_FONT_PX;
    };
    let Some(root) = window.document().and_then(|d| d.document_element()) else {
        return DEFAULT_ROOT_FONT_PX;
    };
    let Ok(Some(style)) = window.get_computed_style(&root) else {
        return DEFAULT_ROOT_FONT_PX;
    };
    style
        .get_property_value("font-size")
        .ok()
        .and_then(|v| v.trim_end_matches("px").parse().ok())
        .unwrap_or(DEFAULT_ROOT_FONT_PX)
}

/// Convert a rem measure to px against the document's root font size.
pub fn rem_to_px(rem: f64) -> f64 {
    rem * root_font_px()
}

/// Current location pathname, "/" outside a browser.
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}
