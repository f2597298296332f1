use wayfinder_shared::config::MapConfig;

/// Id of the optional `<script type="application/json">` element holding a
/// [`MapConfig`] override.
pub const CONFIG_ELEMENT_ID: &str = "wayfinder-config";

/// Show a blocking browser alert.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}

/// Replace an element's children with nothing.
pub fn clear_element(id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    if let Some(element) = element {
        element.set_inner_html("");
    }
}

/// Map configuration embedded in the page, falling back to defaults.
pub fn embedded_config() -> MapConfig {
    let json = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|e| e.text_content());
    MapConfig::from_json_or_default(json.as_deref())
}
