use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Location, ScrollBehavior, ScrollIntoViewOptions, Storage, Window};

pub fn get_window() -> Option<Window> {
    web_sys::window()
}

fn get_document() -> Option<Document> {
    get_window().and_then(|w| w.document())
}

pub fn get_location() -> Option<Location> {
    get_window().map(|w| w.location())
}

pub fn get_pathname() -> String {
    get_location().and_then(|l| l.pathname().ok()).unwrap_or_default()
}

pub fn local_storage() -> Option<Storage> {
    get_window().and_then(|w| w.local_storage().ok()).and_then(|s| s)
}

pub fn set_title(text: &str) {
    if let Some(d) = get_document() {
        d.set_title(text);
    }
}

pub fn get_element_by_id(id: &str) -> Option<Element> {
    get_document().and_then(|d| d.get_element_by_id(id))
}

pub fn get_body() -> Option<HtmlElement> {
    get_document().and_then(|d| d.body())
}

/// Page-body mount point: `#app` when the layout has one, `<body>` otherwise.
pub fn get_mount_point() -> Option<HtmlElement> {
    get_element_by_id("app")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .or_else(get_body)
}

pub fn scroll_into_view(id: &str) {
    if let Some(element) = get_element_by_id(id) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Minutes east of UTC for the browser's zone at the given instant.
pub fn local_offset_minutes(value: &str) -> i32 {
    let offset = js_sys::Date::new(&JsValue::from_str(value)).get_timezone_offset();
    if offset.is_nan() {
        0
    } else {
        -(offset as i32)
    }
}
