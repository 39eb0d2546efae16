use valentine_game::games::Point;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};
use yew::NodeRef;

/// The page document, when running in a browser.
#[must_use]
pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Centre of a mounted element's bounding box in viewport pixels.
#[must_use]
pub fn element_center(node: &NodeRef) -> Option<Point> {
    let element = node.cast::<Element>()?;
    let rect = element.get_bounding_client_rect();
    #[allow(clippy::cast_possible_truncation)]
    let center = Point::new(
        (rect.x() + rect.width() / 2.0) as f32,
        (rect.y() + rect.height() / 2.0) as f32,
    );
    Some(center)
}

/// Horizontal position of `client_x` within the element, as a percentage.
#[must_use]
pub fn percent_across(node: &NodeRef, client_x: i32) -> Option<f32> {
    let element = node.cast::<Element>()?;
    let rect = element.get_bounding_client_rect();
    if rect.width() <= 0.0 {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    let pct = ((f64::from(client_x) - rect.left()) / rect.width() * 100.0) as f32;
    Some(pct)
}
