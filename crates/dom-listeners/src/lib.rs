//! DOM Listener Utilities
//!
//! Thin helpers for binding event handlers to server-rendered markup.
//! Closures are leaked on purpose: bindings live as long as the page.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget};

/// Run `f` once the document has been parsed.
///
/// Runs immediately when the document is already past `loading`,
/// otherwise waits for `DOMContentLoaded`.
pub fn on_dom_ready<F>(f: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    let doc = document()?;
    if !is_loading(&doc.ready_state()) {
        f();
        return Ok(());
    }
    let cb = Closure::once_into_js(f);
    doc.add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref())
}

/// `document.readyState` before `DOMContentLoaded` has fired
pub fn is_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Bind `handler` to `event_type` on `target` for the page lifetime
pub fn listen<F>(target: &EventTarget, event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    let result = target.add_event_listener_with_callback(event_type, cb.as_ref().unchecked_ref());
    cb.forget();
    result
}

/// Snapshot of the elements currently carrying `class_name`
pub fn elements_by_class(doc: &Document, class_name: &str) -> Vec<Element> {
    let collection = doc.get_elements_by_class_name(class_name);
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .collect()
}

/// The current document, or an error outside a browser window
pub fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|win| win.document())
        .ok_or_else(|| JsValue::from_str("no document available"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_loading() {
        assert!(is_loading("loading"));
        assert!(!is_loading("interactive"));
        assert!(!is_loading("complete"));
    }
}
