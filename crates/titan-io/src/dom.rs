//! Small helpers over `web-sys` for querying the page and attaching
//! listeners.
//!
//! Listener closures are leaked with [`Closure::forget`]: the page
//! behaviors live as long as the page does and are never detached.

use titan_behavior::input::Key;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, KeyboardEvent,
    NodeList, ScrollBehavior, ScrollToOptions, Window,
};

/// Errors that can occur while wiring a behavior to the page.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),

    /// A browser global (window, document, body) does not exist.
    #[error("no global {0}")]
    Missing(&'static str),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// The global `window`.
///
/// # Errors
///
/// Returns [`DomError::Missing`] outside a browser main thread.
pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::Missing("window"))
}

/// The window's `document`.
///
/// # Errors
///
/// Returns [`DomError::Missing`] if there is no window or document.
pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::Missing("document"))
}

/// Look up an element by `id`, as an `HtmlElement`.
#[must_use]
pub fn by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Every element in `document` matching `selector`.
///
/// # Errors
///
/// Returns [`DomError::JsError`] if `selector` is not valid CSS.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, DomError> {
    Ok(elements(&document.query_selector_all(selector)?))
}

/// Every descendant of `root` matching `selector`.
///
/// # Errors
///
/// Returns [`DomError::JsError`] if `selector` is not valid CSS.
pub fn query_all_within(root: &Element, selector: &str) -> Result<Vec<Element>, DomError> {
    Ok(elements(&root.query_selector_all(selector)?))
}

/// Like [`query_all`], keeping only HTML elements (those with `style`).
///
/// # Errors
///
/// Returns [`DomError::JsError`] if `selector` is not valid CSS.
pub fn query_all_html(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, DomError> {
    Ok(query_all(document, selector)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect())
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Attach `handler` to `event` on `target` for the lifetime of the page.
///
/// # Errors
///
/// Returns [`DomError::JsError`] if the browser rejects the listener.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), DomError> {
    add_listener(target, event, handler, None)
}

/// Like [`listen`], declaring the handler passive (it never calls
/// `preventDefault`), which keeps scrolling smooth.
///
/// # Errors
///
/// Returns [`DomError::JsError`] if the browser rejects the listener.
pub fn listen_passive(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), DomError> {
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    add_listener(target, event, handler, Some(&options))
}

/// Like [`listen`], removing the listener after it fires once.
///
/// # Errors
///
/// Returns [`DomError::JsError`] if the browser rejects the listener.
pub fn listen_once(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), DomError> {
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    add_listener(target, event, handler, Some(&options))
}

fn add_listener(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
    options: Option<&AddEventListenerOptions>,
) -> Result<(), DomError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let callback: &js_sys::Function = closure.as_ref().unchecked_ref();
    match options {
        Some(options) => target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event, callback, options,
            )?,
        None => target.add_event_listener_with_callback(event, callback)?,
    }
    closure.forget(); // leaked: lives for the page lifetime
    Ok(())
}

/// The key of a `keydown` event; [`Key::Other`] for any other event.
#[must_use]
pub fn pressed_key(event: &Event) -> Key {
    event
        .dyn_ref::<KeyboardEvent>()
        .map_or(Key::Other, |event| Key::from_dom(&event.key()))
}

/// Add or remove `class` on `element`.
pub fn set_class(element: &Element, class: &str, on: bool) {
    // Only fails for class names containing whitespace, which we never pass.
    let _ = element.class_list().toggle_with_force(class, on);
}

/// Set an inline style property. Failures (read-only style) are ignored.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

/// Set an attribute to `"true"` or `"false"`, as ARIA expects.
pub fn set_bool_attribute(element: &Element, name: &str, value: bool) {
    let _ = element.set_attribute(name, if value { "true" } else { "false" });
}

/// Current vertical scroll offset, or zero if the browser refuses.
#[must_use]
pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or_default()
}

/// Smoothly scroll the window to document coordinate `top`.
pub fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
