//! One-shot visibility triggers on top of `IntersectionObserver`.

use js_sys::Array;
use titan_behavior::config::RevealConfig;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::dom::{self, DomError};

/// Call `on_visible` the first time each of `elements` scrolls into view,
/// then stop watching it.
///
/// # Errors
///
/// Returns [`DomError::JsError`] if the browser has no
/// `IntersectionObserver` or rejects the options.
pub fn observe_once(
    elements: &[Element],
    threshold: f64,
    root_margin: Option<&str>,
    mut on_visible: impl FnMut(&Element) + 'static,
) -> Result<(), DomError> {
    if elements.is_empty() {
        return Ok(());
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    on_visible(&target);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget(); // leaked: the observer outlives this call

    for element in elements {
        observer.observe(element);
    }
    Ok(())
}

/// Add `visible` to every `.reveal` element as it first enters the
/// viewport.
///
/// # Errors
///
/// Returns [`DomError::JsError`] if the query or observer setup fails.
pub fn wire(document: &Document, config: &RevealConfig) -> Result<(), DomError> {
    let elements = dom::query_all(document, ".reveal")?;
    log::debug!("observing {} reveal elements", elements.len());
    observe_once(
        &elements,
        config.threshold,
        Some(&config.root_margin),
        |element| dom::set_class(element, "visible", true),
    )
}
