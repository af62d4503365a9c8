//! Statistic counters that count up when scrolled into view.

use std::cell::RefCell;
use std::rc::Rc;

use titan_behavior::config::CounterConfig;
use titan_behavior::counter::CounterSpec;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

use crate::dom::{self, DomError};
use crate::reveal;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Animate `element` from zero to `spec.target` over `duration_ms`,
/// one frame per `requestAnimationFrame`.
pub fn animate(window: &Window, element: Element, spec: CounterSpec, duration_ms: f64) {
    let start = window.performance().map_or(0.0, |p| p.now());

    // The frame closure re-schedules itself, so it has to be reachable
    // from inside its own body.
    let frame: FrameCallback = Rc::new(RefCell::new(None));
    let handle = Rc::clone(&frame);
    let scheduler = window.clone();

    *frame.borrow_mut() = Some(Closure::new(move |now: f64| {
        let tick = spec.frame(now - start, duration_ms);
        element.set_text_content(Some(&tick.text));
        if tick.finished {
            // Drop the closure (and with it the cycle through `handle`).
            let _ = handle.borrow_mut().take();
            return;
        }
        if let Some(next) = handle.borrow().as_ref() {
            let _ = scheduler.request_animation_frame(next.as_ref().unchecked_ref());
        }
    }));

    if let Some(first) = frame.borrow().as_ref() {
        let _ = window.request_animation_frame(first.as_ref().unchecked_ref());
    }
}

/// Start every `.counter-val` the first time it scrolls into view.
///
/// Elements without a numeric `data-target` are left as authored.
///
/// # Errors
///
/// Returns [`DomError::JsError`] if the query or observer setup fails.
pub fn wire(window: &Window, document: &Document, config: &CounterConfig) -> Result<(), DomError> {
    let counters = dom::query_all(document, ".counter-val")?;
    let window = window.clone();
    let duration_ms = config.duration_ms;
    reveal::observe_once(&counters, config.threshold, None, move |element| {
        let spec = CounterSpec::from_data(
            element.get_attribute("data-target").as_deref(),
            element.get_attribute("data-prefix").as_deref(),
            element.get_attribute("data-suffix").as_deref(),
        );
        match spec {
            Some(spec) => animate(&window, element.clone(), spec, duration_ms),
            None => log::debug!("counter without a numeric data-target; skipped"),
        }
    })
}
