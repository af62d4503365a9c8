//! Full-screen preloader overlay.

use gloo_timers::callback::Timeout;
use titan_behavior::config::PreloaderConfig;
use web_sys::{Document, HtmlElement, Window};

use crate::dom::{self, DomError};

/// Fade `preloader` out after `min_display_ms`, removing it from the
/// document once its fade transition ends.
fn dismiss_after(preloader: HtmlElement, min_display_ms: u32) {
    Timeout::new(min_display_ms, move || {
        dom::set_class(&preloader, "hidden", true);
        let removed = preloader.clone();
        if let Err(e) = dom::listen_once(&preloader, "transitionend", move |_| removed.remove()) {
            log::warn!("preloader stays in the DOM: {e}");
        }
    })
    .forget();
}

/// Hide `#preloader` once the page has loaded.
///
/// The module may start after `load` already fired; in that case the
/// countdown starts immediately.
///
/// # Errors
///
/// Returns [`DomError::JsError`] if the `load` listener cannot be attached.
pub fn wire(
    window: &Window,
    document: &Document,
    config: &PreloaderConfig,
) -> Result<(), DomError> {
    let Some(preloader) = dom::by_id(document, "preloader") else {
        log::debug!("no preloader on this page");
        return Ok(());
    };
    let min_display_ms = config.min_display_ms;

    if document.ready_state() == "complete" {
        dismiss_after(preloader, min_display_ms);
        return Ok(());
    }
    let mut pending = Some(preloader);
    dom::listen_once(window, "load", move |_| {
        if let Some(preloader) = pending.take() {
            dismiss_after(preloader, min_display_ms);
        }
    })
}
