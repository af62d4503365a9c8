//! Scroll-driven effects: smooth anchor links, the back-to-top button,
//! hero parallax and staggered grid transitions.

use titan_behavior::config::{ScrollConfig, StaggerGroup};
use titan_behavior::scroll;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::dom::{self, DomError};

/// Make in-page `#anchor` links scroll smoothly, stopping just below the
/// fixed navbar.
///
/// Links whose target does not exist (or is not a valid selector) keep
/// the browser's default behavior.
///
/// # Errors
///
/// Returns [`DomError::JsError`] if a listener cannot be attached.
pub fn wire_anchors(window: &Window, document: &Document) -> Result<(), DomError> {
    let navbar = dom::by_id(document, "navbar");
    for anchor in dom::query_all(document, "a[href^=\"#\"]")? {
        let window = window.clone();
        let document = document.clone();
        let navbar = navbar.clone();
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |event| {
            let Some(target) = anchor_target(&document, &link) else {
                return;
            };
            event.prevent_default();
            let navbar_height = navbar.as_ref().map_or(0.0, |n| f64::from(n.offset_height()));
            let top = scroll::anchor_scroll_top(
                target.get_bounding_client_rect().top(),
                dom::scroll_y(&window),
                navbar_height,
            );
            dom::smooth_scroll_to(&window, top);
        })?;
    }
    Ok(())
}

fn anchor_target(document: &Document, link: &Element) -> Option<Element> {
    let href = link.get_attribute("href")?;
    document.query_selector(&href).ok().flatten()
}

/// Show `#backToTop` past the configured depth; clicking it returns to
/// the top of the page.
///
/// # Errors
///
/// Returns [`DomError::JsError`] if a listener cannot be attached.
pub fn wire_back_to_top(
    window: &Window,
    document: &Document,
    config: &ScrollConfig,
) -> Result<(), DomError> {
    let Some(button) = dom::by_id(document, "backToTop") else {
        log::debug!("no back-to-top button on this page");
        return Ok(());
    };

    let on_scroll = window.clone();
    let shown = button.clone();
    let config = config.clone();
    dom::listen_passive(window, "scroll", move |_| {
        let visible = scroll::back_to_top_visible(dom::scroll_y(&on_scroll), &config);
        dom::set_class(&shown, "visible", visible);
    })?;

    let on_click = window.clone();
    dom::listen(&button, "click", move |_| dom::smooth_scroll_to(&on_click, 0.0))
}

/// Move `.hero-bg` at a fraction of the scroll speed while the hero is
/// on screen.
///
/// # Errors
///
/// Returns [`DomError::JsError`] if the selector query or listener fails.
pub fn wire_parallax(
    window: &Window,
    document: &Document,
    config: &ScrollConfig,
) -> Result<(), DomError> {
    let Some(hero) = document
        .query_selector(".hero-bg")?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        log::debug!("no hero background on this page");
        return Ok(());
    };

    let on_scroll = window.clone();
    let config = config.clone();
    dom::listen_passive(window, "scroll", move |_| {
        let viewport_height = on_scroll
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or_default();
        if let Some(transform) =
            scroll::parallax_transform(dom::scroll_y(&on_scroll), viewport_height, &config)
        {
            dom::set_style(&hero, "transform", &transform);
        }
    })
}

/// Give each child of every stagger group an increasing
/// `transition-delay`, so revealed grids animate in sequence.
///
/// # Errors
///
/// Returns [`DomError::JsError`] if a group's selector is invalid.
pub fn apply_stagger(document: &Document, groups: &[StaggerGroup]) -> Result<(), DomError> {
    for group in groups {
        for (index, child) in dom::query_all_html(document, &group.selector)?
            .iter()
            .enumerate()
        {
            dom::set_style(
                child,
                "transition-delay",
                &scroll::stagger_delay(index, group.step_secs),
            );
        }
    }
    Ok(())
}
