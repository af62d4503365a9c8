//! Project grid filter buttons.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use titan_behavior::config::FilterConfig;
use titan_behavior::filter::ProjectFilter;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::dom::{self, DomError};

/// The `.filter-btn` buttons and the `.project-item`s they filter.
#[derive(Debug)]
pub struct ProjectFilterBinding {
    window: Window,
    buttons: Vec<Element>,
    items: Vec<HtmlElement>,
    config: FilterConfig,
}

impl ProjectFilterBinding {
    /// # Errors
    ///
    /// Returns [`DomError::JsError`] if a selector query fails.
    pub fn new(
        window: Window,
        document: &Document,
        config: FilterConfig,
    ) -> Result<Self, DomError> {
        Ok(Self {
            window,
            buttons: dom::query_all(document, ".filter-btn")?,
            items: dom::query_all_html(document, ".project-item")?,
            config,
        })
    }

    /// Press `selected` and show only the items its filter matches.
    pub fn select(&self, selected: usize) {
        for (index, button) in self.buttons.iter().enumerate() {
            let pressed = index == selected;
            dom::set_class(button, "active", pressed);
            dom::set_bool_attribute(button, "aria-pressed", pressed);
        }

        let Some(button) = self.buttons.get(selected) else {
            return;
        };
        let filter = ProjectFilter::from_data(button.get_attribute("data-filter").as_deref());
        for item in &self.items {
            if filter.matches(item.get_attribute("data-category").as_deref()) {
                dom::set_class(item, "hidden", false);
                self.replay_reveal(item);
            } else {
                dom::set_class(item, "hidden", true);
            }
        }
    }

    /// Restart an item's reveal animation: clear it, then on the next
    /// frame restore it and fade the item back in after a short delay.
    fn replay_reveal(&self, item: &HtmlElement) {
        dom::set_style(item, "animation", "none");
        let item = item.clone();
        let delay = self.config.reveal_delay_ms;
        let next_frame = Closure::once_into_js(move || {
            dom::set_style(&item, "animation", "");
            dom::set_class(&item, "visible", false);
            Timeout::new(delay, move || dom::set_class(&item, "visible", true)).forget();
        });
        let _ = self
            .window
            .request_animation_frame(next_frame.unchecked_ref());
    }

    /// Attach a click handler to every filter button.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::JsError`] if a listener cannot be attached.
    pub fn wire(self) -> Result<(), DomError> {
        if self.buttons.is_empty() {
            log::debug!("no project filter on this page");
            return Ok(());
        }
        let this = Rc::new(self);
        for (index, button) in this.buttons.iter().enumerate() {
            let on_click = Rc::clone(&this);
            dom::listen(button, "click", move |_| on_click.select(index))?;
        }
        Ok(())
    }
}
