//! Sticky navbar: opaque background once scrolled, and highlighting of
//! the link for the section currently in view.

use std::rc::Rc;

use titan_behavior::config::NavbarConfig;
use titan_behavior::navbar::{NavbarState, Section};
use web_sys::{Document, Element, HtmlElement, Window};

use crate::dom::{self, DomError};

/// Keeps `#navbar` and its `.nav-link`s in sync with the scroll position.
#[derive(Debug)]
pub struct NavbarHighlighter {
    window: Window,
    navbar: Option<HtmlElement>,
    links: Vec<Element>,
    sections: Vec<HtmlElement>,
    config: NavbarConfig,
}

impl NavbarHighlighter {
    /// # Errors
    ///
    /// Returns [`DomError::JsError`] if a selector query fails.
    pub fn new(
        window: Window,
        document: &Document,
        config: NavbarConfig,
    ) -> Result<Self, DomError> {
        Ok(Self {
            window,
            navbar: dom::by_id(document, "navbar"),
            links: dom::query_all(document, ".nav-link")?,
            sections: dom::query_all_html(document, "section[id]")?,
            config,
        })
    }

    /// Recompute and apply the navbar state.
    pub fn update(&self) {
        // Section positions shift as images load, so read them each time.
        let ids: Vec<(String, f64)> = self
            .sections
            .iter()
            .map(|s| (s.id(), f64::from(s.offset_top())))
            .collect();
        let sections: Vec<Section<'_>> = ids
            .iter()
            .map(|(id, offset_top)| Section {
                id,
                offset_top: *offset_top,
            })
            .collect();

        let state = NavbarState::at(dom::scroll_y(&self.window), &sections, &self.config);

        if let Some(navbar) = &self.navbar {
            dom::set_class(navbar, "scrolled", state.scrolled);
        }
        for link in &self.links {
            let href = link.get_attribute("href");
            dom::set_class(link, "active", state.is_link_active(href.as_deref()));
        }
    }

    /// Apply once now and again on every scroll.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::JsError`] if the scroll listener cannot be
    /// attached.
    pub fn wire(self) -> Result<(), DomError> {
        let this = Rc::new(self);
        this.update();
        let window = this.window.clone();
        dom::listen_passive(&window, "scroll", move |_| this.update())
    }
}
