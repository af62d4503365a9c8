//! Mobile hamburger menu.

use std::cell::RefCell;
use std::rc::Rc;

use titan_behavior::menu::{MenuChange, MobileMenu};
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, Node};

use crate::dom::{self, DomError};

/// The hamburger toggle, the menu it opens and the page body whose
/// scrolling is locked while the menu is open.
#[derive(Debug)]
pub struct MenuBinding {
    toggle: HtmlElement,
    menu: HtmlElement,
    body: Option<HtmlElement>,
    state: RefCell<MobileMenu>,
}

impl MenuBinding {
    #[must_use]
    pub fn new(toggle: HtmlElement, menu: HtmlElement, body: Option<HtmlElement>) -> Self {
        Self {
            toggle,
            menu,
            body,
            state: RefCell::new(MobileMenu::default()),
        }
    }

    fn apply(&self, change: MenuChange) {
        let open = change.is_open();
        dom::set_class(&self.menu, "open", open);
        dom::set_class(&self.toggle, "open", open);
        dom::set_bool_attribute(&self.toggle, "aria-expanded", open);
        if let Some(body) = &self.body {
            dom::set_style(body, "overflow", change.body_overflow());
        }
        if let MenuChange::Closed {
            refocus_toggle: true,
        } = change
        {
            let _ = self.toggle.focus();
        }
    }

    fn on_toggle(&self) {
        let change = self.state.borrow_mut().toggle();
        self.apply(change);
    }

    fn on_link(&self) {
        let change = self.state.borrow_mut().link_followed();
        self.apply(change);
    }

    fn on_document_click(&self, event: &Event) {
        let inside_menu = event_within(&self.menu, event);
        let inside_toggle = event_within(&self.toggle, event);
        let change = self
            .state
            .borrow_mut()
            .document_clicked(inside_menu, inside_toggle);
        if let Some(change) = change {
            self.apply(change);
        }
    }

    fn on_key(&self, event: &Event) {
        let change = self.state.borrow_mut().key_pressed(dom::pressed_key(event));
        if let Some(change) = change {
            self.apply(change);
        }
    }

    /// Attach toggle, link, outside-click and Escape handling.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::JsError`] if a listener cannot be attached.
    pub fn wire(self, document: &Document) -> Result<(), DomError> {
        let this = Rc::new(self);

        let on_toggle = Rc::clone(&this);
        dom::listen(&this.toggle, "click", move |_| on_toggle.on_toggle())?;

        for link in dom::query_all_within(&this.menu, "a")? {
            let on_link = Rc::clone(&this);
            dom::listen(&link, "click", move |_| on_link.on_link())?;
        }

        let on_click = Rc::clone(&this);
        dom::listen(document, "click", move |event| {
            on_click.on_document_click(&event);
        })?;

        dom::listen(document, "keydown", move |event| this.on_key(&event))
    }
}

/// Whether `event` was dispatched at `element` or one of its descendants.
fn event_within(element: &HtmlElement, event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Node>().ok())
        .is_some_and(|node| element.contains(Some(&node)))
}

/// Bind `#hamburger` to `#navLinks`, if both exist.
///
/// # Errors
///
/// Returns [`DomError::JsError`] if a listener cannot be attached.
pub fn wire(document: &Document) -> Result<(), DomError> {
    let (Some(toggle), Some(menu)) = (
        dom::by_id(document, "hamburger"),
        dom::by_id(document, "navLinks"),
    ) else {
        log::debug!("no mobile menu on this page");
        return Ok(());
    };
    MenuBinding::new(toggle, menu, document.body()).wire(document)
}
