//! Contact form: validation on submit, live error clearing and the
//! simulated send.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use titan_behavior::config::FormConfig;
use titan_behavior::form::{self, ContactSubmission, Field, FieldError};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement,
};

use crate::dom::{self, DomError};

/// Value of an `<input>` or `<textarea>`; empty for anything else.
fn control_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

/// `#contactForm` with its three fields, their error slots and the
/// `#formSuccess` banner.
#[derive(Debug)]
pub struct ContactFormBinding {
    form: HtmlFormElement,
    document: Document,
    success: Option<HtmlElement>,
    config: FormConfig,
}

impl ContactFormBinding {
    #[must_use]
    pub fn new(form: HtmlFormElement, document: Document, config: FormConfig) -> Self {
        let success = dom::by_id(&document, "formSuccess");
        Self {
            form,
            document,
            success,
            config,
        }
    }

    fn input(&self, field: Field) -> Option<Element> {
        self.document.get_element_by_id(field.input_id())
    }

    fn show_error(&self, field: Field, error: FieldError) {
        if let Some(input) = self.input(field) {
            dom::set_class(&input, "error", true);
        }
        if let Some(slot) = self.document.get_element_by_id(field.error_id()) {
            slot.set_text_content(Some(&error.to_string()));
        }
    }

    fn clear_error(&self, field: Field) {
        if let Some(input) = self.input(field) {
            dom::set_class(&input, "error", false);
        }
        if let Some(slot) = self.document.get_element_by_id(field.error_id()) {
            slot.set_text_content(Some(""));
        }
    }

    fn submission(&self) -> ContactSubmission {
        let value = |field| self.input(field).map(|el| control_value(&el)).unwrap_or_default();
        ContactSubmission {
            name: value(Field::Name),
            email: value(Field::Email),
            message: value(Field::Message),
        }
    }

    /// Validate everything, show each failure, and send if all passed.
    ///
    /// Returns whether the submission was accepted.
    pub fn submit(&self) -> bool {
        for field in Field::ALL {
            self.clear_error(field);
        }
        let errors = self.submission().validate();
        for &(field, error) in &errors {
            self.show_error(field, error);
        }
        if errors.is_empty() {
            self.send();
            true
        } else {
            log::debug!("contact form rejected with {} errors", errors.len());
            false
        }
    }

    /// Simulated send: lock the button, then reset the form and flash
    /// the success banner.
    fn send(&self) {
        let button = self
            .form
            .query_selector("button[type=\"submit\"]")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
        if let Some(button) = &button {
            button.set_text_content(Some(&self.config.sending_label));
            button.set_disabled(true);
        }

        let form = self.form.clone();
        let success = self.success.clone();
        let idle_label = self.config.idle_label.clone();
        let success_visible_ms = self.config.success_visible_ms;
        Timeout::new(self.config.sending_delay_ms, move || {
            form.reset();
            if let Some(button) = &button {
                button.set_text_content(Some(&idle_label));
                button.set_disabled(false);
            }
            if let Some(success) = success {
                dom::set_style(&success, "display", "block");
                Timeout::new(success_visible_ms, move || {
                    dom::set_style(&success, "display", "none");
                })
                .forget();
            }
        })
        .forget();
    }

    /// Attach submit handling and per-field live clearing.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::JsError`] if a listener cannot be attached.
    pub fn wire(self) -> Result<(), DomError> {
        let this = Rc::new(self);

        for field in Field::ALL {
            let Some(input) = this.input(field) else {
                continue;
            };

            let on_blur = Rc::clone(&this);
            let blurred = input.clone();
            dom::listen(&input, "blur", move |_| {
                if form::clears_on_blur(&control_value(&blurred)) {
                    on_blur.clear_error(field);
                }
            })?;

            let on_input = Rc::clone(&this);
            let typed = input.clone();
            dom::listen(&input, "input", move |_| {
                let has_error = typed.class_list().contains("error");
                if form::clears_on_input(has_error, &control_value(&typed)) {
                    on_input.clear_error(field);
                }
            })?;
        }

        let on_submit = Rc::clone(&this);
        dom::listen(&this.form, "submit", move |event| {
            event.prevent_default();
            on_submit.submit();
        })
    }
}

/// Bind `#contactForm`, if the page has one.
///
/// # Errors
///
/// Returns [`DomError::JsError`] if a listener cannot be attached.
pub fn wire(document: &Document, config: &FormConfig) -> Result<(), DomError> {
    let Some(form) = document
        .get_element_by_id("contactForm")
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        log::debug!("no contact form on this page");
        return Ok(());
    };
    ContactFormBinding::new(form, document.clone(), config.clone()).wire()
}
