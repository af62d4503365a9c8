//! WebAssembly entry point for the Titan website.
//!
//! Loaded by every page as an ES module. On instantiation it installs
//! the panic hook and console logger, reads the optional `#siteConfig`
//! overrides, and wires each page behavior. A behavior that fails to
//! wire is logged and skipped so the rest of the page keeps working.

use log::LevelFilter;
use titan_io::{
    DomError, NavbarHighlighter, ProjectFilterBinding, carousel, config, console, counter, dom,
    form, menu, preloader, reveal, scroll,
};
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

const BANNER_TITLE_STYLE: &str = "color:#E8591A;font-size:20px;font-weight:900;";
const BANNER_BODY_STYLE: &str = "color:#2C3E50;font-size:12px;";

fn report(behavior: &str, result: Result<(), DomError>) {
    if let Err(e) = result {
        log::warn!("{behavior} disabled: {e}");
    }
}

fn banner() {
    web_sys::console::log_2(
        &JsValue::from_str("%cTitan Industrial Contractors"),
        &JsValue::from_str(BANNER_TITLE_STYLE),
    );
    web_sys::console::log_2(
        &JsValue::from_str("%cWebsite initialized successfully."),
        &JsValue::from_str(BANNER_BODY_STYLE),
    );
}

/// Called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    // A second instantiation on the same page finds a logger already set.
    let _ = console::init(level);

    let (window, document) = match (dom::window(), dom::document()) {
        (Ok(window), Ok(document)) => (window, document),
        (Err(e), _) | (_, Err(e)) => {
            log::error!("not running in a browser page: {e}");
            return;
        }
    };
    let config = config::load(&document);

    report("preloader", preloader::wire(&window, &document, &config.preloader));
    report(
        "navbar",
        NavbarHighlighter::new(window.clone(), &document, config.navbar.clone())
            .and_then(NavbarHighlighter::wire),
    );
    report("mobile menu", menu::wire(&document));
    report("anchor scrolling", scroll::wire_anchors(&window, &document));
    report("reveal", reveal::wire(&document, &config.reveal));
    report("counters", counter::wire(&window, &document, &config.counter));
    report("carousel", carousel::wire(&document, &config.carousel));
    report(
        "project filter",
        ProjectFilterBinding::new(window.clone(), &document, config.filter.clone())
            .and_then(ProjectFilterBinding::wire),
    );
    report("contact form", form::wire(&document, &config.form));
    report("back to top", scroll::wire_back_to_top(&window, &document, &config.scroll));
    report("parallax", scroll::wire_parallax(&window, &document, &config.scroll));
    report("stagger", scroll::apply_stagger(&document, &config.stagger));

    banner();
    log::info!("Titan website initialized");
}
