//! titan-io: browser bindings for the Titan website.
//!
//! Looks up the page's elements, attaches event listeners and timers,
//! and applies the decisions made by `titan-behavior` back to the DOM.
//! Each behavior has a `wire` function that silently does nothing when
//! its elements are absent, so one module serves every page of the site.

pub mod carousel;
pub mod config;
pub mod console;
pub mod counter;
pub mod dom;
pub mod filter;
pub mod form;
pub mod menu;
pub mod navbar;
pub mod preloader;
pub mod reveal;
pub mod scroll;

pub use carousel::{DomCarouselView, GlooInterval, PageCarousel};
pub use console::ConsoleLogger;
pub use dom::DomError;
pub use filter::ProjectFilterBinding;
pub use form::ContactFormBinding;
pub use menu::MenuBinding;
pub use navbar::NavbarHighlighter;
