//! titan-behavior: page behaviors for the Titan website (sans-IO).
//!
//! Every interactive affordance of the site as plain state and pure
//! functions: the testimonial carousel, navbar highlighting, the mobile
//! menu, animated counters, the project filter, contact form validation
//! and scroll-derived effects.
//!
//! This crate has **no browser dependencies**. The carousel reaches the
//! page only through the [`CarouselView`] and [`IntervalTimer`] traits;
//! everything else returns values for the caller to apply. All DOM
//! interaction lives in `titan-io`.

pub mod carousel;
pub mod config;
pub mod counter;
pub mod filter;
pub mod form;
pub mod input;
pub mod menu;
pub mod navbar;
pub mod scroll;

pub use carousel::{Carousel, CarouselInput, CarouselView, IntervalTimer};
pub use config::{ConfigError, SiteConfig};
pub use counter::{CounterFrame, CounterSpec};
pub use filter::ProjectFilter;
pub use form::{ContactSubmission, Field, FieldError};
pub use input::Key;
pub use menu::{MenuChange, MobileMenu};
pub use navbar::{NavbarState, Section};
