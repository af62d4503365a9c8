//! Testimonial carousel bound to the page.
//!
//! [`DomCarouselView`] and [`GlooInterval`] implement the
//! `titan-behavior` carousel seams on top of the real DOM and browser
//! timers; [`wire`] finds the carousel markup and routes every input
//! channel into one shared [`Carousel`].

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use gloo_timers::callback::Interval;
use titan_behavior::carousel::{Carousel, CarouselInput, CarouselView, IntervalTimer};
use titan_behavior::config::CarouselConfig;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, TouchEvent};

use crate::dom::{self, DomError};

/// The carousel markup: a track that slides horizontally, one element
/// per slide and one indicator dot per slide.
#[derive(Debug)]
pub struct DomCarouselView {
    track: Option<HtmlElement>,
    slides: Vec<Element>,
    dots: Vec<Element>,
}

impl DomCarouselView {
    #[must_use]
    pub const fn new(
        track: Option<HtmlElement>,
        slides: Vec<Element>,
        dots: Vec<Element>,
    ) -> Self {
        Self {
            track,
            slides,
            dots,
        }
    }
}

impl CarouselView for DomCarouselView {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn dot_count(&self) -> usize {
        self.dots.len()
    }

    fn set_track_offset(&mut self, percent: usize) {
        if let Some(track) = &self.track {
            dom::set_style(track, "transform", &format!("translateX(-{percent}%)"));
        }
    }

    fn set_dot_selected(&mut self, dot: usize, selected: bool) {
        if let Some(dot) = self.dots.get(dot) {
            dom::set_class(dot, "active", selected);
            dom::set_bool_attribute(dot, "aria-selected", selected);
        }
    }

    fn set_slide_hidden(&mut self, slide: usize, hidden: bool) {
        if let Some(slide) = self.slides.get(slide) {
            dom::set_bool_attribute(slide, "aria-hidden", hidden);
        }
    }
}

/// A browser `setInterval` that calls `on_tick` each period.
///
/// Stopping drops the underlying [`Interval`], which clears it
/// immediately.
pub struct GlooInterval {
    on_tick: Rc<dyn Fn()>,
    active: Option<Interval>,
}

impl GlooInterval {
    pub fn new(on_tick: impl Fn() + 'static) -> Self {
        Self {
            on_tick: Rc::new(on_tick),
            active: None,
        }
    }
}

impl std::fmt::Debug for GlooInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlooInterval")
            .field("running", &self.active.is_some())
            .finish_non_exhaustive()
    }
}

impl IntervalTimer for GlooInterval {
    fn start(&mut self, period: Duration) {
        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        let on_tick = Rc::clone(&self.on_tick);
        self.active = Some(Interval::new(millis, move || on_tick()));
    }

    fn stop(&mut self) {
        self.active = None;
    }

    fn is_running(&self) -> bool {
        self.active.is_some()
    }
}

/// The carousel as it runs on the page.
pub type PageCarousel = Carousel<DomCarouselView, GlooInterval>;

type Shared = Rc<RefCell<PageCarousel>>;

/// Feed an input into the shared carousel.
///
/// A carousel that is already borrowed (an input arriving while another
/// is being handled) drops the input rather than panicking.
fn dispatch(carousel: &Shared, input: CarouselInput) -> bool {
    carousel
        .try_borrow_mut()
        .is_ok_and(|mut carousel| carousel.handle(input))
}

fn touch_x(event: &Event, changed: bool) -> Option<f64> {
    let event = event.dyn_ref::<TouchEvent>()?;
    let touches = if changed {
        event.changed_touches()
    } else {
        event.touches()
    };
    touches.get(0).map(|touch| f64::from(touch.client_x()))
}

/// Find the testimonial carousel on the page, attach every input
/// channel and start it.
///
/// Expects `#testimonialTrack`, `.testimonial-slide` slides, `.dot`
/// indicators and optional `#prevBtn`/`#nextBtn` buttons. Hover pauses
/// apply to the track's closest `.testimonial-carousel` ancestor. A page
/// without a track or slides is left untouched.
///
/// # Errors
///
/// Returns [`DomError::JsError`] if a query or listener registration
/// fails.
pub fn wire(document: &Document, config: &CarouselConfig) -> Result<(), DomError> {
    let track = dom::by_id(document, "testimonialTrack");
    let slides = dom::query_all(document, ".testimonial-slide")?;
    let dots = dom::query_all(document, ".dot")?;
    if track.is_none() && slides.is_empty() {
        log::debug!("no testimonial carousel on this page");
        return Ok(());
    }

    let view = DomCarouselView::new(track.clone(), slides, dots.clone());
    let carousel: Shared = Rc::new_cyclic(|weak: &Weak<RefCell<PageCarousel>>| {
        let weak = weak.clone();
        let timer = GlooInterval::new(move || {
            if let Some(carousel) = weak.upgrade() {
                dispatch(&carousel, CarouselInput::Tick);
            }
        });
        RefCell::new(Carousel::new(view, timer, config.clone()))
    });

    for (id, input) in [
        ("prevBtn", CarouselInput::Previous),
        ("nextBtn", CarouselInput::Next),
    ] {
        if let Some(button) = dom::by_id(document, id) {
            let carousel = Rc::clone(&carousel);
            dom::listen(&button, "click", move |_| {
                dispatch(&carousel, input);
            })?;
        }
    }

    for (index, dot) in dots.iter().enumerate() {
        let on_click = Rc::clone(&carousel);
        dom::listen(dot, "click", move |_| {
            dispatch(&on_click, CarouselInput::Dot(index));
        })?;

        let on_key = Rc::clone(&carousel);
        dom::listen(dot, "keydown", move |event| {
            let input = CarouselInput::DotKey {
                dot: index,
                key: dom::pressed_key(&event),
            };
            if dispatch(&on_key, input) {
                event.prevent_default();
            }
        })?;
    }

    if let Some(track) = &track {
        wire_track(track, &carousel)?;
    }

    carousel.borrow_mut().init();
    log::debug!("carousel started with {} slides", carousel.borrow().len());
    Ok(())
}

fn wire_track(track: &HtmlElement, carousel: &Shared) -> Result<(), DomError> {
    let on_touch_start = Rc::clone(carousel);
    dom::listen_passive(track, "touchstart", move |event| {
        if let Some(x) = touch_x(&event, false) {
            dispatch(&on_touch_start, CarouselInput::TouchStart { x });
        }
    })?;

    let on_touch_end = Rc::clone(carousel);
    dom::listen(track, "touchend", move |event| {
        if let Some(x) = touch_x(&event, true) {
            dispatch(&on_touch_end, CarouselInput::TouchEnd { x });
        }
    })?;

    let on_key = Rc::clone(carousel);
    dom::listen(track, "keydown", move |event| {
        dispatch(&on_key, CarouselInput::Key(dom::pressed_key(&event)));
    })?;

    if let Some(area) = track.closest(".testimonial-carousel")? {
        let on_enter = Rc::clone(carousel);
        dom::listen(&area, "mouseenter", move |_| {
            dispatch(&on_enter, CarouselInput::PointerEnter);
        })?;
        let on_leave = Rc::clone(carousel);
        dom::listen(&area, "mouseleave", move |_| {
            dispatch(&on_leave, CarouselInput::PointerLeave);
        })?;
    }
    Ok(())
}
