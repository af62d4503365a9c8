//! Testimonial carousel state machine.
//!
//! [`Carousel`] owns the current slide index and the autoplay timer.
//! It never touches the DOM directly: everything visible goes through
//! an injected [`CarouselView`] and all scheduling through an injected
//! [`IntervalTimer`]. The browser crate supplies real implementations;
//! tests supply recording fakes and a simulated clock.
//!
//! Every user-initiated navigation runs stop autoplay → go to slide →
//! start autoplay, so an autoplay tick can never land on top of a
//! manual transition.

use std::time::Duration;

use crate::config::CarouselConfig;
use crate::input::Key;

/// The visible side of the carousel.
///
/// Implementations must tolerate missing elements: an absent track or
/// an out-of-range dot/slide turns the call into a no-op.
pub trait CarouselView {
    /// Number of slides. Read once when the carousel is built.
    fn slide_count(&self) -> usize;

    /// Number of indicator dots.
    fn dot_count(&self) -> usize;

    /// Shift the track so that it is `percent`% of its width to the left.
    fn set_track_offset(&mut self, percent: usize);

    /// Mark dot `dot` as the current one (`active` + `aria-selected`) or not.
    fn set_dot_selected(&mut self, dot: usize, selected: bool);

    /// Hide slide `slide` from assistive technology, or expose it.
    fn set_slide_hidden(&mut self, slide: usize, hidden: bool);
}

/// A cancellable recurring timer.
///
/// The owner of the timer decides what a tick does; the browser
/// implementation feeds [`CarouselInput::Tick`] back into the carousel.
pub trait IntervalTimer {
    /// Begin ticking every `period`.
    fn start(&mut self, period: Duration);

    /// Cancel any pending ticks. No-op when not running.
    fn stop(&mut self);

    /// Whether a tick is currently scheduled.
    fn is_running(&self) -> bool;
}

/// Everything that can drive the carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselInput {
    /// Previous button clicked.
    Previous,
    /// Next button clicked.
    Next,
    /// Indicator dot clicked.
    Dot(usize),
    /// Key pressed while an indicator dot has focus.
    DotKey { dot: usize, key: Key },
    /// Key pressed while the track has focus.
    Key(Key),
    /// A touch began on the track at horizontal position `x`.
    TouchStart { x: f64 },
    /// A touch ended at horizontal position `x`.
    TouchEnd { x: f64 },
    /// Pointer entered the carousel area.
    PointerEnter,
    /// Pointer left the carousel area.
    PointerLeave,
    /// The autoplay timer fired.
    Tick,
}

/// Normalize `index` into `[0, len)`, wrapping in both directions.
///
/// Returns `None` when `len` is zero.
#[must_use]
pub fn wrap_index(index: i64, len: usize) -> Option<usize> {
    let len = i64::try_from(len).ok().filter(|&n| n > 0)?;
    usize::try_from(index.rem_euclid(len)).ok()
}

/// Carousel controller over an injected view and timer.
#[derive(Debug)]
pub struct Carousel<V, T> {
    view: V,
    timer: T,
    config: CarouselConfig,
    len: usize,
    current: usize,
    touch_start_x: Option<f64>,
}

impl<V: CarouselView, T: IntervalTimer> Carousel<V, T> {
    /// Build a carousel. Does not render or start autoplay; call
    /// [`init`](Self::init) for that.
    pub fn new(view: V, timer: T, config: CarouselConfig) -> Self {
        let len = view.slide_count();
        if len == 0 {
            log::debug!("carousel has no slides; navigation disabled");
        }
        Self {
            view,
            timer,
            config,
            len,
            current: 0,
            touch_start_x: None,
        }
    }

    /// Show the first slide and start autoplay.
    pub fn init(&mut self) {
        self.go_to_slide(0);
        self.start_autoplay();
    }

    /// Index of the slide currently shown.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Number of slides.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn is_autoplaying(&self) -> bool {
        self.timer.is_running()
    }

    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    #[must_use]
    pub const fn timer(&self) -> &T {
        &self.timer
    }

    /// Show slide `index`, wrapped into range.
    ///
    /// Updates the track offset, every dot and every slide so that
    /// exactly one of each reflects the new index.
    pub fn go_to_slide(&mut self, index: i64) {
        let Some(current) = wrap_index(index, self.len) else {
            return;
        };
        self.current = current;

        self.view.set_track_offset(current.saturating_mul(100));
        for dot in 0..self.view.dot_count() {
            self.view.set_dot_selected(dot, dot == current);
        }
        for slide in 0..self.len {
            self.view.set_slide_hidden(slide, slide != current);
        }
    }

    /// Start advancing one slide per configured interval.
    ///
    /// A timer that is already running is stopped first, so at most one
    /// is ever active.
    pub fn start_autoplay(&mut self) {
        if self.len == 0 {
            return;
        }
        if self.timer.is_running() {
            self.timer.stop();
        }
        self.timer.start(self.config.autoplay_interval());
    }

    /// Cancel autoplay. Safe to call repeatedly.
    pub fn stop_autoplay(&mut self) {
        self.timer.stop();
    }

    /// User-initiated navigation: stop autoplay, show `index`, restart.
    pub fn navigate(&mut self, index: i64) {
        self.stop_autoplay();
        self.go_to_slide(index);
        self.start_autoplay();
    }

    /// Feed one input into the carousel.
    ///
    /// Returns `true` when the input was acted on, which the caller uses
    /// to suppress the browser default (e.g. Space scrolling the page).
    pub fn handle(&mut self, input: CarouselInput) -> bool {
        match input {
            CarouselInput::Previous => self.navigate(self.relative(-1)),
            CarouselInput::Next => self.navigate(self.relative(1)),
            CarouselInput::Dot(dot) => self.navigate_to_dot(dot),
            CarouselInput::DotKey { dot, key } if key.is_activation() => {
                self.navigate_to_dot(dot);
            }
            CarouselInput::Key(Key::ArrowLeft) => self.navigate(self.relative(-1)),
            CarouselInput::Key(Key::ArrowRight) => self.navigate(self.relative(1)),
            CarouselInput::DotKey { .. } | CarouselInput::Key(_) => return false,
            CarouselInput::TouchStart { x } => self.touch_start_x = Some(x),
            CarouselInput::TouchEnd { x } => return self.finish_swipe(x),
            CarouselInput::PointerEnter => self.stop_autoplay(),
            CarouselInput::PointerLeave => self.start_autoplay(),
            CarouselInput::Tick => self.go_to_slide(self.relative(1)),
        }
        true
    }

    fn navigate_to_dot(&mut self, dot: usize) {
        if let Ok(index) = i64::try_from(dot) {
            self.navigate(index);
        }
    }

    fn finish_swipe(&mut self, end_x: f64) -> bool {
        let Some(start_x) = self.touch_start_x.take() else {
            return false;
        };
        let diff = start_x - end_x;
        if diff.abs() <= self.config.swipe_threshold_px {
            return false;
        }
        let step = if diff > 0.0 { 1 } else { -1 };
        self.navigate(self.relative(step));
        true
    }

    fn relative(&self, delta: i64) -> i64 {
        i64::try_from(self.current)
            .unwrap_or_default()
            .saturating_add(delta)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug, Default)]
    struct RecordingView {
        offset: Option<usize>,
        dots: Vec<bool>,
        hidden: Vec<bool>,
    }

    impl RecordingView {
        fn new(slides: usize, dots: usize) -> Self {
            Self {
                offset: None,
                dots: vec![false; dots],
                hidden: vec![false; slides],
            }
        }
    }

    impl CarouselView for RecordingView {
        fn slide_count(&self) -> usize {
            self.hidden.len()
        }

        fn dot_count(&self) -> usize {
            self.dots.len()
        }

        fn set_track_offset(&mut self, percent: usize) {
            self.offset = Some(percent);
        }

        fn set_dot_selected(&mut self, dot: usize, selected: bool) {
            self.dots[dot] = selected;
        }

        fn set_slide_hidden(&mut self, slide: usize, hidden: bool) {
            self.hidden[slide] = hidden;
        }
    }

    #[derive(Debug, Default)]
    struct CountingTimer {
        period: Option<Duration>,
        starts: u32,
        stops: u32,
    }

    impl IntervalTimer for CountingTimer {
        fn start(&mut self, period: Duration) {
            self.period = Some(period);
            self.starts += 1;
        }

        fn stop(&mut self) {
            self.period = None;
            self.stops += 1;
        }

        fn is_running(&self) -> bool {
            self.period.is_some()
        }
    }

    fn carousel(slides: usize) -> Carousel<RecordingView, CountingTimer> {
        Carousel::new(
            RecordingView::new(slides, slides),
            CountingTimer::default(),
            CarouselConfig::default(),
        )
    }

    #[test]
    fn wrap_index_handles_negative_and_large() {
        assert_eq!(wrap_index(-1, 3), Some(2));
        assert_eq!(wrap_index(-4, 3), Some(2));
        assert_eq!(wrap_index(5, 3), Some(2));
        assert_eq!(wrap_index(3, 3), Some(0));
        assert_eq!(wrap_index(i64::MIN, 3), Some(1));
    }

    #[test]
    fn wrap_index_with_no_slides_is_none() {
        assert_eq!(wrap_index(0, 0), None);
        assert_eq!(wrap_index(7, 0), None);
    }

    #[test]
    fn go_to_slide_updates_track_dots_and_slides() {
        let mut c = carousel(3);
        c.go_to_slide(2);

        assert_eq!(c.current(), 2);
        assert_eq!(c.view().offset, Some(200));
        assert_eq!(c.view().dots, vec![false, false, true]);
        assert_eq!(c.view().hidden, vec![true, true, false]);
    }

    #[test]
    fn go_to_slide_is_idempotent() {
        let mut c = carousel(4);
        c.go_to_slide(5);
        c.go_to_slide(1);
        assert_eq!(c.current(), 1);
        assert_eq!(c.view().dots, vec![false, true, false, false]);
    }

    #[test]
    fn empty_carousel_ignores_everything() {
        let mut c = carousel(0);
        c.init();
        assert!(c.handle(CarouselInput::Next));
        assert_eq!(c.current(), 0);
        assert_eq!(c.view().offset, None);
        assert!(!c.is_autoplaying());
    }

    #[test]
    fn init_shows_first_slide_and_starts_autoplay() {
        let mut c = carousel(3);
        c.init();
        assert_eq!(c.view().hidden, vec![false, true, true]);
        assert_eq!(c.timer().period, Some(Duration::from_millis(5500)));
    }

    #[test]
    fn start_autoplay_replaces_running_timer() {
        let mut c = carousel(3);
        c.start_autoplay();
        c.start_autoplay();
        assert_eq!(c.timer().starts, 2);
        assert_eq!(c.timer().stops, 1);
        assert!(c.is_autoplaying());
    }

    #[test]
    fn manual_navigation_restarts_timer() {
        let mut c = carousel(3);
        c.init();
        c.handle(CarouselInput::Next);
        assert_eq!(c.current(), 1);
        assert_eq!(c.timer().starts, 2);
        assert!(c.is_autoplaying());
    }

    #[test]
    fn more_dots_than_slides_only_selects_matching_dot() {
        let mut c = Carousel::new(
            RecordingView::new(2, 3),
            CountingTimer::default(),
            CarouselConfig::default(),
        );
        c.go_to_slide(1);
        assert_eq!(c.view().dots, vec![false, true, false]);
    }

    #[test]
    fn dot_key_other_than_enter_or_space_is_ignored() {
        let mut c = carousel(3);
        c.init();
        let handled = c.handle(CarouselInput::DotKey {
            dot: 2,
            key: Key::Other,
        });
        assert!(!handled);
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn touch_end_without_start_is_ignored() {
        let mut c = carousel(3);
        assert!(!c.handle(CarouselInput::TouchEnd { x: 500.0 }));
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn hover_pauses_and_resumes_without_navigating() {
        let mut c = carousel(3);
        c.init();
        c.handle(CarouselInput::PointerEnter);
        assert!(!c.is_autoplaying());
        c.handle(CarouselInput::PointerLeave);
        assert!(c.is_autoplaying());
        assert_eq!(c.current(), 0);
    }
}
