//! Carousel scenarios driven by a simulated clock.
//!
//! The clock models a browser interval: starting it schedules the first
//! tick one period later, stopping it drops every pending tick.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use titan_behavior::carousel::{Carousel, CarouselInput, CarouselView, IntervalTimer};
use titan_behavior::config::CarouselConfig;
use titan_behavior::input::Key;

#[derive(Debug, Default)]
struct ClockState {
    now_ms: u64,
    period_ms: u64,
    next_due_ms: Option<u64>,
}

#[derive(Debug, Clone, Default)]
struct SimClock(Rc<RefCell<ClockState>>);

impl SimClock {
    fn timer(&self) -> SimTimer {
        SimTimer(self.clone())
    }

    fn has_pending_tick(&self) -> bool {
        self.0.borrow().next_due_ms.is_some()
    }

    /// Move time forward, delivering every tick that falls due.
    fn advance(&self, carousel: &mut PageCarousel, ms: u64) {
        let target = self.0.borrow().now_ms + ms;
        loop {
            let due = {
                let state = self.0.borrow();
                match state.next_due_ms {
                    Some(due) if due <= target => due,
                    _ => break,
                }
            };
            {
                let mut state = self.0.borrow_mut();
                state.now_ms = due;
                state.next_due_ms = Some(due + state.period_ms);
            }
            carousel.handle(CarouselInput::Tick);
        }
        self.0.borrow_mut().now_ms = target;
    }
}

#[derive(Debug)]
struct SimTimer(SimClock);

impl IntervalTimer for SimTimer {
    fn start(&mut self, period: Duration) {
        let mut state = self.0.0.borrow_mut();
        state.period_ms = u64::try_from(period.as_millis()).unwrap();
        state.next_due_ms = Some(state.now_ms + state.period_ms);
    }

    fn stop(&mut self) {
        self.0.0.borrow_mut().next_due_ms = None;
    }

    fn is_running(&self) -> bool {
        self.0.has_pending_tick()
    }
}

/// A page fragment: track offset, `active`/`aria-selected` per dot and
/// `aria-hidden` per slide.
#[derive(Debug)]
struct PageView {
    track_offset: Option<usize>,
    dots: Vec<bool>,
    hidden: Vec<bool>,
    changes: Vec<usize>,
}

impl PageView {
    fn with_slides(n: usize) -> Self {
        Self {
            track_offset: None,
            dots: vec![false; n],
            hidden: vec![true; n],
            changes: Vec::new(),
        }
    }

    fn visible_slides(&self) -> Vec<usize> {
        (0..self.hidden.len()).filter(|&i| !self.hidden[i]).collect()
    }

    fn selected_dots(&self) -> Vec<usize> {
        (0..self.dots.len()).filter(|&i| self.dots[i]).collect()
    }
}

impl CarouselView for PageView {
    fn slide_count(&self) -> usize {
        self.hidden.len()
    }

    fn dot_count(&self) -> usize {
        self.dots.len()
    }

    fn set_track_offset(&mut self, percent: usize) {
        self.track_offset = Some(percent);
        self.changes.push(percent / 100);
    }

    fn set_dot_selected(&mut self, dot: usize, selected: bool) {
        self.dots[dot] = selected;
    }

    fn set_slide_hidden(&mut self, slide: usize, hidden: bool) {
        self.hidden[slide] = hidden;
    }
}

type PageCarousel = Carousel<PageView, SimTimer>;

fn started(slides: usize) -> (PageCarousel, SimClock) {
    let clock = SimClock::default();
    let mut carousel = Carousel::new(
        PageView::with_slides(slides),
        clock.timer(),
        CarouselConfig::default(),
    );
    carousel.init();
    (carousel, clock)
}

#[test]
fn three_slides_wrap_in_both_directions() {
    let (mut carousel, _clock) = started(3);
    assert_eq!(carousel.current(), 0);

    carousel.go_to_slide(-1);
    assert_eq!(carousel.current(), 2);

    carousel.go_to_slide(5);
    assert_eq!(carousel.current(), 2);

    carousel.go_to_slide(3);
    assert_eq!(carousel.current(), 0);
}

#[test]
fn every_integer_maps_to_euclidean_remainder() {
    let (mut carousel, _clock) = started(4);
    for index in -13_i64..=13 {
        carousel.go_to_slide(index);
        let expected = usize::try_from(((index % 4) + 4) % 4).unwrap();
        assert_eq!(carousel.current(), expected, "index {index}");
        assert_eq!(carousel.view().track_offset, Some(expected * 100));
    }
}

#[test]
fn exactly_one_slide_and_dot_after_mixed_inputs() {
    let (mut carousel, clock) = started(5);
    let inputs = [
        CarouselInput::Next,
        CarouselInput::Dot(3),
        CarouselInput::Previous,
        CarouselInput::Key(Key::ArrowLeft),
        CarouselInput::DotKey {
            dot: 4,
            key: Key::Space,
        },
        CarouselInput::TouchStart { x: 300.0 },
        CarouselInput::TouchEnd { x: 100.0 },
        CarouselInput::Key(Key::ArrowRight),
    ];
    for input in inputs {
        carousel.handle(input);
        clock.advance(&mut carousel, 2000);

        let current = carousel.current();
        assert_eq!(carousel.view().visible_slides(), vec![current]);
        assert_eq!(carousel.view().selected_dots(), vec![current]);
    }
}

#[test]
fn repeated_stop_leaves_nothing_pending() {
    let (mut carousel, clock) = started(3);
    carousel.stop_autoplay();
    carousel.stop_autoplay();
    carousel.stop_autoplay();

    assert!(!clock.has_pending_tick());
    clock.advance(&mut carousel, 60_000);
    assert_eq!(carousel.current(), 0);
}

#[test]
fn one_period_advances_exactly_one_slide() {
    let (mut carousel, clock) = started(3);

    clock.advance(&mut carousel, 5499);
    assert_eq!(carousel.current(), 0);

    clock.advance(&mut carousel, 1);
    assert_eq!(carousel.current(), 1);

    clock.advance(&mut carousel, 5500 * 2);
    assert_eq!(carousel.current(), 0);
}

fn assert_single_advance(input: &[CarouselInput], expected: usize) {
    let (mut carousel, clock) = started(4);
    clock.advance(&mut carousel, 5000);
    let before = carousel.view().changes.len();

    for &event in input {
        carousel.handle(event);
    }
    assert_eq!(carousel.current(), expected, "after {input:?}");
    assert_eq!(carousel.view().changes.len(), before + 1, "after {input:?}");

    // The timer restarted with the manual navigation, so nothing fires
    // at the originally scheduled 5500 ms mark.
    clock.advance(&mut carousel, 5499);
    assert_eq!(carousel.current(), expected, "tick raced {input:?}");

    clock.advance(&mut carousel, 1);
    assert_eq!(carousel.current(), (expected + 1) % 4);
}

#[test]
fn no_double_advance_from_any_channel() {
    assert_single_advance(&[CarouselInput::Next], 1);
    assert_single_advance(&[CarouselInput::Previous], 3);
    assert_single_advance(&[CarouselInput::Dot(2)], 2);
    assert_single_advance(
        &[CarouselInput::DotKey {
            dot: 2,
            key: Key::Enter,
        }],
        2,
    );
    assert_single_advance(&[CarouselInput::Key(Key::ArrowRight)], 1);
    assert_single_advance(&[CarouselInput::Key(Key::ArrowLeft)], 3);
    assert_single_advance(
        &[
            CarouselInput::TouchStart { x: 200.0 },
            CarouselInput::TouchEnd { x: 100.0 },
        ],
        1,
    );
}

#[test]
fn swipe_threshold_is_exclusive() {
    let (mut carousel, _clock) = started(3);

    carousel.handle(CarouselInput::TouchStart { x: 140.0 });
    assert!(!carousel.handle(CarouselInput::TouchEnd { x: 100.0 }));
    assert_eq!(carousel.current(), 0);

    carousel.handle(CarouselInput::TouchStart { x: 141.0 });
    assert!(carousel.handle(CarouselInput::TouchEnd { x: 100.0 }));
    assert_eq!(carousel.current(), 1);

    carousel.handle(CarouselInput::TouchStart { x: 100.0 });
    assert!(carousel.handle(CarouselInput::TouchEnd { x: 141.0 }));
    assert_eq!(carousel.current(), 0);
}

#[test]
fn hover_holds_the_slide_until_pointer_leaves() {
    let (mut carousel, clock) = started(3);
    clock.advance(&mut carousel, 3000);

    carousel.handle(CarouselInput::PointerEnter);
    clock.advance(&mut carousel, 30_000);
    assert_eq!(carousel.current(), 0);

    carousel.handle(CarouselInput::PointerLeave);
    clock.advance(&mut carousel, 5500);
    assert_eq!(carousel.current(), 1);
}

#[test]
fn pointer_leave_after_click_keeps_a_single_timer() {
    let (mut carousel, clock) = started(3);
    carousel.handle(CarouselInput::PointerEnter);
    carousel.handle(CarouselInput::Next);
    carousel.handle(CarouselInput::PointerLeave);

    clock.advance(&mut carousel, 5500);
    assert_eq!(carousel.current(), 2);
}
