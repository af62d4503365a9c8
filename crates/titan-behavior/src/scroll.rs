//! Scroll-position derived effects: back-to-top, parallax, anchor
//! offsets and staggered transition delays.

use crate::config::ScrollConfig;

/// Whether the back-to-top button should show.
#[must_use]
pub fn back_to_top_visible(scroll_y: f64, config: &ScrollConfig) -> bool {
    scroll_y > config.back_to_top_threshold_px
}

/// Inline `transform` for the hero background, or `None` once the hero
/// has scrolled out of the viewport (the last value is left in place).
#[must_use]
pub fn parallax_transform(
    scroll_y: f64,
    viewport_height: f64,
    config: &ScrollConfig,
) -> Option<String> {
    (scroll_y < viewport_height)
        .then(|| format!("translateY({}px)", scroll_y * config.parallax_factor))
}

/// Document y coordinate to scroll to so that an anchor target sits
/// just below the fixed navbar.
#[must_use]
pub fn anchor_scroll_top(target_viewport_top: f64, scroll_y: f64, navbar_height: f64) -> f64 {
    target_viewport_top + scroll_y - navbar_height
}

/// Inline `transition-delay` for the `index`-th child of a stagger group.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn stagger_delay(index: usize, step_secs: f64) -> String {
    format!("{}s", index as f64 * step_secs)
}
