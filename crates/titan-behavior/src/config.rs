//! Tunable constants for every page behavior.
//!
//! Defaults reproduce the values the site was designed around. A page
//! may override any subset of them through a JSON document (see
//! [`SiteConfig::from_json`]); omitted fields keep their defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Errors that can occur while loading a [`SiteConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The override document is not valid JSON for [`SiteConfig`].
    #[error("invalid site configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Configuration for the whole page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Testimonial carousel.
    pub carousel: CarouselConfig,
    /// Branded loading overlay.
    pub preloader: PreloaderConfig,
    /// Sticky navbar and active-link highlighting.
    pub navbar: NavbarConfig,
    /// Scroll-triggered reveal animation.
    pub reveal: RevealConfig,
    /// Animated statistic counters.
    pub counter: CounterConfig,
    /// Project category filter.
    pub filter: FilterConfig,
    /// Contact form submission feedback.
    pub form: FormConfig,
    /// Back-to-top button and hero parallax.
    pub scroll: ScrollConfig,
    /// Staggered transition delays for grid children.
    pub stagger: Vec<StaggerGroup>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            carousel: CarouselConfig::default(),
            preloader: PreloaderConfig::default(),
            navbar: NavbarConfig::default(),
            reveal: RevealConfig::default(),
            counter: CounterConfig::default(),
            filter: FilterConfig::default(),
            form: FormConfig::default(),
            scroll: ScrollConfig::default(),
            stagger: StaggerGroup::defaults(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override document.
    ///
    /// Every field is optional; anything missing falls back to
    /// [`SiteConfig::default`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if `json` is malformed or a field
    /// has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Carousel timing and gesture tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Period of the autoplay advance in milliseconds.
    pub autoplay_interval_ms: u32,
    /// Horizontal travel a touch must exceed (strictly) to count as a swipe.
    pub swipe_threshold_px: f64,
}

impl CarouselConfig {
    /// Autoplay period as a [`Duration`].
    #[must_use]
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.autoplay_interval_ms))
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: 5500,
            swipe_threshold_px: 40.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreloaderConfig {
    /// Minimum time the overlay stays up after `load`.
    pub min_display_ms: u32,
}

impl Default for PreloaderConfig {
    fn default() -> Self {
        Self {
            min_display_ms: 900,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    /// Scroll depth after which the navbar turns opaque.
    pub scrolled_threshold_px: f64,
    /// A section counts as current this many pixels before its top edge.
    pub section_offset_px: f64,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold_px: 60.0,
            section_offset_px: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Visible fraction that triggers a reveal.
    pub threshold: f64,
    /// `IntersectionObserver` root margin.
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.12,
            root_margin: "0px 0px -40px 0px".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Animation length in milliseconds.
    pub duration_ms: f64,
    /// Visible fraction that starts the animation.
    pub threshold: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: 2200.0,
            threshold: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Delay before a re-shown project item gets `visible` back.
    pub reveal_delay_ms: u32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: 50,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Simulated send time before the success message appears.
    pub sending_delay_ms: u32,
    /// How long the success message stays visible.
    pub success_visible_ms: u32,
    /// Submit button label while sending.
    pub sending_label: String,
    /// Submit button label at rest.
    pub idle_label: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            sending_delay_ms: 1200,
            success_visible_ms: 6000,
            sending_label: "Sending...".to_owned(),
            idle_label: "Send Message \u{2192}".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Scroll depth after which the back-to-top button shows.
    pub back_to_top_threshold_px: f64,
    /// Fraction of the scroll distance the hero background moves.
    pub parallax_factor: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            back_to_top_threshold_px: 400.0,
            parallax_factor: 0.35,
        }
    }
}

/// A set of grid children whose transitions start one after another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaggerGroup {
    /// CSS selector for the children.
    pub selector: String,
    /// Extra delay per child, in seconds.
    pub step_secs: f64,
}

impl StaggerGroup {
    fn new(selector: &str, step_secs: f64) -> Self {
        Self {
            selector: selector.to_owned(),
            step_secs,
        }
    }

    /// The groups the site styles ship with.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(".services-grid .service-card", 0.08),
            Self::new(".projects-grid .project-item", 0.08),
            Self::new(".about-features .feature-card", 0.12),
        ]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config =
            SiteConfig::from_json(r#"{"carousel": {"autoplay_interval_ms": 8000}}"#).unwrap();
        assert_eq!(config.carousel.autoplay_interval_ms, 8000);
        assert!((config.carousel.swipe_threshold_px - 40.0).abs() < f64::EPSILON);
        assert_eq!(config.form, FormConfig::default());
    }

    #[test]
    fn malformed_document_is_an_error() {
        let result = SiteConfig::from_json(r#"{"carousel": {"autoplay_interval_ms": "soon"}}"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn default_stagger_groups_cover_three_grids() {
        let config = SiteConfig::default();
        assert_eq!(config.stagger.len(), 3);
        assert_eq!(config.stagger[2].selector, ".about-features .feature-card");
    }

    #[test]
    fn autoplay_interval_converts_to_duration() {
        assert_eq!(
            CarouselConfig::default().autoplay_interval(),
            Duration::from_millis(5500)
        );
    }

    #[test]
    fn serialized_defaults_round_trip() {
        let json = serde_json::to_string(&SiteConfig::default()).unwrap();
        let config = SiteConfig::from_json(&json).unwrap();
        assert_eq!(config, SiteConfig::default());
    }
}
