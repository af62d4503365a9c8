//! Sticky navbar state derived from the scroll position.

use std::borrow::Cow;

use crate::config::NavbarConfig;

/// A page section the navbar can link to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section<'a> {
    /// The section's `id` attribute.
    pub id: &'a str,
    /// Distance from the top of the document to the section, in pixels.
    pub offset_top: f64,
}

/// What the navbar should look like at a given scroll position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavbarState<'a> {
    /// Whether the opaque `scrolled` style applies.
    pub scrolled: bool,
    /// Id of the section the reader is in, if any.
    pub active_section: Option<&'a str>,
}

impl<'a> NavbarState<'a> {
    /// Compute the navbar state for `scroll_y`.
    ///
    /// `sections` must be in document order. The active section is the
    /// last one whose top (minus the configured offset) has been
    /// scrolled past.
    #[must_use]
    pub fn at(scroll_y: f64, sections: &[Section<'a>], config: &NavbarConfig) -> Self {
        let active_section = sections
            .iter()
            .rev()
            .find(|s| scroll_y >= s.offset_top - config.section_offset_px)
            .map(|s| s.id);
        Self {
            scrolled: scroll_y > config.scrolled_threshold_px,
            active_section,
        }
    }

    /// Whether a nav link with this `href` should be highlighted.
    #[must_use]
    pub fn is_link_active(&self, href: Option<&str>) -> bool {
        match (self.active_section, href) {
            (Some(active), Some(href)) => link_target(href) == active,
            (None, Some(href)) => link_target(href).is_empty(),
            (_, None) => false,
        }
    }
}

/// The section id a nav link points at: its `href` with the first `#`
/// removed.
#[must_use]
pub fn link_target(href: &str) -> Cow<'_, str> {
    href.find('#').map_or(Cow::Borrowed(href), |at| {
        let mut target = String::with_capacity(href.len() - 1);
        target.push_str(&href[..at]);
        target.push_str(&href[at + 1..]);
        Cow::Owned(target)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTIONS: [Section<'static>; 3] = [
        Section {
            id: "home",
            offset_top: 0.0,
        },
        Section {
            id: "services",
            offset_top: 800.0,
        },
        Section {
            id: "contact",
            offset_top: 2000.0,
        },
    ];

    #[test]
    fn top_of_page_is_transparent_and_on_first_section() {
        let state = NavbarState::at(0.0, &SECTIONS, &NavbarConfig::default());
        assert!(!state.scrolled);
        assert_eq!(state.active_section, Some("home"));
    }

    #[test]
    fn scrolled_threshold_is_exclusive() {
        let config = NavbarConfig::default();
        assert!(!NavbarState::at(60.0, &SECTIONS, &config).scrolled);
        assert!(NavbarState::at(61.0, &SECTIONS, &config).scrolled);
    }

    #[test]
    fn section_becomes_active_one_hundred_pixels_early() {
        let config = NavbarConfig::default();
        assert_eq!(
            NavbarState::at(699.0, &SECTIONS, &config).active_section,
            Some("home")
        );
        assert_eq!(
            NavbarState::at(700.0, &SECTIONS, &config).active_section,
            Some("services")
        );
        assert_eq!(
            NavbarState::at(5000.0, &SECTIONS, &config).active_section,
            Some("contact")
        );
    }

    #[test]
    fn no_section_reached_means_none_active() {
        let sections = [Section {
            id: "about",
            offset_top: 500.0,
        }];
        let state = NavbarState::at(0.0, &sections, &NavbarConfig::default());
        assert_eq!(state.active_section, None);
    }

    #[test]
    fn link_matching_strips_first_hash() {
        let state = NavbarState::at(900.0, &SECTIONS, &NavbarConfig::default());
        assert!(state.is_link_active(Some("#services")));
        assert!(!state.is_link_active(Some("#home")));
        assert!(!state.is_link_active(None));
        assert_eq!(link_target("#a#b"), "a#b");
        assert_eq!(link_target("plain"), "plain");
    }
}
