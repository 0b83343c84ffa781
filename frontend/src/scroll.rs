use log::warn;
use web_sys::Event;
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::config::{BUY_BAR_PERCENT, NAV_SCROLLED_OFFSET};
use crate::dom::{self, DomError};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn read() -> Result<Self, DomError> {
        let window = dom::window()?;
        let root = window.document().and_then(|d| d.document_element()).ok_or(DomError::NoDocument)?;
        let scroll_top = window.scroll_y().unwrap_or_else(|_| f64::from(root.scroll_top()));
        let viewport_height = window
            .inner_height()?
            .as_f64()
            .unwrap_or_else(|| f64::from(root.client_height()));

        Ok(ScrollMetrics {
            scroll_top,
            scroll_height: f64::from(root.scroll_height()),
            viewport_height,
        })
    }

    /// How far the page can scroll at all.
    pub fn scrollable(&self) -> f64 {
        self.scroll_height - self.viewport_height
    }

    /// Scroll position as a percentage of the scrollable range, or `None`
    /// when the page fits in the viewport.
    pub fn percent(&self) -> Option<f64> {
        let range = self.scrollable();
        (range > 0.0).then(|| self.scroll_top / range * 100.0)
    }
}

pub fn nav_is_scrolled(offset: f64) -> bool {
    offset >= NAV_SCROLLED_OFFSET
}

/// Short pages never show the buy bar.
pub fn buy_bar_visible(metrics: &ScrollMetrics) -> bool {
    metrics.percent().map_or(false, |percent| percent > BUY_BAR_PERCENT)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollFlags {
    pub nav_scrolled: bool,
    pub buy_bar_visible: bool,
}

impl ScrollFlags {
    pub fn from_metrics(metrics: &ScrollMetrics) -> Self {
        ScrollFlags {
            nav_scrolled: nav_is_scrolled(metrics.scroll_top),
            buy_bar_visible: buy_bar_visible(metrics),
        }
    }
}

/// Navbar and buy-bar flags, recomputed on every window scroll. Only a
/// change in either flag causes a re-render.
#[hook]
pub fn use_scroll_flags() -> ScrollFlags {
    let flags = use_state_eq(ScrollFlags::default);

    let refresh = {
        let flags = flags.clone();
        move || match ScrollMetrics::read() {
            Ok(metrics) => flags.set(ScrollFlags::from_metrics(&metrics)),
            Err(err) => warn!("Could not read scroll position: {}", err),
        }
    };

    {
        let refresh = refresh.clone();
        use_event_with_window("scroll", move |_: Event| refresh());
    }

    // Pages opened mid-scroll (reload, back button) need a first reading.
    use_effect_with_deps(
        move |_| {
            refresh();
            || ()
        },
        (),
    );

    *flags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(scroll_top: f64, scrollable: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_top,
            scroll_height: 800.0 + scrollable,
            viewport_height: 800.0,
        }
    }

    #[test]
    fn navbar_switches_at_sixty_pixels() {
        assert!(!nav_is_scrolled(0.0));
        assert!(!nav_is_scrolled(59.0));
        assert!(nav_is_scrolled(60.0));
        assert!(nav_is_scrolled(61.0));
    }

    #[test]
    fn navbar_reverts_when_scrolling_back() {
        let down = ScrollFlags::from_metrics(&page(120.0, 1000.0));
        let up = ScrollFlags::from_metrics(&page(59.0, 1000.0));
        assert!(down.nav_scrolled);
        assert!(!up.nav_scrolled);
    }

    #[test]
    fn buy_bar_threshold_is_five_percent() {
        assert!(!buy_bar_visible(&page(49.0, 1000.0)));
        assert!(!buy_bar_visible(&page(50.0, 1000.0)));
        assert!(buy_bar_visible(&page(51.0, 1000.0)));
    }

    #[test]
    fn buy_bar_hides_again_below_threshold() {
        assert!(buy_bar_visible(&page(600.0, 1000.0)));
        assert!(!buy_bar_visible(&page(10.0, 1000.0)));
    }

    #[test]
    fn short_pages_keep_the_buy_bar_hidden() {
        assert_eq!(page(0.0, 0.0).percent(), None);
        assert!(!buy_bar_visible(&page(0.0, 0.0)));
        assert!(!buy_bar_visible(&page(30.0, -200.0)));
    }

    #[test]
    fn percent_is_relative_to_scrollable_range() {
        let metrics = page(250.0, 1000.0);
        assert_eq!(metrics.scrollable(), 1000.0);
        assert_eq!(metrics.percent(), Some(25.0));
    }
}
