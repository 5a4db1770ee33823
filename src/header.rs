// ABOUTME: Sticky header behavior for the hero-slideshow crate
// ABOUTME: Tracks the scrolled state and computes anchor scroll targets below the header

/// Scroll offset past which the header switches to its compact style.
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 50.0;

pub const SCROLLED_CLASS: &str = "is-scrolled";

#[derive(Debug, Clone, PartialEq)]
pub struct StickyHeader {
    threshold: f64,
    scrolled: bool,
    last_scroll: f64,
}

impl Default for StickyHeader {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD)
    }
}

impl StickyHeader {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: false,
            last_scroll: 0.0,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn last_scroll(&self) -> f64 {
        self.last_scroll
    }

    /// Scroll listener. Returns true when the class needs toggling.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > self.threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        self.last_scroll = scroll_y;
        changed
    }

    pub fn class_name(&self) -> Option<&'static str> {
        self.scrolled.then_some(SCROLLED_CLASS)
    }
}

/// Where a same-page anchor link should scroll to, leaving room for the
/// sticky header. `target_top` is the target's viewport-relative top.
///
/// Bare `#` links and anything that is not an in-page anchor are left to the
/// browser.
pub fn anchor_scroll_target(
    href: &str,
    target_top: f64,
    scroll_y: f64,
    header_height: f64,
) -> Option<f64> {
    if !href.starts_with('#') || href == "#" {
        return None;
    }
    Some(target_top + scroll_y - header_height)
}
