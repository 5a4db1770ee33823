// ABOUTME: Testimonial dot navigation for the hero-slideshow crate
// ABOUTME: Derives the active card from the scroller position and mirrors it on the dots

/// A card counts as current once its left edge is within this share of the
/// container width from the scroll position.
const ACTIVE_EDGE_FACTOR: f64 = 0.3;

/// Horizontal testimonial scroller
#[derive(Debug, Clone, PartialEq)]
pub struct TestimonialScroller {
    /// Left offsets of the cards relative to the scroller
    card_lefts: Vec<f64>,
    container_width: f64,
    active: usize,
}

impl TestimonialScroller {
    pub fn new(card_lefts: Vec<f64>, container_width: f64) -> Self {
        Self {
            card_lefts,
            container_width,
            active: 0,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Scroll listener; returns the new active card
    pub fn on_scroll(&mut self, scroll_left: f64) -> usize {
        let edge = scroll_left + self.container_width * ACTIVE_EDGE_FACTOR;
        self.active = self
            .card_lefts
            .iter()
            .rposition(|left| *left <= edge)
            .unwrap_or(0);
        self.active
    }

    /// Scroll offset a dot click should bring into view
    pub fn dot_target(&self, dot: usize) -> Option<f64> {
        self.card_lefts.get(dot).copied()
    }

    /// `(is-active, aria-selected)` per dot
    pub fn dot_states(&self) -> Vec<(bool, &'static str)> {
        (0..self.card_lefts.len())
            .map(|i| {
                let selected = i == self.active;
                (selected, if selected { "true" } else { "false" })
            })
            .collect()
    }
}
