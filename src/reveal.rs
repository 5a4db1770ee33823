// ABOUTME: Scroll reveal behavior for the hero-slideshow crate
// ABOUTME: Marks elements visible once they intersect the viewport, honoring reduced motion

use log::debug;

pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.15;
/// Negative bottom margin shrinking the observed viewport, in px.
pub const DEFAULT_ROOT_MARGIN_BOTTOM: f64 = -40.0;

pub const VISIBLE_CLASS: &str = "is-visible";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin_bottom: f64,
    pub reduced_motion: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_REVEAL_THRESHOLD,
            root_margin_bottom: DEFAULT_ROOT_MARGIN_BOTTOM,
            reduced_motion: false,
        }
    }
}

/// Viewport-relative geometry of an observed element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementBox {
    pub top: f64,
    pub height: f64,
}

/// Fraction of `element` inside a viewport of `viewport_height`, after
/// applying the bottom root margin.
pub fn intersection_ratio(element: ElementBox, viewport_height: f64, root_margin_bottom: f64) -> f64 {
    let root_bottom = viewport_height + root_margin_bottom;
    if element.height <= 0.0 || root_bottom <= 0.0 {
        return 0.0;
    }
    let visible_top = element.top.max(0.0);
    let visible_bottom = (element.top + element.height).min(root_bottom);
    ((visible_bottom - visible_top).max(0.0) / element.height).min(1.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollReveal {
    config: RevealConfig,
    visible: Vec<bool>,
}

impl ScrollReveal {
    /// Register `count` `.reveal` elements. Under reduced motion they are all
    /// shown at once and nothing is observed.
    pub fn new(count: usize, config: RevealConfig) -> Self {
        Self {
            visible: vec![config.reduced_motion; count],
            config,
        }
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    /// Elements still waiting to be revealed
    pub fn observed(&self) -> Vec<usize> {
        self.visible
            .iter()
            .enumerate()
            .filter(|(_, shown)| !**shown)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|shown| **shown).count()
    }

    /// Observer callback for a layout pass. `boxes[i]` is element `i`.
    /// Returns the indices revealed by this pass.
    pub fn on_layout(&mut self, boxes: &[ElementBox], viewport_height: f64) -> Vec<usize> {
        let mut revealed = Vec::new();
        for (index, element) in boxes.iter().enumerate() {
            if self.is_visible(index) || index >= self.visible.len() {
                continue;
            }
            let ratio = intersection_ratio(*element, viewport_height, self.config.root_margin_bottom);
            if ratio > 0.0 && ratio >= self.config.threshold {
                self.visible[index] = true;
                revealed.push(index);
            }
        }
        if !revealed.is_empty() {
            debug!("Revealed elements {:?}", revealed);
        }
        revealed
    }
}
