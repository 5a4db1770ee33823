// ABOUTME: Before/after comparison slider for the hero-slideshow crate
// ABOUTME: Keeps the divider position in range and carries screen-reader instructions

pub const INITIAL_POSITION: f64 = 50.0;
const KEY_STEP: f64 = 1.0;

/// Screen-reader hint prepended to each slider's container.
pub const SR_INSTRUCTIONS: &str =
    "左右の矢印キーでスライダーを操作し、施工前と施工後を比較できます";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKey {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonSlider {
    position: f64,
}

impl Default for ComparisonSlider {
    fn default() -> Self {
        Self {
            position: INITIAL_POSITION,
        }
    }
}

impl ComparisonSlider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Divider position as a percentage of the width
    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn set_position(&mut self, percent: f64) {
        if percent.is_nan() {
            return;
        }
        self.position = percent.clamp(0.0, 100.0);
    }

    pub fn on_key(&mut self, key: ArrowKey) -> f64 {
        let step = match key {
            ArrowKey::Left => -KEY_STEP,
            ArrowKey::Right => KEY_STEP,
        };
        self.set_position(self.position + step);
        self.position
    }

    pub fn instructions(&self) -> &'static str {
        SR_INSTRUCTIONS
    }
}
