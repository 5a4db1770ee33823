// ABOUTME: Configuration module for the hero-slideshow crate
// ABOUTME: Provides timing defaults and environment variable handling

use crate::header::DEFAULT_SCROLL_THRESHOLD;
use crate::reveal::{RevealConfig, DEFAULT_REVEAL_THRESHOLD, DEFAULT_ROOT_MARGIN_BOTTOM};
use crate::slideshow::{
    SlideshowConfig, DEFAULT_DURATION_MS, DEFAULT_FADE_MS, DEFAULT_GAP_GUARD_MS,
};
use std::env;

/// Frame interval used by the harness when none is given (about 60fps).
pub const DEFAULT_FRAME_MS: f64 = 16.0;

/// Global configuration for the site behaviors
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub duration_ms: f64,
    pub fade_ms: f64,
    pub gap_guard_ms: f64,
    pub frame_ms: f64,
    pub prefers_reduced_motion: bool,
    pub header_scroll_threshold: f64,
    pub reveal_threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            fade_ms: DEFAULT_FADE_MS,
            gap_guard_ms: DEFAULT_GAP_GUARD_MS,
            frame_ms: DEFAULT_FRAME_MS,
            prefers_reduced_motion: false,
            header_scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
        }
    }
}

fn env_f64(key: &str, default: f64) -> f64 {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse::<f64>().ok())
        .unwrap_or(default)
}

fn env_flag(key: &str) -> bool {
    env::var(key)
        .ok()
        .map(|s| matches!(s.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "reduce"))
        .unwrap_or(false)
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            duration_ms: env_f64("HERO_DURATION_MS", defaults.duration_ms),
            fade_ms: env_f64("HERO_FADE_MS", defaults.fade_ms),
            gap_guard_ms: env_f64("HERO_GAP_GUARD_MS", defaults.gap_guard_ms),
            frame_ms: env_f64("HERO_FRAME_MS", defaults.frame_ms),
            prefers_reduced_motion: env_flag("PREFERS_REDUCED_MOTION"),
            header_scroll_threshold: env_f64(
                "HEADER_SCROLL_THRESHOLD",
                defaults.header_scroll_threshold,
            ),
            reveal_threshold: env_f64("REVEAL_THRESHOLD", defaults.reveal_threshold),
        }
    }

    /// Get a slideshow configuration, letting explicit values win over this config
    pub fn get_slideshow_config(
        &self,
        duration_ms: Option<f64>,
        fade_ms: Option<f64>,
        reduced_motion: Option<bool>,
    ) -> SlideshowConfig {
        SlideshowConfig {
            duration_ms: duration_ms.unwrap_or(self.duration_ms),
            fade_ms: fade_ms.unwrap_or(self.fade_ms),
            gap_guard_ms: self.gap_guard_ms,
            reduced_motion: reduced_motion.unwrap_or(self.prefers_reduced_motion),
        }
    }

    /// Get a scroll reveal configuration
    pub fn get_reveal_config(&self) -> RevealConfig {
        RevealConfig {
            threshold: self.reveal_threshold,
            root_margin_bottom: DEFAULT_ROOT_MARGIN_BOTTOM,
            reduced_motion: self.prefers_reduced_motion,
        }
    }
}
