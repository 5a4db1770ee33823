// ABOUTME: Utility functions for the hero-slideshow crate
// ABOUTME: Provides label formatting, clamping and path validation helpers

use crate::errors::{Result, SlideshowError};
use std::path::Path;

/// Format a 1-based slide number, zero-padded to two digits
pub fn format_counter(number: usize) -> String {
    format!("{:02}", number)
}

/// Clamp a ratio into [0, 1], mapping NaN to 0
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// True for a finite, non-negative timestamp or delta
pub fn is_valid_time(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Validate that a directory exists
pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(SlideshowError::PathNotFoundError(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(SlideshowError::ValidationError(format!(
            "Path is not a directory: {:?}",
            path
        )));
    }
    Ok(())
}
