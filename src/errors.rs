// ABOUTME: Error types for the hero-slideshow crate
// ABOUTME: Covers configuration, slide discovery and event-script failures

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlideshowError {
    #[error("Path not found: {0}")]
    PathNotFoundError(PathBuf),

    #[error("Invalid glob pattern: {0}")]
    InvalidPattern(String),

    #[error("No slides found matching pattern: {0}")]
    NoSlidesFoundError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Input validation error: {0}")]
    ValidationError(String),

    #[error("Event script error: {0}")]
    ScriptError(String),
}

impl From<glob::PatternError> for SlideshowError {
    fn from(err: glob::PatternError) -> Self {
        SlideshowError::InvalidPattern(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SlideshowError>;
