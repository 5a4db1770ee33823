// ABOUTME: Slide model for the hero-slideshow crate
// ABOUTME: Builds slide lists from a count or from image files found with a glob pattern

use crate::errors::{Result, SlideshowError};
use crate::utils::validate_directory_exists;
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Default pattern for hero images
pub const DEFAULT_SLIDE_PATTERN: &str = "*.{jpg,jpeg,png,webp}";

/// One opaque panel of the hero slideshow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub index: usize,
    pub source: Option<PathBuf>,
}

impl Slide {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            source: None,
        }
    }

    pub fn with_source(index: usize, source: PathBuf) -> Self {
        Self {
            index,
            source: Some(source),
        }
    }

    /// Label shown for the slide, the file name when there is one
    pub fn label(&self) -> String {
        self.source
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| format!("slide {}", self.index + 1))
    }
}

/// `count` slides without backing files
pub fn placeholder_slides(count: usize) -> Vec<Slide> {
    (0..count).map(Slide::new).collect()
}

/// Expand `{a,b}` alternatives, which `glob` itself does not support.
fn expand_alternatives(pattern: &str) -> Vec<String> {
    let (Some(open), Some(close)) = (pattern.find('{'), pattern.find('}')) else {
        return vec![pattern.to_string()];
    };
    if close < open {
        return vec![pattern.to_string()];
    }
    let head = &pattern[..open];
    let tail = &pattern[close + 1..];
    pattern[open + 1..close]
        .split(',')
        .flat_map(|alt| expand_alternatives(&format!("{}{}{}", head, alt, tail)))
        .collect()
}

/// Find slide images in a directory, sorted by path
pub fn find_slide_images(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    validate_directory_exists(dir)?;

    let mut paths = Vec::new();
    for alternative in expand_alternatives(pattern) {
        let glob_pattern = format!("{}/{}", dir.to_string_lossy(), alternative);
        for entry in glob::glob(&glob_pattern)? {
            match entry {
                Ok(path) if path.is_file() => paths.push(path),
                Ok(_) => {}
                Err(e) => warn!("Skipping unreadable entry: {}", e),
            }
        }
    }

    paths.sort();
    paths.dedup();

    if paths.is_empty() {
        return Err(SlideshowError::NoSlidesFoundError(format!(
            "{}/{}",
            dir.to_string_lossy(),
            pattern
        )));
    }

    info!("Found {} slide images in {:?}", paths.len(), dir);
    Ok(paths)
}

/// Build slides from the images in `dir`
pub fn discover_slides(dir: &Path, pattern: &str) -> Result<Vec<Slide>> {
    let paths = find_slide_images(dir, pattern)?;
    Ok(paths
        .into_iter()
        .enumerate()
        .map(|(index, path)| Slide::with_source(index, path))
        .collect())
}
