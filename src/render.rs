// ABOUTME: Rendering boundary for the hero-slideshow crate
// ABOUTME: Projects slideshow state onto DOM class lists, counter text and progress style

use crate::slideshow::SlideshowConfig;
use crate::state::{SlidePhase, SlideshowState};
use crate::utils::{clamp_unit, format_counter};
use std::fmt::Write;

/// Everything the DOM needs to show for one slideshow frame
#[derive(Debug, Clone, PartialEq)]
pub struct SlideshowView {
    pub slides: Vec<SlidePhase>,
    pub dots: Vec<bool>,
    pub counter: String,
    pub total: String,
    pub progress: f64,
}

impl SlideshowView {
    pub fn from_state(state: &SlideshowState, config: &SlideshowConfig) -> Self {
        let count = state.slide_count();
        Self {
            slides: state.phases(),
            dots: (0..count).map(|i| i == state.current_index()).collect(),
            counter: format_counter(state.current_index() + 1),
            total: format_counter(count),
            progress: state.progress(config),
        }
    }

    /// Inline style written to the progress fill
    pub fn progress_style(&self) -> String {
        format!("transform: scaleX({:.4})", clamp_unit(self.progress))
    }

    pub fn active_count(&self) -> usize {
        self.slides
            .iter()
            .filter(|phase| **phase == SlidePhase::Active)
            .count()
    }
}

/// Applies a [`SlideshowView`] to a presentation tree.
///
/// A browser binding mutates real elements; [`DomSnapshot`] keeps an
/// in-memory copy for tests and the CLI.
pub trait Renderer {
    fn render(&mut self, view: &SlideshowView);
}

/// Classes and attributes of one rendered element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementState {
    pub classes: Vec<String>,
    pub attributes: Vec<(String, String)>,
}

impl ElementState {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn set_attribute(&mut self, name: &str, value: String) {
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some(entry) => entry.1 = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }

    fn write_open_tag(&self, out: &mut String, tag: &str, base_class: &str) {
        let mut class = base_class.to_string();
        for extra in &self.classes {
            class.push(' ');
            class.push_str(extra);
        }
        let _ = write!(out, "<{} class=\"{}\"", tag, class);
        for (key, value) in &self.attributes {
            let _ = write!(out, " {}=\"{}\"", key, value);
        }
        out.push('>');
    }
}

/// In-memory stand-in for the hero's DOM subtree
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DomSnapshot {
    pub slides: Vec<ElementState>,
    pub dots: Vec<ElementState>,
    pub counter_text: String,
    pub total_text: String,
    pub progress: ElementState,
    pub renders: usize,
}

impl DomSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize the snapshot as a markup fragment
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        out.push_str("<div class=\"hero\">\n");
        for (i, slide) in self.slides.iter().enumerate() {
            out.push_str("  ");
            slide.write_open_tag(&mut out, "div", "hero__slide");
            let _ = writeln!(out, "slide {}</div>", format_counter(i + 1));
        }
        let _ = writeln!(
            out,
            "  <p class=\"hero__counter\"><span>{}</span> / {}</p>",
            self.counter_text, self.total_text
        );
        out.push_str("  <div class=\"hero__progress\">");
        self.progress
            .write_open_tag(&mut out, "span", "hero__progress-fill");
        out.push_str("</span></div>\n");
        out.push_str("  <div class=\"hero__dots\" role=\"tablist\">\n");
        for dot in &self.dots {
            out.push_str("    ");
            dot.write_open_tag(&mut out, "button", "hero__dot");
            out.push_str("</button>\n");
        }
        out.push_str("  </div>\n</div>\n");
        out
    }
}

impl Renderer for DomSnapshot {
    fn render(&mut self, view: &SlideshowView) {
        self.slides.resize_with(view.slides.len(), ElementState::default);
        for (element, phase) in self.slides.iter_mut().zip(&view.slides) {
            element.classes.clear();
            if let Some(class) = phase.class_name() {
                element.classes.push(class.to_string());
            }
            let hidden = matches!(phase, SlidePhase::Inactive);
            element.set_attribute("aria-hidden", hidden.to_string());
        }

        self.dots.resize_with(view.dots.len(), ElementState::default);
        for (element, selected) in self.dots.iter_mut().zip(&view.dots) {
            element.classes.clear();
            if *selected {
                element.classes.push("is-active".to_string());
            }
            element.set_attribute("aria-selected", selected.to_string());
        }

        self.counter_text = view.counter.clone();
        self.total_text = view.total.clone();
        self.progress.set_attribute("style", view.progress_style());
        self.renders += 1;
    }
}
