// ABOUTME: Library module for the hero-slideshow crate.
// ABOUTME: Contains the hero slideshow state machine and the site's other interactive behaviors.

// Reexport modules
pub mod comparison;
pub mod config;
pub mod errors;
pub mod footer;
pub mod harness;
pub mod header;
pub mod menu;
pub mod render;
pub mod reveal;
pub mod slides;
pub mod slideshow;
pub mod state;
pub mod testimonials;
pub mod utils;

// Reexport common types and functions
pub use config::Config;
pub use errors::{Result, SlideshowError};
pub use harness::{parse_events, run_simulation, SimulationConfig, SimulationReport};
pub use render::{DomSnapshot, Renderer, SlideshowView};
pub use slides::{discover_slides, placeholder_slides, Slide};
pub use slideshow::{SlideshowConfig, SlideshowController};
pub use state::{Navigation, SlidePhase, SlideshowState, Tick};
