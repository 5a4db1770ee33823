// ABOUTME: Hero slideshow controller for the hero-slideshow crate
// ABOUTME: Turns frame timestamps and input events into state transitions and renders them

use crate::errors::{Result, SlideshowError};
use crate::render::{Renderer, SlideshowView};
use crate::slides::Slide;
use crate::state::{Navigation, SlidePhase, SlideshowState, Tick};
use crate::utils::is_valid_time;
use log::{debug, info};

pub const DEFAULT_DURATION_MS: f64 = 5500.0;
pub const DEFAULT_FADE_MS: f64 = 1400.0;
/// Frame deltas at or above this are treated as a suspended tab.
pub const DEFAULT_GAP_GUARD_MS: f64 = 200.0;

/// Timing configuration for a slideshow
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideshowConfig {
    pub duration_ms: f64,
    pub fade_ms: f64,
    pub gap_guard_ms: f64,
    pub reduced_motion: bool,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            fade_ms: DEFAULT_FADE_MS,
            gap_guard_ms: DEFAULT_GAP_GUARD_MS,
            reduced_motion: false,
        }
    }
}

impl SlideshowConfig {
    pub fn new(duration_ms: f64, fade_ms: f64) -> Self {
        Self {
            duration_ms,
            fade_ms,
            ..Self::default()
        }
    }

    /// True when the timing can drive a slideshow at all
    pub fn is_valid(&self) -> bool {
        self.duration_ms.is_finite()
            && self.duration_ms > 0.0
            && is_valid_time(self.fade_ms)
            && self.gap_guard_ms > 0.0
    }

    /// Fade length actually used; reduced motion swaps slides instantly.
    pub fn effective_fade_ms(&self) -> f64 {
        if self.reduced_motion {
            0.0
        } else {
            self.fade_ms
        }
    }

    /// Report malformed timing. The controller itself stays inert instead of failing.
    pub fn validate(&self) -> Result<()> {
        if !self.duration_ms.is_finite() || self.duration_ms <= 0.0 {
            return Err(SlideshowError::ConfigError(format!(
                "duration must be a positive number of milliseconds, got {}",
                self.duration_ms
            )));
        }
        if !is_valid_time(self.fade_ms) {
            return Err(SlideshowError::ConfigError(format!(
                "fade must be zero or more milliseconds, got {}",
                self.fade_ms
            )));
        }
        if self.gap_guard_ms.is_nan() || self.gap_guard_ms <= 0.0 {
            return Err(SlideshowError::ConfigError(format!(
                "gap guard must be positive, got {}",
                self.gap_guard_ms
            )));
        }
        if self.fade_ms >= self.duration_ms {
            return Err(SlideshowError::ConfigError(format!(
                "fade ({} ms) should be shorter than the slide duration ({} ms)",
                self.fade_ms, self.duration_ms
            )));
        }
        Ok(())
    }
}

/// Drives one hero slideshow instance.
///
/// The controller owns its [`SlideshowState`] and the bookkeeping needed to
/// turn absolute animation-frame timestamps into deltas. Several controllers
/// can coexist; none of them touch global state.
#[derive(Debug)]
pub struct SlideshowController {
    slides: Vec<Slide>,
    config: SlideshowConfig,
    state: SlideshowState,
    last_tick_ms: Option<f64>,
    detached: bool,
}

impl SlideshowController {
    /// Set up a slideshow on slide 0.
    ///
    /// With no slides or malformed timing the controller is inert: every
    /// operation is accepted and does nothing.
    pub fn new(slides: Vec<Slide>, config: SlideshowConfig) -> Self {
        let state = SlideshowState::new(slides.len());
        let controller = Self {
            slides,
            config,
            state,
            last_tick_ms: None,
            detached: false,
        };
        if controller.is_inert() {
            debug!(
                "Slideshow is inert ({} slides, config {:?})",
                controller.slides.len(),
                controller.config
            );
        } else {
            info!(
                "Slideshow ready with {} slides ({} ms per slide, {} ms fade{})",
                controller.slides.len(),
                config.duration_ms,
                config.effective_fade_ms(),
                if config.reduced_motion {
                    ", reduced motion"
                } else {
                    ""
                }
            );
        }
        controller
    }

    /// Build and render the initial UI in one step.
    pub fn init<R: Renderer>(slides: Vec<Slide>, config: SlideshowConfig, renderer: &mut R) -> Self {
        let controller = Self::new(slides, config);
        controller.render(renderer);
        controller
    }

    pub fn is_inert(&self) -> bool {
        self.slides.is_empty() || !self.config.is_valid()
    }

    /// True while the frame loop should keep calling [`tick`](Self::tick).
    ///
    /// The loop never starts under reduced motion and stops at teardown.
    pub fn is_running(&self) -> bool {
        !self.is_inert() && !self.detached && !self.config.reduced_motion
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn config(&self) -> &SlideshowConfig {
        &self.config
    }

    pub fn state(&self) -> &SlideshowState {
        &self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.state.elapsed_ms()
    }

    pub fn is_paused(&self) -> bool {
        self.state.is_paused()
    }

    pub fn phase_of(&self, index: usize) -> SlidePhase {
        self.state.phase_of(index)
    }

    /// Navigate to `index`, starting a crossfade.
    pub fn go_to(&mut self, index: usize) -> Navigation {
        if self.detached {
            return Navigation::Inert;
        }
        let (next, outcome) = self.state.go_to(index, &self.config);
        match outcome {
            Navigation::Started { from, to } => {
                debug!("Slide {} -> {}", from, to);
            }
            Navigation::OutOfRange => {
                debug!(
                    "Rejected navigation to slide {} of {}",
                    index,
                    self.slides.len()
                );
            }
            Navigation::Busy => {
                debug!("Ignored navigation to slide {} during crossfade", index);
            }
            _ => {}
        }
        self.state = next;
        outcome
    }

    pub fn next(&mut self) -> Navigation {
        if self.slides.is_empty() {
            return Navigation::Inert;
        }
        let target = (self.current_index() + 1) % self.slides.len();
        self.go_to(target)
    }

    pub fn prev(&mut self) -> Navigation {
        if self.slides.is_empty() {
            return Navigation::Inert;
        }
        let count = self.slides.len();
        let target = (self.current_index() + count - 1) % count;
        self.go_to(target)
    }

    /// Animation-frame callback with the frame's timestamp.
    ///
    /// The first frame, a repeated timestamp, or a clock that went backwards
    /// only records the baseline.
    pub fn tick(&mut self, now_ms: f64) -> Tick {
        if self.detached || self.is_inert() || !is_valid_time(now_ms) {
            return Tick::Idle;
        }
        let delta = match self.last_tick_ms {
            Some(last) if now_ms > last => now_ms - last,
            _ => 0.0,
        };
        self.last_tick_ms = Some(now_ms);
        self.advance(delta)
    }

    /// Apply a frame delta directly, bypassing timestamp bookkeeping.
    pub fn advance(&mut self, delta_ms: f64) -> Tick {
        if self.detached {
            return Tick::Idle;
        }
        let (next, tick) = self.state.advance(delta_ms, &self.config);
        match tick {
            Tick::TransitionStarted { from, to } => {
                debug!("Auto-advancing slide {} -> {}", from, to);
            }
            Tick::TransitionCompleted { index } => {
                debug!("Crossfade finished on slide {}", index);
            }
            Tick::GapSkipped => {
                debug!("Dropped {:.0} ms frame gap", delta_ms);
            }
            _ => {}
        }
        self.state = next;
        tick
    }

    /// Hover or focus hold.
    pub fn set_paused(&mut self, paused: bool) {
        if self.detached {
            return;
        }
        self.state = self.state.with_user_paused(paused);
    }

    /// Visibility observer callback; an off-screen slideshow holds still.
    pub fn set_visible(&mut self, visible: bool) {
        if self.detached {
            return;
        }
        self.state = self.state.with_hidden(!visible);
    }

    /// Teardown: stop reacting to frames and input.
    pub fn detach(&mut self) {
        if !self.detached {
            info!("Slideshow detached on slide {}", self.current_index());
        }
        self.detached = true;
        self.last_tick_ms = None;
    }

    /// Project the current state for the rendering step.
    pub fn view(&self) -> SlideshowView {
        SlideshowView::from_state(&self.state, &self.config)
    }

    pub fn render<R: Renderer>(&self, renderer: &mut R) {
        if self.is_inert() {
            return;
        }
        renderer.render(&self.view());
    }
}
