// ABOUTME: Pure slideshow state for the hero-slideshow crate
// ABOUTME: Holds index, elapsed time and pause holds, and computes transitions without side effects

use crate::slideshow::SlideshowConfig;
use crate::utils::{clamp_unit, is_valid_time};

/// Presentation phase of a single slide.
///
/// A slide moves `Inactive -> Entering -> Active -> Inactive`. The outgoing
/// slide stays `Active` under the entering one until the fade ends.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SlidePhase {
    Inactive,
    Entering, // Fading in over the active slide
    Active,
}

impl SlidePhase {
    /// CSS state class carried by a slide in this phase
    pub fn class_name(self) -> Option<&'static str> {
        match self {
            SlidePhase::Inactive => None,
            SlidePhase::Entering => Some("is-entering"),
            SlidePhase::Active => Some("is-active"),
        }
    }
}

/// An in-flight crossfade away from `from`.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Transition {
    pub from: usize,
    pub fade_elapsed_ms: f64,
}

/// What a single frame did to the state.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Tick {
    /// Nothing to do: inert slideshow, baseline frame or zero delta
    Idle,
    /// Elapsed time accumulated toward the next advance
    Progressed,
    /// A pause hold is in effect
    Paused,
    /// The delta looked like a suspended tab and was dropped
    GapSkipped,
    /// The crossfade is still running
    Fading,
    TransitionStarted { from: usize, to: usize },
    TransitionCompleted { index: usize },
}

/// Result of a navigation request.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Navigation {
    Started { from: usize, to: usize },
    /// Target is already the current slide
    Unchanged,
    /// A transition is in flight; the request was dropped
    Busy,
    OutOfRange,
    /// No slides, malformed timing, or detached
    Inert,
}

impl Navigation {
    pub fn is_started(&self) -> bool {
        matches!(self, Navigation::Started { .. })
    }
}

/// Complete state of one slideshow instance.
///
/// Every transition is a pure function from one state to the next; the
/// per-slide phases are derived from it, so at steady state exactly one
/// slide is active. During a crossfade the outgoing slide stays active and
/// the target is the one slide entering.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct SlideshowState {
    slide_count: usize,
    current_index: usize,
    elapsed_ms: f64,
    user_paused: bool,
    hidden: bool,
    transition: Option<Transition>,
}

impl SlideshowState {
    pub fn new(slide_count: usize) -> Self {
        Self {
            slide_count,
            current_index: 0,
            elapsed_ms: 0.0,
            user_paused: false,
            hidden: false,
            transition: None,
        }
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    pub fn transition(&self) -> Option<Transition> {
        self.transition
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    pub fn is_user_paused(&self) -> bool {
        self.user_paused
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Effective pause: either hold keeps the slideshow still.
    pub fn is_paused(&self) -> bool {
        self.user_paused || self.hidden
    }

    pub fn with_user_paused(mut self, paused: bool) -> Self {
        self.user_paused = paused;
        self
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Phase of slide `index`; out-of-range slides are inactive.
    pub fn phase_of(&self, index: usize) -> SlidePhase {
        if index >= self.slide_count {
            return SlidePhase::Inactive;
        }
        match self.transition {
            Some(_) if index == self.current_index => SlidePhase::Entering,
            Some(t) if index == t.from => SlidePhase::Active,
            None if index == self.current_index => SlidePhase::Active,
            _ => SlidePhase::Inactive,
        }
    }

    pub fn phases(&self) -> Vec<SlidePhase> {
        (0..self.slide_count).map(|i| self.phase_of(i)).collect()
    }

    /// Progress-fill scale factor in [0, 1]
    pub fn progress(&self, config: &SlideshowConfig) -> f64 {
        if !config.is_valid() {
            return 0.0;
        }
        clamp_unit(self.elapsed_ms / config.duration_ms)
    }

    /// Begin a crossfade to `index`.
    ///
    /// Requests that are out of range, target the current slide, or arrive
    /// while another crossfade is running leave the state untouched.
    pub fn go_to(self, index: usize, config: &SlideshowConfig) -> (Self, Navigation) {
        if self.slide_count == 0 || !config.is_valid() {
            return (self, Navigation::Inert);
        }
        if index >= self.slide_count {
            return (self, Navigation::OutOfRange);
        }
        if index == self.current_index {
            return (self, Navigation::Unchanged);
        }
        if self.transition.is_some() {
            return (self, Navigation::Busy);
        }

        let from = self.current_index;
        let mut next = self;
        next.current_index = index;
        next.elapsed_ms = 0.0;
        next.transition = if config.effective_fade_ms() > 0.0 {
            Some(Transition {
                from,
                fade_elapsed_ms: 0.0,
            })
        } else {
            None
        };
        (next, Navigation::Started { from, to: index })
    }

    /// Apply one frame of `delta_ms` to the state.
    ///
    /// A running crossfade consumes the delta whether or not the slideshow is
    /// paused; any remainder past the fade end is dropped. Otherwise elapsed
    /// grows only when unpaused and the delta is below the gap guard.
    pub fn advance(self, delta_ms: f64, config: &SlideshowConfig) -> (Self, Tick) {
        if self.slide_count == 0 || !config.is_valid() {
            return (self, Tick::Idle);
        }
        if !is_valid_time(delta_ms) || delta_ms == 0.0 {
            return (self, Tick::Idle);
        }

        let mut next = self;
        if let Some(transition) = self.transition {
            let faded = transition.fade_elapsed_ms + delta_ms;
            if faded >= config.effective_fade_ms() {
                next.transition = None;
                return (
                    next,
                    Tick::TransitionCompleted {
                        index: next.current_index,
                    },
                );
            }
            next.transition = Some(Transition {
                fade_elapsed_ms: faded,
                ..transition
            });
            return (next, Tick::Fading);
        }

        if config.reduced_motion {
            return (self, Tick::Idle);
        }
        if self.is_paused() {
            return (self, Tick::Paused);
        }
        if delta_ms >= config.gap_guard_ms {
            return (self, Tick::GapSkipped);
        }

        next.elapsed_ms += delta_ms;
        if next.elapsed_ms < config.duration_ms {
            return (next, Tick::Progressed);
        }

        if next.slide_count == 1 {
            // Nowhere to go; hold a full progress bar.
            next.elapsed_ms = config.duration_ms;
            return (next, Tick::Progressed);
        }

        let target = (next.current_index + 1) % next.slide_count;
        match next.go_to(target, config) {
            (started, Navigation::Started { from, to }) => {
                (started, Tick::TransitionStarted { from, to })
            }
            (unchanged, _) => (unchanged, Tick::Progressed),
        }
    }
}
