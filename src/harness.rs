// ABOUTME: Synthetic frame scheduler for the hero-slideshow crate
// ABOUTME: Feeds timestamps and scripted input events to a controller, optionally in real time

use crate::errors::{Result, SlideshowError};
use crate::render::Renderer;
use crate::slideshow::SlideshowController;
use crate::state::{Navigation, Tick};
use log::{debug, info};
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Input the harness can inject while frames run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Pause,
    Resume,
    Hide,
    Show,
    GoTo(usize),
    Next,
    Prev,
    Detach,
}

impl FromStr for Action {
    type Err = SlideshowError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (name, arg) = match s.split_once('=') {
            Some((name, arg)) => (name.trim(), Some(arg.trim())),
            None => (s, None),
        };
        let action = match (name.to_lowercase().as_str(), arg) {
            ("pause", None) => Action::Pause,
            ("resume", None) => Action::Resume,
            ("hide", None) => Action::Hide,
            ("show", None) => Action::Show,
            ("next", None) => Action::Next,
            ("prev", None) => Action::Prev,
            ("detach", None) => Action::Detach,
            ("goto", Some(arg)) => Action::GoTo(arg.parse::<usize>().map_err(|e| {
                SlideshowError::ScriptError(format!("Invalid slide index '{}': {}", arg, e))
            })?),
            ("goto", None) => {
                return Err(SlideshowError::ScriptError(
                    "goto needs a slide index, e.g. goto=2".to_string(),
                ))
            }
            _ => {
                return Err(SlideshowError::ScriptError(format!(
                    "Unknown action: {}",
                    s
                )))
            }
        };
        Ok(action)
    }
}

/// An action scheduled at a simulated time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptedEvent {
    pub at_ms: u64,
    pub action: Action,
}

/// Parse `AT_MS:ACTION[=ARG]` entries separated by commas, sorted by time
pub fn parse_events(script: &str) -> Result<Vec<ScriptedEvent>> {
    let mut events = Vec::new();
    for entry in script.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let (at, action) = entry.split_once(':').ok_or_else(|| {
            SlideshowError::ScriptError(format!("Expected AT_MS:ACTION, got '{}'", entry))
        })?;
        let at_ms = at.trim().parse::<u64>().map_err(|e| {
            SlideshowError::ScriptError(format!("Invalid time '{}': {}", at.trim(), e))
        })?;
        events.push(ScriptedEvent {
            at_ms,
            action: action.parse()?,
        });
    }
    events.sort_by_key(|e| e.at_ms);
    Ok(events)
}

/// Configuration for a simulated run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub frame_ms: f64,
    pub run_ms: f64,
    pub events: Vec<ScriptedEvent>,
    pub realtime: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            frame_ms: 16.0,
            run_ms: 15000.0,
            events: Vec::new(),
            realtime: false,
        }
    }
}

/// A slide change observed during a run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionRecord {
    pub at_ms: f64,
    pub from: usize,
    pub to: usize,
}

/// Summary of a simulated run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationReport {
    pub frames: usize,
    pub transitions: Vec<TransitionRecord>,
    pub completed_fades: usize,
    pub skipped_gaps: usize,
    pub final_index: usize,
    pub final_elapsed_ms: f64,
}

fn apply_action(
    controller: &mut SlideshowController,
    action: Action,
    now_ms: f64,
    report: &mut SimulationReport,
) {
    let navigation = match action {
        Action::Pause => {
            controller.set_paused(true);
            None
        }
        Action::Resume => {
            controller.set_paused(false);
            None
        }
        Action::Hide => {
            controller.set_visible(false);
            None
        }
        Action::Show => {
            controller.set_visible(true);
            None
        }
        Action::GoTo(index) => Some(controller.go_to(index)),
        Action::Next => Some(controller.next()),
        Action::Prev => Some(controller.prev()),
        Action::Detach => {
            controller.detach();
            None
        }
    };
    if let Some(Navigation::Started { from, to }) = navigation {
        report.transitions.push(TransitionRecord {
            at_ms: now_ms,
            from,
            to,
        });
    }
    debug!("{:.0} ms: {:?} -> {:?}", now_ms, action, navigation);
}

/// Run frames from t=0 to `run_ms`, applying each scripted event on the
/// first frame at or after its time and rendering after every frame.
pub fn run_simulation<R: Renderer>(
    controller: &mut SlideshowController,
    renderer: &mut R,
    config: &SimulationConfig,
) -> Result<SimulationReport> {
    if !(config.frame_ms.is_finite() && config.frame_ms > 0.0) {
        return Err(SlideshowError::ValidationError(format!(
            "Frame interval must be positive, got {}",
            config.frame_ms
        )));
    }
    if !(config.run_ms.is_finite() && config.run_ms >= 0.0) {
        return Err(SlideshowError::ValidationError(format!(
            "Run length must be zero or more, got {}",
            config.run_ms
        )));
    }

    info!(
        "Simulating {} ms at {} ms per frame with {} scripted events",
        config.run_ms,
        config.frame_ms,
        config.events.len()
    );

    let started = Instant::now();
    let mut report = SimulationReport::default();
    let mut pending = config.events.iter().peekable();
    let mut now_ms = 0.0;

    controller.render(renderer);

    while now_ms <= config.run_ms {
        while let Some(event) = pending.next_if(|e| (e.at_ms as f64) <= now_ms) {
            apply_action(controller, event.action, now_ms, &mut report);
        }

        if controller.is_running() || controller.state().is_transitioning() {
            match controller.tick(now_ms) {
                Tick::TransitionStarted { from, to } => report.transitions.push(TransitionRecord {
                    at_ms: now_ms,
                    from,
                    to,
                }),
                Tick::TransitionCompleted { .. } => report.completed_fades += 1,
                Tick::GapSkipped => report.skipped_gaps += 1,
                _ => {}
            }
        }
        controller.render(renderer);
        report.frames += 1;

        if config.realtime {
            let target = Duration::from_secs_f64(now_ms / 1000.0);
            if let Some(remaining) = target.checked_sub(started.elapsed()) {
                std::thread::sleep(remaining);
            }
        }
        now_ms += config.frame_ms;
    }

    report.final_index = controller.current_index();
    report.final_elapsed_ms = controller.elapsed_ms();
    info!(
        "Simulation finished after {} frames with {} transitions",
        report.frames,
        report.transitions.len()
    );
    Ok(report)
}
