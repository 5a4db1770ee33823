use hero_slideshow::harness::{Action, ScriptedEvent};
use hero_slideshow::{
    placeholder_slides, run_simulation, DomSnapshot, Navigation, Renderer, SimulationConfig,
    SlidePhase, SlideshowConfig, SlideshowController, SlideshowView, Tick,
};

/// Renderer that keeps every frame it was given
#[derive(Default)]
struct RecordingRenderer {
    frames: Vec<SlideshowView>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, view: &SlideshowView) {
        self.frames.push(view.clone());
    }
}

fn hero() -> SlideshowController {
    SlideshowController::new(placeholder_slides(3), SlideshowConfig::new(5500.0, 1400.0))
}

#[test]
fn test_flag_invariants_hold_on_every_frame() {
    let mut controller = hero();
    let mut renderer = RecordingRenderer::default();
    let sim = SimulationConfig {
        frame_ms: 16.0,
        run_ms: 30_000.0,
        events: vec![
            ScriptedEvent { at_ms: 2_000, action: Action::Next },
            ScriptedEvent { at_ms: 2_100, action: Action::Prev },
            ScriptedEvent { at_ms: 9_000, action: Action::Hide },
            ScriptedEvent { at_ms: 12_000, action: Action::Show },
        ],
        realtime: false,
    };

    run_simulation(&mut controller, &mut renderer, &sim).expect("Simulation failed");
    assert!(!renderer.frames.is_empty());

    for (i, view) in renderer.frames.iter().enumerate() {
        let entering: Vec<usize> = (0..view.slides.len())
            .filter(|s| view.slides[*s] == SlidePhase::Entering)
            .collect();
        assert_eq!(view.active_count(), 1, "frame {}: exactly one active slide", i);
        assert!(entering.len() <= 1, "frame {}: at most one entering slide", i);
        if let Some(&target) = entering.first() {
            assert!(view.dots[target], "frame {}: entering slide owns the dot", i);
        }
        assert_eq!(view.dots.iter().filter(|d| **d).count(), 1, "frame {}", i);
        assert!((0.0..=1.0).contains(&view.progress), "frame {}", i);
    }
}

#[test]
fn test_progress_is_frozen_while_hidden() {
    let mut controller = hero();
    let mut renderer = RecordingRenderer::default();
    let sim = SimulationConfig {
        frame_ms: 50.0,
        run_ms: 5_000.0,
        events: vec![ScriptedEvent { at_ms: 1_000, action: Action::Hide }],
        realtime: false,
    };

    let report = run_simulation(&mut controller, &mut renderer, &sim).expect("Simulation failed");
    assert!(report.transitions.is_empty());
    assert_eq!(report.final_elapsed_ms, 950.0);

    let last = renderer.frames.last().expect("No frames rendered");
    assert_eq!(last.counter, "01");
    assert!((last.progress - 950.0 / 5500.0).abs() < 1e-9);
}

#[test]
fn test_detach_event_ends_the_run() {
    let mut controller = hero();
    let mut snapshot = DomSnapshot::new();
    let sim = SimulationConfig {
        frame_ms: 40.0,
        run_ms: 20_000.0,
        events: vec![ScriptedEvent { at_ms: 1_000, action: Action::Detach }],
        realtime: false,
    };

    let report = run_simulation(&mut controller, &mut snapshot, &sim).expect("Simulation failed");
    assert!(controller.is_detached());
    assert!(report.transitions.is_empty());
    assert_eq!(report.final_index, 0);
    assert_eq!(controller.go_to(1), Navigation::Inert);
}

#[test]
fn test_manual_navigation_then_autoplay_resumes() {
    let mut controller = hero();
    let mut now = 0.0;
    controller.tick(now);
    assert!(controller.go_to(2).is_started());

    let mut started = Vec::new();
    while now < 5_500.0 + 1_400.0 + 1_000.0 {
        now += 20.0;
        if let Tick::TransitionStarted { from, to } = controller.tick(now) {
            started.push((from, to));
        }
    }
    // Fade 1400ms, then a full 5500ms dwell before wrapping to slide 0
    assert_eq!(started, vec![(2, 0)]);
}
