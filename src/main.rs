// ABOUTME: Main entry point for the hero-slideshow program.
// ABOUTME: Provides a CLI that drives the slideshow with synthetic frames and prints the result.

use clap::{Args, Parser, Subcommand};
use hero_slideshow::slides::DEFAULT_SLIDE_PATTERN;
use hero_slideshow::{
    discover_slides, parse_events, placeholder_slides, run_simulation, Config, DomSnapshot,
    SimulationConfig, Slide, SlideshowController,
};
use log::warn;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the slideshow against synthetic animation frames
    Simulate(SimulateArgs),

    /// Print the initial hero markup
    Render(SlideArgs),

    /// Print the effective configuration
    Config,
}

#[derive(Args)]
struct SlideArgs {
    /// Number of placeholder slides
    #[arg(short = 'n', long, default_value_t = 3)]
    slides: usize,

    /// Directory of slide images (overrides --slides)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Glob pattern for images inside --dir
    #[arg(long, default_value = DEFAULT_SLIDE_PATTERN)]
    pattern: String,

    /// Time each slide is shown, in milliseconds
    #[arg(long)]
    duration: Option<f64>,

    /// Crossfade length, in milliseconds
    #[arg(long)]
    fade: Option<f64>,

    /// Behave as if the user prefers reduced motion
    #[arg(long)]
    reduced_motion: bool,
}

#[derive(Args)]
struct SimulateArgs {
    #[command(flatten)]
    slides: SlideArgs,

    /// Interval between frames, in milliseconds
    #[arg(long)]
    frame_ms: Option<f64>,

    /// Total simulated time, in milliseconds
    #[arg(long, default_value_t = 15000.0)]
    run_ms: f64,

    /// Scripted input, e.g. "3000:pause,6000:resume,7000:goto=2"
    #[arg(short, long)]
    events: Option<String>,

    /// Pace frames in wall-clock time
    #[arg(long)]
    realtime: bool,

    /// Print the final markup after the run
    #[arg(long)]
    markup: bool,
}

fn build_controller(args: &SlideArgs, config: &Config) -> anyhow::Result<SlideshowController> {
    let slides: Vec<Slide> = match &args.dir {
        Some(dir) => discover_slides(dir, &args.pattern)?,
        None => placeholder_slides(args.slides),
    };

    let reduced_motion = args.reduced_motion.then_some(true);
    let slideshow_config = config.get_slideshow_config(args.duration, args.fade, reduced_motion);
    if let Err(e) = slideshow_config.validate() {
        warn!("{}", e);
        eprintln!("Warning: {}", e);
    }

    for slide in &slides {
        println!("  [{:02}] {}", slide.index + 1, slide.label());
    }
    Ok(SlideshowController::new(slides, slideshow_config))
}

fn run(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Simulate(args)) => {
            println!("Executing simulate command...");
            let mut controller = build_controller(&args.slides, config)?;
            let events = match &args.events {
                Some(script) => parse_events(script)?,
                None => Vec::new(),
            };
            let sim_config = SimulationConfig {
                frame_ms: args.frame_ms.unwrap_or(config.frame_ms),
                run_ms: args.run_ms,
                events,
                realtime: args.realtime,
            };

            let mut snapshot = DomSnapshot::new();
            let report = run_simulation(&mut controller, &mut snapshot, &sim_config)?;

            for t in &report.transitions {
                println!("{:>8.0} ms  slide {:02} -> {:02}", t.at_ms, t.from + 1, t.to + 1);
            }
            println!(
                "Frames: {}, transitions: {}, gaps skipped: {}",
                report.frames,
                report.transitions.len(),
                report.skipped_gaps
            );
            println!(
                "Final slide: {:02} ({:.0} ms elapsed)",
                report.final_index + 1,
                report.final_elapsed_ms
            );
            if args.markup {
                print!("{}", snapshot.to_markup());
            }
            Ok(())
        }
        Some(Commands::Render(args)) => {
            let mut snapshot = DomSnapshot::new();
            let controller = build_controller(args, config)?;
            controller.render(&mut snapshot);
            print!("{}", snapshot.to_markup());
            Ok(())
        }
        Some(Commands::Config) => {
            println!("{:#?}", config);
            Ok(())
        }
        None => {
            println!("No command specified. Use --help for usage information.");
            Ok(())
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let config = Config::from_env();

    if let Err(e) = run(&cli, &config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
