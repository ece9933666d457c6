//! Ringview CLI
//!
//! Simulate, inspect and scaffold Ringview scenes without a renderer.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ringview_3d::config::CONFIG_FILE;
use ringview_3d::{ring_layout, SceneCoordinator};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod script;
mod simulate;

use simulate::{Simulation, SimulationReport};

#[derive(Parser)]
#[command(name = "ringview")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Ringview scene CLI", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interaction script against a scene
    Simulate {
        /// Scene configuration (defaults to ./ringview.toml or the built-in scene)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Interaction script
        #[arg(short, long)]
        script: PathBuf,

        /// Frames per second
        #[arg(long, default_value = "60")]
        fps: u32,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print ring slot positions
    Layout {
        /// Number of slots
        #[arg(short = 'n', long, default_value = "6")]
        count: usize,

        /// Ring radius
        #[arg(short, long, default_value = "5.0")]
        radius: f32,
    },

    /// Validate a scene configuration
    Check {
        /// Scene configuration
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Write the default scene configuration
    Init {
        /// Output path
        #[arg(default_value = CONFIG_FILE)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Simulate {
            config,
            script,
            fps,
            json,
        } => cmd_simulate(config.as_deref(), &script, fps, json),

        Commands::Layout { count, radius } => cmd_layout(count, radius),

        Commands::Check { config } => cmd_check(config.as_deref()),

        Commands::Init { path, force } => cmd_init(&path, force),
    }
}

fn cmd_simulate(config: Option<&Path>, script: &Path, fps: u32, json: bool) -> Result<()> {
    if fps == 0 {
        anyhow::bail!("--fps must be at least 1");
    }

    let scene_config = config::load_scene_config(config)?;
    let source = fs::read_to_string(script)
        .with_context(|| format!("Failed to read {}", script.display()))?;
    let steps = script::parse_script(&source)
        .with_context(|| format!("Failed to parse {}", script.display()))?;

    info!(
        "Simulating {} steps at {} fps on a ring of {}",
        steps.len(),
        fps,
        scene_config.catalog.len()
    );

    let scene = SceneCoordinator::new(&scene_config).context("Failed to build scene")?;
    let report = Simulation::new(scene, fps).run(&steps)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &SimulationReport) {
    let pose = report.final_pose;
    println!("frames:       {} ({:.3} s)", report.frames, report.elapsed_secs);
    println!("final state:  {:?}", report.final_state);
    println!(
        "camera:       position ({:.3}, {:.3}, {:.3}) looking at ({:.3}, {:.3}, {:.3})",
        pose.position.x, pose.position.y, pose.position.z, pose.look_at.x, pose.look_at.y, pose.look_at.z
    );
    println!(
        "navigation:   {}",
        if report.gate_open { "open" } else { "closed" }
    );
    println!(
        "focus:        {} accepted, {} retargeted, {} ignored, {} rejected",
        report.focus.accepted, report.focus.retargeted, report.focus.ignored, report.focus.rejected
    );
    println!("progress:     {} events", report.progress_events);
    for change in &report.state_changes {
        println!("  frame {:>5}  -> {:?}", change.frame, change.state);
    }
    println!(
        "info panel:   {}",
        if report.info_panel_visible { "shown" } else { "hidden" }
    );
    println!("labels:       {:?}", report.visible_labels);
}

fn cmd_layout(count: usize, radius: f32) -> Result<()> {
    if !(radius.is_finite() && radius >= 0.0) {
        anyhow::bail!("Invalid radius {}", radius);
    }
    for (position, index) in ring_layout(count, radius) {
        println!(
            "{:>3}  {:>9.4} {:>9.4} {:>9.4}",
            index, position.x, position.y, position.z
        );
    }
    Ok(())
}

fn cmd_check(config: Option<&Path>) -> Result<()> {
    let scene_config = config::load_scene_config(config)?;
    let scene = SceneCoordinator::new(&scene_config).context("Failed to build scene")?;

    let ring = scene.ring();
    info!(
        "Scene OK: {} slots ({} objects) on radius {}",
        ring.len(),
        ring.objects().count(),
        ring.radius()
    );
    info!(
        "Intro {} s, smoothing {:?}",
        scene_config.intro.duration, scene_config.smoothing
    );
    Ok(())
}

fn cmd_init(path: &Path, force: bool) -> Result<()> {
    config::write_default_config(path, force)?;
    info!("Wrote default scene to {}", path.display());
    Ok(())
}
