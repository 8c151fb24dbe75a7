//! dashboard-render - headless dashboard frame renderer.
//!
//! Runs a scripted drive through the simulation and writes the final frame
//! as a PNG. The script order is: accelerate, brake, signal, cruise.
//!
//! Run: `dashboard-render --accelerate-frames 120 --left -o frame.png`

use anyhow::{Context, Result};
use clap::Parser;
use dashboard_raster::canvas::Canvas;
use dashboard_raster::config::DashboardConfig;
use dashboard_raster::dashboard::Dashboard;
use dashboard_raster::framebuffer::Framebuffer;
use dashboard_raster::output::PngEncoder;
use dashboard_raster::sim::{Controls, DashboardState};
use std::path::PathBuf;

/// Render one car dashboard frame to PNG.
#[derive(Parser, Debug)]
#[command(name = "dashboard-render")]
#[command(version)]
#[command(about = "Render a simulated car dashboard frame to PNG", long_about = None)]
struct Cli {
    /// Ticks to hold the accelerator
    #[arg(long, default_value = "0")]
    accelerate_frames: u32,

    /// Ticks to coast after the script, before rendering
    #[arg(short, long, default_value = "0")]
    frames: u32,

    /// Press the brake once after accelerating
    #[arg(long)]
    brake: bool,

    /// Activate the left turn signal
    #[arg(long, conflicts_with = "right")]
    left: bool,

    /// Activate the right turn signal
    #[arg(long)]
    right: bool,

    /// Starting fuel level in percent
    #[arg(long)]
    fuel: Option<f64>,

    /// Config file path (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long, default_value = "dashboard.png")]
    output: PathBuf,

    /// Override the window width
    #[arg(long)]
    width: Option<u32>,

    /// Override the window height
    #[arg(long)]
    height: Option<u32>,

    /// Print text placements to stdout
    #[arg(long)]
    labels: bool,

    /// Print the effective configuration as YAML and exit
    #[arg(long)]
    print_config: bool,
}

fn init_logger() {
    // RUST_LOG is applied on top of the Info default.
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

fn load_config(cli: &Cli) -> Result<DashboardConfig> {
    let mut config = match &cli.config {
        Some(path) => DashboardConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => DashboardConfig::default_path()
            .map(DashboardConfig::load_or_default)
            .unwrap_or_default(),
    };

    if let Some(width) = cli.width {
        config.layout.width = width;
    }
    if let Some(height) = cli.height {
        config.layout.height = height;
    }
    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn simulate(cli: &Cli) -> DashboardState {
    let mut state = DashboardState::new();
    if let Some(fuel) = cli.fuel {
        state.set_fuel(fuel);
    }

    state.run(&Controls::ACCELERATE, cli.accelerate_frames);
    if cli.brake {
        state.brake();
    }
    if cli.left {
        state.signal_left();
    }
    if cli.right {
        state.signal_right();
    }
    state.run(&Controls::default(), cli.frames);
    state
}

fn main() -> Result<()> {
    init_logger();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    if cli.print_config {
        print!("{}", config.to_yaml()?);
        return Ok(());
    }

    let dashboard = Dashboard::new(&config)?;
    let state = simulate(&cli);

    let layout = dashboard.layout();
    let mut fb = Framebuffer::new(layout.width, layout.height)?;
    let labels = dashboard.render(&mut Canvas::new(&mut fb), &state);

    PngEncoder::write_to_file(&fb, &cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    log::info!(
        "rendered {}x{} frame to {} (speed {:.1} km/h, rpm {:.2}, fuel {:.1}%)",
        fb.width(),
        fb.height(),
        cli.output.display(),
        state.speed,
        state.rpm,
        state.fuel
    );

    if cli.labels {
        for label in &labels {
            println!("{:>8.1} {:>8.1}  {}", label.position.x, label.position.y, label.text);
        }
    }

    Ok(())
}
