use clap::{Parser, Subcommand};
use constellation_core::{DisplayList, EngineConfig, Simulation};
use glam::Vec2;
use std::path::{Path, PathBuf};
use std::time::Instant;

mod app;
mod paint;

#[derive(Parser)]
#[command(name = "constellation")]
#[command(about = "Constellation - an interactive field of connected particles", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a window and run the particle field
    Run {
        /// JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Rebuild the field whenever the configuration file changes
        #[arg(short, long, requires = "config")]
        watch: bool,
    },
    /// Run frames without a window and print a summary
    Headless {
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(short, long, default_value_t = 600)]
        frames: usize,
        #[arg(long, default_value_t = 1280.0)]
        width: f32,
        #[arg(long, default_value_t = 720.0)]
        height: f32,
    },
    /// Validate a configuration file and print the effective settings
    Config {
        file: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { config, watch } => app::run_window(config, watch),
        Commands::Headless {
            config,
            frames,
            width,
            height,
        } => run_headless(config.as_deref(), frames, width, height),
        Commands::Config { file } => print_config(file.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

pub(crate) fn load_config(path: Option<&Path>) -> Result<EngineConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(EngineConfig::from_json_file(path)?),
        None => Ok(EngineConfig::default()),
    }
}

fn run_headless(
    config: Option<&Path>,
    frames: usize,
    width: f32,
    height: f32,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config)?;
    let size = Vec2::new(width, height);
    let mut sim = Simulation::new(config, DisplayList::new(), size)?;

    // Synthetic 60 Hz timestamps keep runs reproducible
    let frame_ms = 1000.0 / 60.0;
    let started = Instant::now();
    for frame in 1..=frames {
        sim.run_frame(frame as f64 * frame_ms, size);
    }
    let elapsed = started.elapsed();

    let list = sim.renderer();
    println!("frames = {}", frames);
    println!("particles = {}", sim.particles().len());
    println!("circles = {}", list.circles().count());
    println!("connectors = {}", list.lines().count());
    if frames > 0 {
        println!(
            "avg_frame_ms = {:.4}",
            elapsed.as_secs_f64() * 1000.0 / frames as f64
        );
    }

    Ok(())
}

fn print_config(file: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(file)?;
    println!("{}", config.to_json_string()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_watch_requires_config() {
        assert!(Cli::try_parse_from(["constellation", "run", "--watch"]).is_err());
        assert!(Cli::try_parse_from(["constellation", "run", "--config", "a.json", "--watch"]).is_ok());
    }

    #[test]
    fn test_headless_run_with_defaults() {
        run_headless(None, 30, 320.0, 246.0).expect("headless run failed");
    }
}
