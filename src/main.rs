use std::fs::File;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

use snake_tui::app::SnakeApp;
use snake_tui::config::GameConfig;

#[derive(Parser)]
#[command(name = "snake-tui", version, about = "Grid snake in the terminal")]
struct Cli {
    /// Board width and height, in cells
    #[arg(long, default_value_t = 40)]
    grid_size: i16,

    /// Game steps per second
    #[arg(long, default_value_t = 15)]
    fps: u64,

    /// Initial snake length
    #[arg(long, default_value_t = 4)]
    length: usize,

    /// Log file path (the terminal itself is in raw mode)
    #[arg(long, default_value = "snake-tui.log")]
    log_file: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    WriteLogger::init(
        LevelFilter::Debug,
        Config::default(),
        File::create(&cli.log_file)
            .with_context(|| format!("creating log file {}", cli.log_file))?,
    )
    .context("initializing logger")?;

    let config = GameConfig {
        grid_size: cli.grid_size,
        fps: cli.fps,
        initial_snake_length: cli.length,
        ..GameConfig::default()
    };
    info!(
        "starting with a {0}x{0} grid at {1} steps per second",
        config.grid_size, config.fps
    );

    SnakeApp::new(config)?.run()
}
