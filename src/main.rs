use std::fs::File;
use std::path::PathBuf;
use std::thread;
use std::time::Instant;

use clap::Parser;
use log::{LevelFilter, error, info};
use simplelog::{Config, WriteLogger};
use torus_snake::config::{
    DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_TICK_INTERVAL_MS, FRAME_SLEEP,
    tick_interval,
};
use torus_snake::error::AppError;
use torus_snake::game::GameState;
use torus_snake::grid::Grid;
use torus_snake::input::{GameInput, InputHandler};
use torus_snake::terminal_runtime::{self, TerminalSession};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Grid width in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
    width: u16,

    /// Grid height in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT)]
    height: u16,

    /// Fixed seed for reproducible food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between game ticks.
    #[arg(long = "tick-ms", default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_ms: u64,

    /// Write log records to this file.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Minimum level written to the log file.
    #[arg(long = "log-level", default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        WriteLogger::init(cli.log_level, Config::default(), File::create(path)?)?;
    }

    let grid = Grid::new(cli.width, cli.height)?;
    let state = match cli.seed {
        Some(seed) => GameState::new_with_seed(grid, seed),
        None => GameState::new(grid),
    };
    info!(
        "starting {}x{} round, seed {:?}, tick {} ms",
        grid.width(),
        grid.height(),
        cli.seed,
        cli.tick_ms
    );

    if let Err(failure) = run(state, &cli) {
        terminal_runtime::restore();
        error!("driver stopped: {failure}");
        return Err(failure);
    }

    info!("exiting");
    Ok(())
}

fn run(mut state: GameState, cli: &Cli) -> Result<(), AppError> {
    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new();

    let interval = tick_interval(cli.tick_ms);
    let mut last_tick = Instant::now();

    loop {
        session.draw(&state)?;

        match input.poll_input()? {
            Some(GameInput::Quit) => break,
            Some(GameInput::Reset) if state.is_over() => {
                state.reset();
                input.take_direction();
                last_tick = Instant::now();
            }
            _ => {}
        }

        if last_tick.elapsed() >= interval {
            state.tick(input.take_direction());
            last_tick = Instant::now();
        }

        thread::sleep(FRAME_SLEEP);
    }

    Ok(())
}
