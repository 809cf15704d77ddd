//! Snake on a wrap-around grid.
//!
//! The gameplay model (`grid`, `snake`, `food`, `game`) has no notion of
//! terminals or wall-clock time; `renderer` and `terminal_runtime` are the
//! thin layer the binary drives it with.

pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
