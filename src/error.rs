use std::io;

use thiserror::Error;

/// Rejected grid dimensions.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum GridError {
    #[error("grid dimensions must be non-zero (got {width}x{height})")]
    ZeroDimension { width: u16, height: u16 },
    #[error("grid {width}x{height} is too narrow; each side needs at least 2 cells")]
    TooNarrow { width: u16, height: u16 },
}

/// Errors surfaced by the terminal binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),
    #[error("failed to initialise logging: {0}")]
    Logger(#[from] log::SetLoggerError),
}
