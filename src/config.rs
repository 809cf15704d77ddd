use std::time::Duration;

/// Default grid width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 40;

/// Default grid height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 30;

/// Base tick interval in milliseconds (10 ticks per second).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Minimum tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 30;

/// Delay between frames while waiting for the next tick.
pub const FRAME_SLEEP: Duration = Duration::from_millis(16);

/// Terminal columns used per grid cell, keeping cells roughly square.
pub const CELL_WIDTH: u16 = 2;

/// Glyph drawn for one occupied grid cell (snake segment or food).
pub const GLYPH_CELL: &str = "██";

/// Returns the tick interval for a requested duration, clamped to the minimum.
#[must_use]
pub fn tick_interval(requested_ms: u64) -> Duration {
    Duration::from_millis(requested_ms.max(MIN_TICK_INTERVAL_MS))
}
