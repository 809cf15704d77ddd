use log::{debug, warn};
use rand::Rng;

use crate::grid::{Cell, Grid};
use crate::snake::Snake;

/// Random draws tried before falling back to enumerating free cells.
pub const MAX_SAMPLING_ATTEMPTS: usize = 64;

/// The single food cell currently on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Cell,
}

impl Food {
    /// Creates food at `position`.
    #[must_use]
    pub fn at(position: Cell) -> Self {
        Self { position }
    }

    /// Places food on a cell the snake does not occupy.
    ///
    /// Returns `None` when the snake covers the whole grid.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, grid: Grid, snake: &Snake) -> Option<Self> {
        free_position(rng, grid, snake).map(Self::at)
    }

    /// Moves the food to a cell the snake does not occupy.
    ///
    /// Returns `false`, leaving the food in place, when no free cell exists.
    pub fn relocate<R: Rng + ?Sized>(&mut self, rng: &mut R, grid: Grid, snake: &Snake) -> bool {
        match free_position(rng, grid, snake) {
            Some(position) => {
                debug!("food relocated to ({}, {})", position.x, position.y);
                self.position = position;
                true
            }
            None => false,
        }
    }
}

/// Picks a cell not occupied by the snake.
///
/// Uniform rejection sampling, bounded by [`MAX_SAMPLING_ATTEMPTS`]; past
/// that the free cells are enumerated and one is chosen uniformly. Sampling
/// is skipped when the snake could cover every cell.
#[must_use]
pub fn free_position<R: Rng + ?Sized>(rng: &mut R, grid: Grid, snake: &Snake) -> Option<Cell> {
    let attempts = if snake.len() < grid.total_cells() {
        MAX_SAMPLING_ATTEMPTS
    } else {
        0
    };

    for _ in 0..attempts {
        let candidate = grid.random_cell(rng);
        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }

    let candidates: Vec<Cell> = grid.cells().filter(|cell| !snake.occupies(*cell)).collect();
    if candidates.is_empty() {
        return None;
    }

    warn!(
        "food sampling gave up after {attempts} draws; choosing from {} free cells",
        candidates.len()
    );

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}
