use std::collections::VecDeque;

use crate::grid::{Cell, Grid};
use crate::input::{Direction, direction_change_is_valid};

/// Outcome of one movement step.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StepResult {
    Moved,
    Collided,
}

/// Snake body (head first), heading and one-shot growth flag.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    growth_pending: bool,
}

impl Snake {
    /// Creates a one-cell snake at `start` with the provided direction.
    #[must_use]
    pub fn new(start: Cell, direction: Direction) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self {
            body,
            direction,
            growth_pending: false,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>, direction: Direction) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");

        Self {
            body: VecDeque::from(segments),
            direction,
            growth_pending: false,
        }
    }

    /// Advances one cell in the current direction.
    ///
    /// On `Collided` nothing is mutated, so the last valid body stays
    /// available for display.
    pub fn step(&mut self, grid: Grid) -> StepResult {
        let next_head = self.next_head(grid);

        if self.body.iter().skip(1).any(|segment| *segment == next_head) {
            return StepResult::Collided;
        }

        self.body.push_front(next_head);
        if self.growth_pending {
            self.growth_pending = false;
        } else {
            let _ = self.body.pop_back();
        }

        StepResult::Moved
    }

    /// Returns the head cell for the next step, wrapped onto the grid.
    #[must_use]
    pub fn next_head(&self, grid: Grid) -> Cell {
        let head = self.head();
        let (dx, dy) = self.direction.delta();
        grid.wrap(head.x + dx, head.y + dy)
    }

    /// Flags growth for the next step. Repeated calls still grow by one.
    pub fn grow(&mut self) {
        self.growth_pending = true;
    }

    /// Changes heading unless `direction` reverses the current one.
    pub fn turn(&mut self, direction: Direction) {
        if direction_change_is_valid(self.direction, direction) {
            self.direction = direction;
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        // `new` and `from_segments` guarantee a head, and `step` never pops
        // below the freshly pushed one.
        self.body[0]
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn growth_pending(&self) -> bool {
        self.growth_pending
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}
