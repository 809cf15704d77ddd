use rand::Rng;

use crate::error::GridError;

/// Smallest accepted grid side, in cells.
pub const MIN_SIDE: u16 = 2;

/// Grid cell in logical coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Bounded toroidal coordinate space.
///
/// Dimensions are validated once in [`Grid::new`]; every other operation is
/// infallible.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Grid {
    width: u16,
    height: u16,
}

impl Grid {
    /// Creates a grid of `width` x `height` cells.
    ///
    /// Both sides must be at least 2 cells: on a 1-wide axis a sideways step
    /// wraps the head back onto itself.
    pub fn new(width: u16, height: u16) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::ZeroDimension { width, height });
        }

        if width < MIN_SIDE || height < MIN_SIDE {
            return Err(GridError::TooNarrow { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(self) -> u16 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> u16 {
        self.height
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Returns the spawn cell for a fresh snake.
    #[must_use]
    pub fn center(self) -> Cell {
        Cell {
            x: i32::from(self.width / 2),
            y: i32::from(self.height / 2),
        }
    }

    /// Reduces arbitrary coordinates onto the torus.
    #[must_use]
    pub fn wrap(self, x: i32, y: i32) -> Cell {
        Cell {
            x: x.rem_euclid(i32::from(self.width)),
            y: y.rem_euclid(i32::from(self.height)),
        }
    }

    /// Returns true when `cell` lies inside the grid.
    #[must_use]
    pub fn contains(self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && cell.x < i32::from(self.width)
            && cell.y < i32::from(self.height)
    }

    /// Samples one cell uniformly.
    pub fn random_cell<R: Rng + ?Sized>(self, rng: &mut R) -> Cell {
        Cell {
            x: rng.gen_range(0..i32::from(self.width)),
            y: rng.gen_range(0..i32::from(self.height)),
        }
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let width = i32::from(self.width);
        let height = i32::from(self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Cell { x, y }))
    }
}
