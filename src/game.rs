use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::food::Food;
use crate::grid::Grid;
use crate::input::Direction;
use crate::snake::{Snake, StepResult};

/// Heading of a freshly spawned snake.
pub const START_DIRECTION: Direction = Direction::Right;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Over,
}

/// Why the round ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EndReason {
    SelfCollision,
    /// The snake covers every cell, leaving nowhere to put food.
    BoardFilled,
}

/// Complete mutable game state for one round.
#[derive(Debug, Clone)]
pub struct GameState {
    snake: Snake,
    food: Food,
    score: u32,
    tick_count: u64,
    status: GameStatus,
    end_reason: Option<EndReason>,
    grid: Grid,
    rng: StdRng,
}

impl GameState {
    /// Creates a new round with an entropy-seeded generator.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self::with_rng(grid, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(grid: Grid, seed: u64) -> Self {
        Self::with_rng(grid, StdRng::seed_from_u64(seed))
    }

    /// Creates a running state from explicit pieces.
    ///
    /// The caller is responsible for keeping `food` off the snake.
    #[must_use]
    pub fn from_parts(grid: Grid, snake: Snake, food: Food, seed: u64) -> Self {
        Self {
            snake,
            food,
            score: 0,
            tick_count: 0,
            status: GameStatus::Running,
            end_reason: None,
            grid,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn with_rng(grid: Grid, mut rng: StdRng) -> Self {
        let (snake, food) = fresh_round(grid, &mut rng);

        Self {
            snake,
            food,
            score: 0,
            tick_count: 0,
            status: GameStatus::Running,
            end_reason: None,
            grid,
            rng,
        }
    }

    /// Advances the round by one tick, applying at most one turn request.
    pub fn tick(&mut self, requested: Option<Direction>) {
        if self.status == GameStatus::Over {
            return;
        }

        self.tick_count += 1;

        if let Some(direction) = requested {
            self.snake.turn(direction);
        }

        if self.snake.step(self.grid) == StepResult::Collided {
            self.finish(EndReason::SelfCollision);
            return;
        }

        if self.snake.head() == self.food.position {
            self.snake.grow();
            self.score += 1;
            debug!(
                "food eaten at ({}, {}), score {}",
                self.food.position.x, self.food.position.y, self.score
            );

            if !self.food.relocate(&mut self.rng, self.grid, &self.snake) {
                self.finish(EndReason::BoardFilled);
            }
        }
    }

    /// Discards the round and starts a fresh one on the same grid.
    ///
    /// Food placement keeps drawing from the same generator.
    pub fn reset(&mut self) {
        info!("round reset after {} ticks, score {}", self.tick_count, self.score);

        let (snake, food) = fresh_round(self.grid, &mut self.rng);
        self.snake = snake;
        self.food = food;
        self.score = 0;
        self.tick_count = 0;
        self.status = GameStatus::Running;
        self.end_reason = None;
    }

    fn finish(&mut self, reason: EndReason) {
        info!("game over ({reason:?}) with score {}", self.score);
        self.status = GameStatus::Over;
        self.end_reason = Some(reason);
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[must_use]
    pub fn food(&self) -> Food {
        self.food
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    /// Returns why the round ended, or `None` while running.
    #[must_use]
    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    /// Ticks processed in the current round.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }
}

/// Spawns the length-1 snake at the grid center and food off it.
fn fresh_round(grid: Grid, rng: &mut StdRng) -> (Snake, Food) {
    let snake = Snake::new(grid.center(), START_DIRECTION);
    // `Grid::new` enforces at least 2x2 cells, so a one-cell snake always
    // leaves a free cell and the fallback is never taken. (0, 0) is never
    // the center of such a grid either.
    let food = Food::spawn(rng, grid, &snake).unwrap_or(Food::at(grid.wrap(0, 0)));

    (snake, food)
}
