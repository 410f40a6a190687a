use crate::error::LevelError;
use crate::food::place_food;
use crate::grid::ObstacleGrid;
use crate::input::InputMapper;
use crate::level::Level;
use crate::score::{current_score, BestScoreStore, ScoreTracker};
use crate::snake::Snake;
use crate::step::{Arena, Status, StepOutcome};
use crate::tile::{Direction, Tile};
use log::{info, warn};
use rand::Rng;
use std::time::Instant;

/// One running instance of the game: board, snake, food, status and the
/// best score, owned in one place and driven by the front-end.
pub struct Session<R = rand::rngs::ThreadRng> {
    level: Level,
    arena: Arena,
    status: Status,
    input: InputMapper,
    scores: ScoreTracker,
    rng: R,
}

impl<R: Rng> Session<R> {
    pub fn new(level: Level, store: Box<dyn BestScoreStore>, mut rng: R) -> Result<Self, LevelError> {
        let grid = level.build_grid()?;
        let snake = Snake::new(level.start, level.direction);
        let arena = spawn(grid, snake, &mut rng).ok_or(LevelError::NoRoomForFood)?;
        info!("starting {} level, {}x{} tiles", level.name, level.width, level.height);
        Ok(Session {
            level,
            arena,
            status: Status::Running,
            input: InputMapper::default(),
            scores: ScoreTracker::new(store),
            rng,
        })
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn grid(&self) -> &ObstacleGrid {
        &self.arena.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.arena.snake
    }

    pub fn food(&self) -> Tile {
        self.arena.food
    }

    pub fn score(&self) -> u32 {
        current_score(&self.arena.snake)
    }

    pub fn best_score(&self) -> u32 {
        self.scores.best()
    }

    pub fn level_name(&self) -> &str {
        self.level.name
    }

    /// Steers the snake. Ignored unless the game is running.
    pub fn turn(&mut self, requested: Direction, now: Instant) {
        if self.status != Status::Running {
            return;
        }
        let moving = self.arena.snake.direction();
        if let Some(next) = self.input.apply_direction(moving, requested, now) {
            self.arena.snake.turn(next);
        }
    }

    /// Pauses or resumes play; on a finished game, starts a new one.
    pub fn toggle(&mut self) {
        match self.status {
            Status::Running => {
                info!("paused");
                self.status = Status::Paused;
            }
            Status::Paused => {
                info!("resumed");
                self.status = Status::Running;
            }
            Status::GameOver => {
                self.reset();
            }
        }
    }

    /// Starts over from the level's restart tile. Only a finished game can
    /// be reset; returns whether it was.
    pub fn reset(&mut self) -> bool {
        if self.status != Status::GameOver {
            return false;
        }
        let snake = Snake::new(self.level.restart, self.level.direction);
        match spawn(self.arena.grid.clone(), snake, &mut self.rng) {
            Some(arena) => {
                self.arena = arena;
                self.input.reset();
                self.status = Status::Running;
                info!("new game");
                true
            }
            None => {
                warn!("no room for food on reset");
                false
            }
        }
    }

    /// Advances one tick. Returns `None` when not running.
    pub fn tick(&mut self) -> Option<StepOutcome> {
        if self.status != Status::Running {
            return None;
        }
        let outcome = self.arena.step(&mut self.rng);
        self.status = outcome.status;
        let score = self.score();
        if outcome.status == Status::GameOver {
            info!("game over with score {score} ({:?})", outcome.signal);
        }
        // Saved as soon as it's beaten, so quitting mid-game keeps it.
        self.scores.record(score);
        Some(outcome)
    }
}

fn spawn<R: Rng + ?Sized>(grid: ObstacleGrid, snake: Snake, rng: &mut R) -> Option<Arena> {
    let food = place_food(rng, &snake, &grid).ok()?;
    Some(Arena { grid, snake, food })
}
