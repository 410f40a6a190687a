use crate::error::FoodError;
use crate::food::place_food;
use crate::grid::ObstacleGrid;
use crate::snake::Snake;
use crate::tile::Tile;
use log::{debug, info};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Running,
    Paused,
    GameOver,
}

/// What a tick did, for the audio and score collaborators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    None,
    Ate,
    Collided,
    /// Food could not be placed anywhere; the game is over.
    BoardFull,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    pub signal: Signal,
    pub status: Status,
}

impl StepOutcome {
    fn running(signal: Signal) -> Self {
        StepOutcome { signal, status: Status::Running }
    }

    fn over(signal: Signal) -> Self {
        StepOutcome { signal, status: Status::GameOver }
    }
}

/// Everything the step function moves or reads: the level's obstacles,
/// the snake and the food.
#[derive(Clone, Debug)]
pub struct Arena {
    pub grid: ObstacleGrid,
    pub snake: Snake,
    pub food: Tile,
}

impl Arena {
    /// Advances the snake by one tick.
    ///
    /// Food under the head is eaten first, growing the tail and placing
    /// new food. The body then shifts up behind the head, the head's next
    /// tile is computed with wraparound, and an obstacle there ends the
    /// game without moving the head. Otherwise the head moves and a hit
    /// on its own body ends the game.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> StepOutcome {
        let mut ate = false;
        if self.snake.head() == self.food {
            self.snake.grow_at(self.food);
            ate = true;
            match place_food(rng, &self.snake, &self.grid) {
                Ok(food) => self.food = food,
                Err(FoodError::BoardFull) => {
                    // Final state: the new tail still sits under the head.
                    info!("snake filled the board at length {}", self.snake.len());
                    return StepOutcome::over(Signal::BoardFull);
                }
            }
            debug!("ate, length {} new food at {:?}", self.snake.len(), self.food);
        }

        self.snake.shift_body();

        let direction = self.snake.commit_turn();
        let next = self.snake.head().wrapped_step(direction, self.grid.width(), self.grid.height());
        if self.grid.is_obstacle(next.x, next.y) {
            debug!("head hit obstacle at {next:?}");
            return StepOutcome::over(if ate { Signal::Ate } else { Signal::Collided });
        }

        self.snake.move_head(next);

        if self.snake.head_on_body() {
            debug!("head ran into body at {next:?}");
            return StepOutcome::over(Signal::Collided);
        }

        StepOutcome::running(if ate { Signal::Ate } else { Signal::None })
    }
}
