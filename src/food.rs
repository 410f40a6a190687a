use crate::error::FoodError;
use crate::grid::ObstacleGrid;
use crate::snake::Snake;
use crate::tile::Tile;
use log::{debug, warn};
use rand::seq::IteratorRandom;
use rand::Rng;

/// Rejection-sampling attempts per board tile before giving up on luck.
const ATTEMPTS_PER_TILE: usize = 4;

fn is_free(tile: Tile, snake: &Snake, grid: &ObstacleGrid) -> bool {
    !grid.is_obstacle(tile.x, tile.y) && !snake.occupies(tile)
}

/// Picks a tile that holds neither an obstacle nor any part of the snake.
///
/// Candidates are drawn uniformly over the whole board and redrawn on a
/// hit. On a crowded board the sampling is capped; past the cap the free
/// tiles are enumerated and one is chosen uniformly, so the call always
/// terminates.
pub fn place_food<R: Rng + ?Sized>(
    rng: &mut R,
    snake: &Snake,
    grid: &ObstacleGrid,
) -> Result<Tile, FoodError> {
    let attempts = grid.tile_count() * ATTEMPTS_PER_TILE;
    for _ in 0..attempts {
        let candidate = Tile::new(rng.gen_range(0..grid.width()), rng.gen_range(0..grid.height()));
        if is_free(candidate, snake, grid) {
            return Ok(candidate);
        }
    }

    debug!("food sampling exhausted {attempts} attempts, scanning free tiles");
    match grid.tiles().filter(|&t| is_free(t, snake, grid)).choose(rng) {
        Some(tile) => Ok(tile),
        None => {
            warn!("board is full, nowhere to place food");
            Err(FoodError::BoardFull)
        }
    }
}
