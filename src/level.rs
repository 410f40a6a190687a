use crate::error::LevelError;
use crate::grid::ObstacleGrid;
use crate::tile::{Direction, Tile};
use clap::ValueEnum;

/// Best-score file the hard level uses unless told otherwise.
pub const HARD_SCORE_FILE: &str = "hard_level_best_score.txt";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LevelKind {
    /// Open 12x12 board
    Classic,
    /// 15x15 board with a fixed obstacle layout
    Hard,
}

/// Everything that tells one level apart from another.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    pub name: &'static str,
    pub width: u16,
    pub height: u16,
    pub obstacles: Vec<Tile>,
    pub start: Tile,
    pub restart: Tile,
    pub direction: Direction,
    /// Persist the best score to this file by default.
    pub score_file: Option<&'static str>,
}

impl Level {
    pub fn of(kind: LevelKind) -> Level {
        match kind {
            LevelKind::Classic => Level::classic(),
            LevelKind::Hard => Level::hard(),
        }
    }

    pub fn classic() -> Level {
        Level {
            name: "classic",
            width: 12,
            height: 12,
            obstacles: Vec::new(),
            start: Tile::new(0, 5),
            restart: Tile::new(1, 5),
            direction: Direction::Right,
            score_file: None,
        }
    }

    pub fn hard() -> Level {
        #[rustfmt::skip]
        let obstacles: [(u16, u16); 32] = [
            // top-left corner
            (0, 0), (1, 0), (2, 0), (0, 1), (0, 2),
            (5, 4), (5, 5), (4, 5),
            // bottom-left corner
            (0, 12), (0, 13), (0, 14), (1, 14), (2, 14),
            (9, 4), (9, 5), (10, 5),
            // bottom-right corner
            (12, 14), (13, 14), (14, 14), (14, 12), (14, 13),
            (9, 10), (9, 9), (10, 9),
            // top-right corner
            (14, 0), (14, 1), (14, 2), (13, 0), (12, 0),
            (5, 10), (5, 9), (4, 9),
        ];
        Level {
            name: "hard",
            width: 15,
            height: 15,
            obstacles: obstacles.into_iter().map(Tile::from).collect(),
            start: Tile::new(0, 5),
            restart: Tile::new(1, 5),
            direction: Direction::Right,
            score_file: Some(HARD_SCORE_FILE),
        }
    }

    /// Builds the obstacle grid, checking that the snake can spawn.
    pub fn build_grid(&self) -> Result<ObstacleGrid, LevelError> {
        let grid = ObstacleGrid::new(self.width, self.height, self.obstacles.iter().copied())?;
        for tile in [self.start, self.restart] {
            if !grid.contains(tile) {
                return Err(LevelError::OutOfBounds {
                    tile,
                    width: self.width,
                    height: self.height,
                });
            }
            if grid.is_obstacle(tile.x, tile.y) {
                return Err(LevelError::StartOnObstacle(tile));
            }
        }
        if grid.tile_count() - grid.obstacles().count() < 2 {
            return Err(LevelError::NoRoomForFood);
        }
        Ok(grid)
    }
}
