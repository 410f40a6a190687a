use crate::error::LevelError;
use crate::tile::Tile;

/// Level-static obstacle map. Once built it is never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObstacleGrid {
    width: u16,
    height: u16,
    cells: Vec<bool>,
}

impl ObstacleGrid {
    pub fn new<I>(width: u16, height: u16, obstacles: I) -> Result<Self, LevelError>
    where
        I: IntoIterator<Item = Tile>,
    {
        if width == 0 || height == 0 {
            return Err(LevelError::EmptyBoard { width, height });
        }
        let mut cells = vec![false; usize::from(width) * usize::from(height)];
        for tile in obstacles {
            if tile.x >= width || tile.y >= height {
                return Err(LevelError::OutOfBounds { tile, width, height });
            }
            cells[usize::from(tile.y) * usize::from(width) + usize::from(tile.x)] = true;
        }
        Ok(ObstacleGrid { width, height, cells })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn tile_count(&self) -> usize {
        self.cells.len()
    }

    /// Tiles outside the board are never obstacles.
    pub fn is_obstacle(&self, x: u16, y: u16) -> bool {
        x < self.width
            && y < self.height
            && self.cells[usize::from(y) * usize::from(self.width) + usize::from(x)]
    }

    pub fn contains(&self, tile: Tile) -> bool {
        tile.x < self.width && tile.y < self.height
    }

    pub fn obstacles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.tiles().filter(|t| self.is_obstacle(t.x, t.y))
    }

    /// Every tile of the board, row by row.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Tile::new(x, y)))
    }
}
