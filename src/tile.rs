/// One grid cell, addressed in tiles rather than terminal columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    pub x: u16,
    pub y: u16,
}

impl Tile {
    pub const fn new(x: u16, y: u16) -> Self {
        Tile { x, y }
    }

    /// Moves one tile in `direction`, re-entering from the opposite edge
    /// when leaving a `width` x `height` board.
    pub fn wrapped_step(self, direction: Direction, width: u16, height: u16) -> Tile {
        let (dx, dy) = direction.delta();
        Tile {
            x: (i32::from(self.x) + dx).rem_euclid(i32::from(width)) as u16,
            y: (i32::from(self.y) + dy).rem_euclid(i32::from(height)) as u16,
        }
    }
}

impl From<(u16, u16)> for Tile {
    fn from((x, y): (u16, u16)) -> Self {
        Tile { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit velocity vector; `y` grows downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_inside_board() {
        let tile = Tile::new(1, 1);
        assert_eq!(tile.wrapped_step(Direction::Right, 3, 3), Tile::new(2, 1));
        assert_eq!(tile.wrapped_step(Direction::Up, 3, 3), Tile::new(1, 0));
    }

    #[test]
    fn wraps_on_every_edge() {
        assert_eq!(Tile::new(2, 1).wrapped_step(Direction::Right, 3, 3), Tile::new(0, 1));
        assert_eq!(Tile::new(0, 1).wrapped_step(Direction::Left, 3, 3), Tile::new(2, 1));
        assert_eq!(Tile::new(1, 0).wrapped_step(Direction::Up, 3, 3), Tile::new(1, 2));
        assert_eq!(Tile::new(1, 2).wrapped_step(Direction::Down, 3, 3), Tile::new(1, 0));
    }

    #[test]
    fn opposites_pair_up() {
        for dir in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            assert_eq!(dir.opposite().opposite(), dir);
            let (dx, dy) = dir.delta();
            assert_eq!(dir.opposite().delta(), (-dx, -dy));
        }
    }
}
