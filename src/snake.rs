use crate::tile::{Direction, Tile};
use std::collections::VecDeque;

/// The head plus the body segments behind it. `body[0]` is the segment
/// directly behind the head.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    head: Tile,
    body: VecDeque<Tile>,
    direction: Direction,
    next_direction: Direction,
}

impl Snake {
    pub fn new(head: Tile, direction: Direction) -> Self {
        Snake {
            head,
            body: VecDeque::new(),
            direction,
            next_direction: direction,
        }
    }

    pub fn head(&self) -> Tile {
        self.head
    }

    pub fn body(&self) -> &VecDeque<Tile> {
        &self.body
    }

    /// Direction of the last move.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Direction the next move will take.
    pub fn next_direction(&self) -> Direction {
        self.next_direction
    }

    pub fn turn(&mut self, direction: Direction) {
        self.next_direction = direction;
    }

    /// Makes the pending turn the direction of travel.
    pub fn commit_turn(&mut self) -> Direction {
        self.direction = self.next_direction;
        self.direction
    }

    /// Number of body segments, head excluded.
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn occupies(&self, tile: Tile) -> bool {
        self.tiles().any(|t| t == tile)
    }

    /// Appends a segment at the tail end.
    pub fn grow_at(&mut self, tile: Tile) {
        self.body.push_back(tile);
    }

    /// Moves every segment onto the spot of the one ahead of it, the first
    /// onto the head. The head itself is left in place.
    pub fn shift_body(&mut self) {
        if self.body.is_empty() {
            return;
        }
        self.body.push_front(self.head);
        self.body.pop_back();
    }

    pub fn move_head(&mut self, tile: Tile) {
        self.head = tile;
    }

    pub fn head_on_body(&self) -> bool {
        self.body.contains(&self.head)
    }

    /// Tiles taken by the snake, head first.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        std::iter::once(self.head).chain(self.body.iter().copied())
    }

    #[cfg(test)]
    pub(crate) fn with_body<I>(head: Tile, direction: Direction, body: I) -> Self
    where
        I: IntoIterator<Item = Tile>,
    {
        Snake {
            head,
            body: body.into_iter().collect(),
            direction,
            next_direction: direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_follows_segment_ahead() {
        let mut snake = Snake::with_body(
            Tile::new(3, 0),
            Direction::Right,
            [Tile::new(2, 0), Tile::new(1, 0), Tile::new(0, 0)],
        );
        snake.shift_body();
        let body: Vec<_> = snake.body().iter().copied().collect();
        assert_eq!(body, vec![Tile::new(3, 0), Tile::new(2, 0), Tile::new(1, 0)]);
        assert_eq!(snake.head(), Tile::new(3, 0));
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn shift_without_body_is_noop() {
        let mut snake = Snake::new(Tile::new(1, 1), Direction::Up);
        snake.shift_body();
        assert!(snake.body().is_empty());
    }

    #[test]
    fn growth_lands_on_tail() {
        let mut snake = Snake::with_body(Tile::new(2, 0), Direction::Right, [Tile::new(1, 0)]);
        snake.grow_at(Tile::new(2, 0));
        snake.shift_body();
        let body: Vec<_> = snake.body().iter().copied().collect();
        assert_eq!(body, vec![Tile::new(2, 0), Tile::new(1, 0)]);
    }

    #[test]
    fn turn_waits_for_commit() {
        let mut snake = Snake::new(Tile::new(1, 1), Direction::Right);
        snake.turn(Direction::Up);
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.next_direction(), Direction::Up);
        assert_eq!(snake.commit_turn(), Direction::Up);
        assert_eq!(snake.direction(), Direction::Up);
    }

    #[test]
    fn occupancy_covers_head_and_body() {
        let snake = Snake::with_body(Tile::new(0, 0), Direction::Left, [Tile::new(1, 0)]);
        assert!(snake.occupies(Tile::new(0, 0)));
        assert!(snake.occupies(Tile::new(1, 0)));
        assert!(!snake.occupies(Tile::new(2, 0)));
        assert_eq!(snake.tiles().count(), 2);
    }
}
