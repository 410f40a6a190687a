use crate::tile::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use std::time::{Duration, Instant};

/// Minimum wall-clock time between two accepted turns.
pub const TURN_COOLDOWN: Duration = Duration::from_millis(130);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    /// Pause/resume while playing, restart once the game is over.
    Toggle,
    Quit,
}

impl Command {
    pub fn from_key_event(event: KeyEvent) -> Option<Command> {
        if event.kind == KeyEventKind::Release {
            return None;
        }
        match event.code {
            KeyCode::Up | KeyCode::Char('w') => Some(Command::Turn(Direction::Up)),
            KeyCode::Down | KeyCode::Char('s') => Some(Command::Turn(Direction::Down)),
            KeyCode::Left | KeyCode::Char('a') => Some(Command::Turn(Direction::Left)),
            KeyCode::Right | KeyCode::Char('d') => Some(Command::Turn(Direction::Right)),
            KeyCode::Char(' ') => Some(Command::Toggle),
            KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Turns key presses into the snake's next velocity.
#[derive(Clone, Debug)]
pub struct InputMapper {
    cooldown: Duration,
    last_turn: Option<Instant>,
}

impl Default for InputMapper {
    fn default() -> Self {
        InputMapper::new(TURN_COOLDOWN)
    }
}

impl InputMapper {
    pub fn new(cooldown: Duration) -> Self {
        InputMapper { cooldown, last_turn: None }
    }

    /// Accepts or refuses a turn to `requested`, asked for at `now`, while
    /// the snake is travelling `moving`. Returns the accepted direction.
    ///
    /// `moving` is the direction of the last move, not a pending turn, so
    /// two turns queued within one tick can't add up to a reversal. Any
    /// turn arriving within the cooldown of the last accepted one is
    /// refused too.
    pub fn apply_direction(
        &mut self,
        moving: Direction,
        requested: Direction,
        now: Instant,
    ) -> Option<Direction> {
        let cooling = self
            .last_turn
            .is_some_and(|last| now.saturating_duration_since(last) < self.cooldown);
        if cooling || requested == moving.opposite() {
            return None;
        }
        self.last_turn = Some(now);
        Some(requested)
    }

    pub fn reset(&mut self) {
        self.last_turn = None;
    }
}
