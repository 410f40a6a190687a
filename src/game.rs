use crate::input::Command;
use crate::session::Session;
use crate::sound::{cues, CuePlayer};
use crate::step::Status;
use crate::tile::Tile;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType},
};
use log::{info, warn};
use rand::Rng;
use std::io::{stdout, Stdout, Write};
use std::time::{Duration, Instant};

/// Time between two moves of the snake.
pub const TICK: Duration = Duration::from_millis(130);

const POLL: Duration = Duration::from_millis(20);

/// Terminal columns per tile, so the board looks roughly square.
const TILE_COLUMNS: u16 = 2;

/// Terminal front-end: reads keys, drives the session on a fixed tick and
/// draws the board.
pub struct Game<R, P> {
    session: Session<R>,
    player: P,
    last_update: Instant,
}

impl<R: Rng, P: CuePlayer> Game<R, P> {
    pub fn new(session: Session<R>, player: P) -> Self {
        Game {
            session,
            player,
            last_update: Instant::now(),
        }
    }

    fn update(&mut self) {
        let Some(outcome) = self.session.tick() else {
            return;
        };
        for cue in cues(outcome) {
            if let Err(e) = self.player.play(cue) {
                warn!("could not play {cue:?}: {e}");
            }
        }
    }

    fn glyph(&self, tile: Tile) -> &'static str {
        let snake = self.session.snake();
        if snake.head() == tile {
            "@@"
        } else if snake.body().contains(&tile) {
            "oo"
        } else if self.session.food() == tile {
            "<>"
        } else if self.session.grid().is_obstacle(tile.x, tile.y) {
            "##"
        } else {
            "  "
        }
    }

    fn draw(&self, out: &mut Stdout) -> std::io::Result<()> {
        let grid = self.session.grid();
        let (width, height) = (grid.width(), grid.height());
        let right = width * TILE_COLUMNS + 1;
        execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;

        queue!(out, MoveTo(0, 0), Print(format!("+{}+", "-".repeat(usize::from(right - 1)))))?;
        for y in 0..height {
            queue!(out, MoveTo(0, y + 1), Print("|"))?;
            for x in 0..width {
                queue!(out, Print(self.glyph(Tile::new(x, y))))?;
            }
            queue!(out, Print("|"))?;
        }
        queue!(
            out,
            MoveTo(0, height + 1),
            Print(format!("+{}+", "-".repeat(usize::from(right - 1))))
        )?;

        let bottom = height + 2;
        queue!(
            out,
            MoveTo(0, bottom),
            Print(format!(
                "Level: {}  Score: {}  Best Score: {}",
                self.session.level_name(),
                self.session.score(),
                self.session.best_score()
            )),
        )?;
        let hint = match self.session.status() {
            Status::Running => "Arrow keys/WASD to move, space to pause, 'q' to quit",
            Status::Paused => "Game Paused - press space to resume",
            Status::GameOver => "Game Over! Press space to play again, 'q' to quit",
        };
        queue!(out, MoveTo(0, bottom + 1), Print(hint))?;

        out.flush()
    }

    /// Handles one key. Returns `false` when the player wants out.
    fn handle(&mut self, command: Command) -> bool {
        match command {
            Command::Turn(direction) => self.session.turn(direction, Instant::now()),
            Command::Toggle => {
                self.session.toggle();
                self.last_update = Instant::now();
            }
            Command::Quit => return false,
        }
        true
    }

    fn play(&mut self, out: &mut Stdout) -> std::io::Result<()> {
        self.draw(out)?;

        loop {
            if event::poll(POLL)? {
                if let Event::Key(key_event) = event::read()? {
                    if let Some(command) = Command::from_key_event(key_event) {
                        if !self.handle(command) {
                            return Ok(());
                        }
                        self.draw(out)?;
                    }
                }
            }

            if self.last_update.elapsed() >= TICK {
                self.update();
                self.draw(out)?;
                self.last_update = Instant::now();
            }
        }
    }

    pub fn run(&mut self) -> std::io::Result<()> {
        let mut out = stdout();
        terminal::enable_raw_mode()?;
        execute!(out, Hide)?;

        let result = self.play(&mut out);

        // Put the terminal back even when the game loop failed.
        let restored = terminal::disable_raw_mode().and(execute!(out, Show));
        result?;
        restored?;

        info!(
            "quit with score {} and best score {}",
            self.session.score(),
            self.session.best_score()
        );
        println!(
            "\nFinal score: {}  Best score: {}",
            self.session.score(),
            self.session.best_score()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use crate::score::MemoryStore;
    use crate::sound::Cue;
    use crate::tile::Direction;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    #[derive(Default)]
    struct Recorder(Vec<Cue>);

    impl CuePlayer for Recorder {
        fn play(&mut self, cue: Cue) -> std::io::Result<()> {
            self.0.push(cue);
            Ok(())
        }
    }

    fn game(level: Level) -> Game<ChaCha12Rng, Recorder> {
        let session = Session::new(
            level,
            Box::new(MemoryStore::default()),
            ChaCha12Rng::seed_from_u64(RNG_SEED),
        )
        .unwrap();
        Game::new(session, Recorder::default())
    }

    /// A board where food has exactly one free tile to go to.
    fn cramped(width: u16, height: u16, obstacles: Vec<Tile>) -> Level {
        Level {
            name: "cramped",
            width,
            height,
            obstacles,
            start: Tile::new(0, 0),
            restart: Tile::new(0, 0),
            direction: Direction::Right,
            score_file: None,
        }
    }

    #[test]
    fn crash_plays_collide_then_game_over() {
        // Food can only go to (0,1); the first move right hits (1,0).
        let mut game = game(cramped(2, 2, vec![Tile::new(1, 0), Tile::new(1, 1)]));
        assert_eq!(game.session.food(), Tile::new(0, 1));
        game.update();
        assert_eq!(game.session.status(), Status::GameOver);
        assert_eq!(game.player.0, vec![Cue::Collide, Cue::GameOver]);
    }

    #[test]
    fn eating_into_obstacle_plays_eat_then_game_over() {
        // Food starts on (1,0), the snake reaches it, eats, then hits (2,0).
        let mut game = game(cramped(3, 1, vec![Tile::new(2, 0)]));
        assert_eq!(game.session.food(), Tile::new(1, 0));
        game.update();
        assert!(game.player.0.is_empty());
        game.update();
        assert_eq!(game.session.status(), Status::GameOver);
        assert_eq!(game.player.0, vec![Cue::Eat, Cue::GameOver]);
    }

    #[test]
    fn paused_game_plays_nothing() {
        let mut game = game(Level::classic());
        assert!(game.handle(Command::Toggle));
        game.update();
        assert!(game.player.0.is_empty());
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut game = game(Level::classic());
        assert!(game.handle(Command::Turn(Direction::Up)));
        assert!(!game.handle(Command::Quit));
    }

    #[test]
    fn glyphs_follow_the_board() {
        let game = game(Level::hard());
        assert_eq!(game.glyph(Tile::new(0, 5)), "@@");
        assert_eq!(game.glyph(Tile::new(0, 0)), "##");
        assert_eq!(game.glyph(game.session.food()), "<>");
    }
}
