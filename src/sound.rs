use crate::step::{Signal, Status, StepOutcome};
use std::io::{self, Write};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Eat,
    Collide,
    GameOver,
}

/// Cues to play for one tick, in order.
pub fn cues(outcome: StepOutcome) -> Vec<Cue> {
    let mut cues = Vec::with_capacity(2);
    match outcome.signal {
        Signal::Ate => cues.push(Cue::Eat),
        Signal::Collided => cues.push(Cue::Collide),
        Signal::None | Signal::BoardFull => {}
    }
    if outcome.status == Status::GameOver {
        cues.push(Cue::GameOver);
    }
    cues
}

pub trait CuePlayer {
    fn play(&mut self, cue: Cue) -> io::Result<()>;
}

/// Rings the terminal bell: once for food, twice for a crash and three
/// times when the game ends.
pub struct Bell<W: Write> {
    out: W,
}

impl<W: Write> Bell<W> {
    pub fn new(out: W) -> Self {
        Bell { out }
    }
}

impl<W: Write> CuePlayer for Bell<W> {
    fn play(&mut self, cue: Cue) -> io::Result<()> {
        let rings = match cue {
            Cue::Eat => 1,
            Cue::Collide => 2,
            Cue::GameOver => 3,
        };
        self.out.write_all(&[0x07; 3][..rings])?;
        self.out.flush()
    }
}

/// Swallows every cue.
pub struct Mute;

impl CuePlayer for Mute {
    fn play(&mut self, _cue: Cue) -> io::Result<()> {
        Ok(())
    }
}
