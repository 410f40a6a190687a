mod config;
mod error;
mod food;
mod game;
mod grid;
mod input;
mod level;
mod score;
mod session;
mod snake;
mod sound;
mod step;
mod tile;

use clap::Parser;
use config::Options;
use level::Level;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use score::{BestScoreStore, FileStore, MemoryStore};
use simplelog::{Config, WriteLogger};
use sound::{Bell, CuePlayer, Mute};
use std::error::Error;
use std::fs::File;
use std::io::stdout;

fn main() -> Result<(), Box<dyn Error>> {
    let opts = Options::parse();

    // The terminal belongs to the game, so logs go to a file.
    WriteLogger::init(opts.log_level, Config::default(), File::create(&opts.log_file)?)?;
    info!("starting snekarena with {opts:?}");

    let level = Level::of(opts.level);
    let store: Box<dyn BestScoreStore> = match opts.score_file.clone() {
        Some(path) => Box::new(FileStore::new(path)),
        None => match level.score_file {
            Some(path) => Box::new(FileStore::new(path)),
            None => Box::new(MemoryStore::default()),
        },
    };
    let rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let session = session::Session::new(level, store, rng)?;

    if opts.mute {
        run(session, Mute)
    } else {
        run(session, Bell::new(stdout()))
    }
}

fn run<P: CuePlayer>(session: session::Session<StdRng>, player: P) -> Result<(), Box<dyn Error>> {
    let mut game = game::Game::new(session, player);
    game.run()?;
    Ok(())
}
