use crate::error::ScoreError;
use crate::snake::Snake;
use log::{info, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Where the best score lives between sessions.
pub trait BestScoreStore {
    fn load(&self) -> Result<u32, ScoreError>;
    fn save(&mut self, best: u32) -> Result<(), ScoreError>;
}

/// Plain-text file holding a single integer. A missing file reads as 0.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }
}

impl BestScoreStore for FileStore {
    fn load(&self) -> Result<u32, ScoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(source) => return Err(ScoreError::Io { path: self.path.clone(), source }),
        };
        text.trim().parse().map_err(|source| ScoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&mut self, best: u32) -> Result<(), ScoreError> {
        fs::write(&self.path, best.to_string()).map_err(|source| ScoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Keeps the best score for the lifetime of the process only.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    best: u32,
}

impl BestScoreStore for MemoryStore {
    fn load(&self) -> Result<u32, ScoreError> {
        Ok(self.best)
    }

    fn save(&mut self, best: u32) -> Result<(), ScoreError> {
        self.best = best;
        Ok(())
    }
}

/// Score of a snake: its body length, head excluded.
pub fn current_score(snake: &Snake) -> u32 {
    u32::try_from(snake.len()).unwrap_or(u32::MAX)
}

pub fn update_best(best: u32, current: u32) -> u32 {
    best.max(current)
}

pub struct ScoreTracker {
    best: u32,
    store: Box<dyn BestScoreStore>,
}

impl ScoreTracker {
    /// Reads the stored best score. Failures are logged and read as 0.
    pub fn new(store: Box<dyn BestScoreStore>) -> Self {
        let best = match store.load() {
            Ok(best) => {
                info!("loaded best score {best}");
                best
            }
            Err(e) => {
                warn!("{e}; starting from a best score of 0");
                0
            }
        };
        ScoreTracker { best, store }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Folds a finished game's score into the best score, saving it when
    /// it improved. Returns whether it did.
    pub fn record(&mut self, score: u32) -> bool {
        let best = update_best(self.best, score);
        if best == self.best {
            return false;
        }
        self.best = best;
        info!("new best score {best}");
        if let Err(e) = self.store.save(best) {
            warn!("could not save best score: {e}");
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::{Direction, Tile};

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("snekarena-{}-{name}", std::process::id()))
    }

    #[test]
    fn score_is_body_length() {
        let snake = Snake::with_body(Tile::new(0, 0), Direction::Right, [Tile::new(1, 0), Tile::new(2, 0)]);
        assert_eq!(current_score(&snake), 2);
        assert_eq!(current_score(&Snake::new(Tile::new(0, 0), Direction::Up)), 0);
    }

    #[test]
    fn best_never_decreases() {
        let mut tracker = ScoreTracker::new(Box::new(MemoryStore::default()));
        let mut last = tracker.best();
        for score in [3, 1, 7, 0, 7, 2, 9, 4] {
            tracker.record(score);
            assert!(tracker.best() >= last);
            assert!(tracker.best() >= score);
            last = tracker.best();
        }
        assert_eq!(tracker.best(), 9);
    }

    #[test]
    fn file_store_round_trips() {
        let path = temp_path("round-trip");
        let mut store = FileStore::new(&path);
        store.save(42).unwrap();
        assert_eq!(FileStore::new(&path).load().unwrap(), 42);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn best_survives_reload() {
        let path = temp_path("reload");
        let mut tracker = ScoreTracker::new(Box::new(FileStore::new(&path)));
        assert_eq!(tracker.best(), 0);
        assert!(tracker.record(12));
        assert!(!tracker.record(5));

        let reloaded = ScoreTracker::new(Box::new(FileStore::new(&path)));
        assert_eq!(reloaded.best(), 12);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_reads_zero() {
        let store = FileStore::new(temp_path("missing"));
        assert_eq!(store.load().unwrap(), 0);
    }

    #[test]
    fn garbage_file_falls_back_to_zero() {
        let path = temp_path("garbage");
        fs::write(&path, "not a number").unwrap();
        assert!(matches!(FileStore::new(&path).load(), Err(ScoreError::Parse { .. })));
        assert_eq!(ScoreTracker::new(Box::new(FileStore::new(&path))).best(), 0);

        fs::write(&path, "-3").unwrap();
        assert_eq!(ScoreTracker::new(Box::new(FileStore::new(&path))).best(), 0);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn unreadable_store_falls_back_to_zero() {
        // A directory can't be read as a file.
        let store = FileStore::new(std::env::temp_dir());
        assert!(matches!(store.load(), Err(ScoreError::Io { .. })));
        assert_eq!(ScoreTracker::new(Box::new(store)).best(), 0);
    }
}
