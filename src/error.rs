use crate::tile::Tile;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("failed to access score file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("score file {} does not hold a non-negative integer: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FoodError {
    #[error("no free tile left for food")]
    BoardFull,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LevelError {
    #[error("board must be at least 1x1 tiles, got {width}x{height}")]
    EmptyBoard { width: u16, height: u16 },
    #[error("tile ({}, {}) lies outside the {width}x{height} board", .tile.x, .tile.y)]
    OutOfBounds { tile: Tile, width: u16, height: u16 },
    #[error("snake start ({}, {}) is on an obstacle", .0.x, .0.y)]
    StartOnObstacle(Tile),
    #[error("level leaves no free tile for food")]
    NoRoomForFood,
}
