use crate::level::LevelKind;
use clap::Parser;
use simplelog::LevelFilter;
use std::path::PathBuf;

/// Snake on a wraparound board, with an obstacle level and a saved best score.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Options {
    /// Board layout to play
    #[arg(short, long, value_enum, default_value_t = LevelKind::Classic)]
    pub level: LevelKind,

    /// File holding the best score. The hard level saves to
    /// `hard_level_best_score.txt` by default; classic keeps it in memory.
    #[arg(long, value_name = "PATH")]
    pub score_file: Option<PathBuf>,

    /// Seed for food placement, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Don't ring the terminal bell
    #[arg(short, long)]
    pub mute: bool,

    #[arg(long, value_name = "PATH", default_value = "snekarena.log")]
    pub log_file: PathBuf,

    #[arg(long, value_name = "LEVEL", default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}
