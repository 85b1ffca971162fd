use std::path::PathBuf;

use serde::Deserialize;

use crate::leaderboard::DEFAULT_TOP_N;

/// Tunables for a game session. Every field has a default, so a partial JSON
/// file only overrides what it names.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Rounds in a competitive match
    pub competitive_rounds: u32,

    /// Rows shown in the fastest-times table
    pub leaderboard_top_n: usize,

    /// Where finished competitive matches are appended
    pub leaderboard_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            competitive_rounds: 3,
            leaderboard_top_n: DEFAULT_TOP_N,
            leaderboard_path: PathBuf::from("leaderboard.csv"),
        }
    }
}
