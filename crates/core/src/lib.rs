pub mod config;
pub mod error;
pub mod guessing;
pub mod leaderboard;

// Re-export places from the places crate
pub use balaton_places as places;

pub use config::GameConfig;
pub use error::{GameError, Result, StoreError};
pub use guessing::{
    Direction, Feedback, GuessOutcome, MatchController, MatchMode, MatchPhase, MatchProgress,
    MatchState, MatchSummary, RoundState, RoundStatus,
};
pub use leaderboard::{
    Leaderboard, Standing, TimeRanking,
    record::{MatchId, MatchRecord},
    store::{CsvStore, MemoryStore, RecordStore},
};
