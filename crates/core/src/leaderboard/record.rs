use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of one match, generated when the match starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(Uuid);

impl MatchId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MatchId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for MatchId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A finished competitive match. Field order is the on-disk column order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub player_name: String,
    pub total_time_seconds: f64,
    pub total_guesses: u32,
    pub started_at: DateTime<Utc>,
    pub played_at: DateTime<Utc>,
    pub match_id: MatchId,
}

impl MatchRecord {
    /// Column names of the persisted table, in order.
    pub const COLUMNS: [&'static str; 6] = [
        "playerName",
        "totalTimeSeconds",
        "totalGuesses",
        "startedAt",
        "playedAt",
        "matchId",
    ];
}
