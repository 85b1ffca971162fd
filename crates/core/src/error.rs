use crate::leaderboard::record::MatchId;

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// The guessed name is not in the catalog. Re-prompt the player.
    #[error("{0} is not a place I know. Pick one from the list.")]
    UnknownCity(String),

    /// Competitive matches need a non-blank player name.
    #[error("Enter a player name to start a competitive match.")]
    InvalidPlayerName,

    /// A record that was just submitted could not be found again.
    #[error("Leaderboard record not found: {0}")]
    RecordNotFound(MatchId),

    #[error("The place catalog is empty")]
    EmptyCatalog,

    #[error("No round is in progress")]
    NoActiveRound,

    /// The current round has not been won, or its result has not been
    /// folded into the match yet.
    #[error("The current round is not finished")]
    RoundInProgress,

    #[error("Leaderboard store error: {0}")]
    Store(#[from] StoreError),
}

impl GameError {
    /// Errors the player can fix by entering something else.
    pub fn is_user_error(&self) -> bool {
        matches!(self, GameError::UnknownCity(_) | GameError::InvalidPlayerName)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The file already holds rows written with a different column layout.
    #[error("Leaderboard columns do not match, found: {0}")]
    HeaderMismatch(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
