pub mod feedback;
pub mod round;
pub mod session;

pub use feedback::{Direction, Feedback, evaluate};
pub use round::{RoundState, RoundStatus};
pub use session::{
    GuessOutcome, MatchController, MatchMode, MatchPhase, MatchProgress, MatchState, MatchSummary,
};
