//! Match orchestration: one casual round or a run of competitive rounds.
//!
//! All progress lives in an explicit [`MatchState`] owned by the controller.
//! A UI that redraws between interactions can take the state out with
//! [`MatchController::take_state`] and hand it back with
//! [`MatchController::restore`].

use chrono::{DateTime, DurationRound, TimeDelta, Utc};
use rand::RngCore;

use balaton_places::LocationCatalog;

use crate::{
    config::GameConfig,
    error::{GameError, Result},
    guessing::{feedback::Feedback, round::RoundState},
    leaderboard::{
        Leaderboard, Standing,
        record::{MatchId, MatchRecord},
        store::RecordStore,
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum MatchMode {
    /// One anonymous round, never ranked
    Casual,
    /// Several rounds under a player name, ranked on the leaderboard
    Competitive,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchPhase {
    NotStarted,
    /// `round_index` is 1-based
    InProgress { round_index: u32 },
    Complete,
}

#[derive(Clone, Debug)]
pub struct MatchState {
    id: MatchId,
    mode: MatchMode,
    player_name: Option<String>,
    rounds: u32,
    phase: MatchPhase,
    round: Option<RoundState>,
    total_guesses: u32,
    total_time_seconds: f64,
    started_at: DateTime<Utc>,
}

impl MatchState {
    pub fn id(&self) -> MatchId {
        self.id
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn player_name(&self) -> Option<&str> {
        self.player_name.as_deref()
    }

    /// Rounds this match consists of
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// The round currently being played
    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    pub fn total_guesses(&self) -> u32 {
        self.total_guesses
    }

    pub fn total_time_seconds(&self) -> f64 {
        self.total_time_seconds
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn is_complete(&self) -> bool {
        self.phase == MatchPhase::Complete
    }
}

/// Totals of a finished match, plus its leaderboard placement when ranked.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchSummary {
    pub total_guesses: u32,
    pub total_time_seconds: f64,
    pub record: Option<MatchRecord>,
    pub standing: Option<Standing>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum MatchProgress {
    NextRound { round_index: u32 },
    Complete(MatchSummary),
}

#[derive(Clone, Debug)]
pub enum GuessOutcome {
    Hint(Feedback),
    RoundWon {
        feedback: Feedback,
        /// The finished round, trail included
        round: RoundState,
        progress: MatchProgress,
    },
}

pub struct MatchController<S> {
    config: GameConfig,
    leaderboard: Leaderboard<S>,
    state: Option<MatchState>,
}

impl<S: RecordStore> MatchController<S> {
    pub fn new(config: GameConfig, store: S) -> Self {
        let leaderboard = Leaderboard::with_top_n(store, config.leaderboard_top_n);

        Self {
            config,
            leaderboard,
            state: None,
        }
    }

    pub fn leaderboard(&self) -> &Leaderboard<S> {
        &self.leaderboard
    }

    pub fn state(&self) -> Option<&MatchState> {
        self.state.as_ref()
    }

    /// Hand the match over to the caller, leaving the controller idle.
    pub fn take_state(&mut self) -> Option<MatchState> {
        self.state.take()
    }

    /// Resume a match previously taken with [`take_state`](Self::take_state).
    pub fn restore(&mut self, state: MatchState) {
        self.state = Some(state);
    }

    /// Throw away any match in progress. Calling it again is a no-op.
    pub fn reset(&mut self) {
        if let Some(state) = self.state.take() {
            tracing::info!(match_id = %state.id, phase = ?state.phase, "match discarded");
        }
    }

    /// Begin a new match, discarding any previous one.
    ///
    /// Competitive matches need a non-blank player name, stored trimmed.
    /// Casual matches are anonymous and ignore `player_name`.
    pub fn start_match(
        &mut self,
        mode: MatchMode,
        player_name: &str,
        now: DateTime<Utc>,
    ) -> Result<&MatchState> {
        let (player_name, rounds) = match mode {
            MatchMode::Casual => (None, 1),
            MatchMode::Competitive => {
                let name = player_name.trim();
                if name.is_empty() {
                    return Err(GameError::InvalidPlayerName);
                }
                (Some(name.to_string()), self.config.competitive_rounds.max(1))
            }
        };

        self.reset();

        let state = MatchState {
            id: MatchId::new(),
            mode,
            player_name,
            rounds,
            phase: MatchPhase::NotStarted,
            round: None,
            total_guesses: 0,
            total_time_seconds: 0.0,
            started_at: now,
        };

        tracing::info!(match_id = %state.id, %mode, rounds, "match started");

        Ok(&*self.state.insert(state))
    }

    /// Sample a fresh target and start the next round.
    ///
    /// Called once after [`start_match`](Self::start_match); later rounds are
    /// started by [`on_round_won`](Self::on_round_won). Fails with
    /// [`GameError::RoundInProgress`] while a round is still held, won or not.
    pub fn advance_round(
        &mut self,
        catalog: &dyn LocationCatalog,
        rng: &mut dyn RngCore,
        now: DateTime<Utc>,
    ) -> Result<&RoundState> {
        let state = self.state.as_mut().ok_or(GameError::NoActiveRound)?;
        if state.round.is_some() {
            return Err(GameError::RoundInProgress);
        }

        let round_index = match state.phase {
            MatchPhase::NotStarted => 1,
            MatchPhase::InProgress { round_index } if round_index < state.rounds => round_index + 1,
            _ => return Err(GameError::NoActiveRound),
        };

        let target = catalog.sample_one(rng).ok_or(GameError::EmptyCatalog)?;

        tracing::debug!(match_id = %state.id, round_index, "round advanced");

        state.phase = MatchPhase::InProgress { round_index };
        Ok(&*state.round.insert(RoundState::start(target, now)))
    }

    /// Play one guess against the current round.
    ///
    /// A matching guess closes the round and moves the match on. If that step
    /// fails the won round stays in the match; retry with
    /// [`on_round_won`](Self::on_round_won).
    pub fn submit_guess(
        &mut self,
        guess_name: &str,
        catalog: &dyn LocationCatalog,
        rng: &mut dyn RngCore,
        now: DateTime<Utc>,
    ) -> Result<GuessOutcome> {
        let round = self
            .state
            .as_mut()
            .and_then(|s| s.round.as_mut())
            .filter(|r| r.is_active())
            .ok_or(GameError::NoActiveRound)?;

        let feedback = round.submit_guess(guess_name, catalog, now)?;
        if !feedback.is_match {
            return Ok(GuessOutcome::Hint(feedback));
        }

        let round = round.clone();
        let progress = self.on_round_won(catalog, rng, now)?;

        Ok(GuessOutcome::RoundWon {
            feedback,
            round,
            progress,
        })
    }

    /// Fold the won round into the match totals and move on.
    ///
    /// After the last round the match is complete and, in competitive mode,
    /// submitted to the leaderboard and ranked. The match only changes once the
    /// record is stored, so a failed submission can be retried by calling this
    /// again.
    pub fn on_round_won(
        &mut self,
        catalog: &dyn LocationCatalog,
        rng: &mut dyn RngCore,
        now: DateTime<Utc>,
    ) -> Result<MatchProgress> {
        let state = self.state.as_mut().ok_or(GameError::NoActiveRound)?;
        let MatchPhase::InProgress { round_index } = state.phase else {
            return Err(GameError::NoActiveRound);
        };
        let round = state.round.as_ref().ok_or(GameError::NoActiveRound)?;
        if round.is_active() {
            return Err(GameError::RoundInProgress);
        }

        let mut finished = state.clone();
        finished.total_guesses += round.guess_count();
        finished.total_time_seconds += round.elapsed_seconds().unwrap_or(0.0);
        finished.round = None;

        let last = round_index >= state.rounds;
        let record = match (last, state.mode) {
            (true, MatchMode::Competitive) => Some(record_for(&finished)?),
            _ => None,
        };
        if let Some(record) = &record {
            self.leaderboard.submit(record)?;
        }

        tracing::info!(
            match_id = %finished.id,
            round_index,
            total_guesses = finished.total_guesses,
            total_time_seconds = finished.total_time_seconds,
            "round complete"
        );

        if !last {
            *state = finished;
            self.advance_round(catalog, rng, now)?;
            return Ok(MatchProgress::NextRound {
                round_index: round_index + 1,
            });
        }

        finished.phase = MatchPhase::Complete;
        let mut summary = MatchSummary {
            total_guesses: finished.total_guesses,
            total_time_seconds: finished.total_time_seconds,
            record: None,
            standing: None,
        };
        *state = finished;

        if let Some(record) = record {
            summary.standing = Some(self.leaderboard.standing(&record)?);
            summary.record = Some(record);
        }

        tracing::info!(
            completed_at = %now,
            total_guesses = summary.total_guesses,
            total_time_seconds = summary.total_time_seconds,
            "match complete"
        );

        Ok(MatchProgress::Complete(summary))
    }
}

fn record_for(state: &MatchState) -> Result<MatchRecord> {
    let player_name = state
        .player_name
        .clone()
        .ok_or(GameError::InvalidPlayerName)?;

    // Shown to people, so whole seconds are enough
    let played_at = state
        .started_at
        .duration_round(TimeDelta::seconds(1))
        .unwrap_or(state.started_at);

    Ok(MatchRecord {
        player_name,
        total_time_seconds: state.total_time_seconds,
        total_guesses: state.total_guesses,
        started_at: state.started_at,
        played_at,
        match_id: state.id,
    })
}
