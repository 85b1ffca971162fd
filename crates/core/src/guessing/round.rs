//! A single round: one target, guesses until the player names it.

use std::sync::Arc;

use balaton_places::{LocationCatalog, Place};
use chrono::{DateTime, Utc};

use crate::{
    error::{GameError, Result},
    guessing::feedback::{self, Feedback},
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RoundStatus {
    Active,
    Won { elapsed_seconds: f64 },
}

#[derive(Clone, Debug)]
pub struct RoundState {
    target: Arc<Place>,
    guess_count: u32,
    started_at: DateTime<Utc>,
    status: RoundStatus,
    // every accepted guess in order, for drawing the path to the target
    trail: Vec<Arc<Place>>,
}

impl RoundState {
    pub fn start(target: Arc<Place>, now: DateTime<Utc>) -> Self {
        tracing::debug!(started_at = %now, "round started");

        Self {
            target,
            guess_count: 0,
            started_at: now,
            status: RoundStatus::Active,
            trail: Vec::new(),
        }
    }

    /// Check a guess against the target.
    ///
    /// Unknown names are rejected without touching the round. The caller must
    /// not submit guesses once the round is won.
    pub fn submit_guess(
        &mut self,
        guess_name: &str,
        catalog: &dyn LocationCatalog,
        now: DateTime<Utc>,
    ) -> Result<Feedback> {
        debug_assert!(self.is_active(), "guess submitted to a finished round");

        let Some(guess) = catalog.lookup(guess_name) else {
            tracing::debug!(guess = guess_name, "rejected unknown place");
            return Err(GameError::UnknownCity(guess_name.to_string()));
        };

        self.guess_count += 1;
        let feedback = feedback::evaluate(&guess, &self.target);
        self.trail.push(guess);

        if feedback.is_match {
            let elapsed_seconds = elapsed_seconds(self.started_at, now);
            self.status = RoundStatus::Won { elapsed_seconds };

            tracing::info!(guesses = self.guess_count, elapsed_seconds, "round won");
        } else {
            tracing::debug!(
                guesses = self.guess_count,
                distance_km = feedback.distance_km,
                direction = %feedback.direction,
                "hint"
            );
        }

        Ok(feedback)
    }

    pub fn target(&self) -> &Arc<Place> {
        &self.target
    }

    pub fn guess_count(&self) -> u32 {
        self.guess_count
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == RoundStatus::Active
    }

    /// Seconds the round took, once won.
    pub fn elapsed_seconds(&self) -> Option<f64> {
        match self.status {
            RoundStatus::Active => None,
            RoundStatus::Won { elapsed_seconds } => Some(elapsed_seconds),
        }
    }

    pub fn trail(&self) -> &[Arc<Place>] {
        &self.trail
    }
}

/// Wall-clock seconds between two instants, never negative.
pub(crate) fn elapsed_seconds(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    let millis = (to - from).num_milliseconds();
    (millis as f64 / 1000.0).max(0.0)
}
