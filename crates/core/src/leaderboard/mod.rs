//! Ranking of finished competitive matches.
//!
//! Two orderings are kept: fastest total time (ties broken by fewer guesses)
//! and fewest guesses (ties broken by faster time). Both sorts are stable, so
//! rows that tie on both keys keep their append order.

use std::cmp::Ordering;

use crate::{
    error::{GameError, Result},
    leaderboard::{
        record::{MatchId, MatchRecord},
        store::RecordStore,
    },
};

pub mod record;
pub mod store;

pub const DEFAULT_TOP_N: usize = 10;

/// Position by time plus the current top of the time table.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeRanking {
    pub position: usize,
    pub top: Vec<MatchRecord>,
}

/// Where a finished match landed on both tables.
#[derive(Clone, Debug, PartialEq)]
pub struct Standing {
    pub by_time: usize,
    pub by_guesses: usize,
    pub top_by_time: Vec<MatchRecord>,
}

fn by_time(a: &MatchRecord, b: &MatchRecord) -> Ordering {
    a.total_time_seconds
        .total_cmp(&b.total_time_seconds)
        .then(a.total_guesses.cmp(&b.total_guesses))
}

fn by_guesses(a: &MatchRecord, b: &MatchRecord) -> Ordering {
    a.total_guesses
        .cmp(&b.total_guesses)
        .then(a.total_time_seconds.total_cmp(&b.total_time_seconds))
}

/// 1-based position of the first row with `id`.
fn position_of(sorted: &[MatchRecord], id: MatchId) -> Result<usize> {
    sorted
        .iter()
        .position(|r| r.match_id == id)
        .map(|index| index + 1)
        .ok_or(GameError::RecordNotFound(id))
}

pub struct Leaderboard<S> {
    store: S,
    top_n: usize,
}

impl<S: RecordStore> Leaderboard<S> {
    pub fn new(store: S) -> Self {
        Self::with_top_n(store, DEFAULT_TOP_N)
    }

    pub fn with_top_n(store: S, top_n: usize) -> Self {
        Self { store, top_n }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Append a finished match. Repeated identities are stored as separate rows.
    pub fn submit(&mut self, record: &MatchRecord) -> Result<()> {
        self.store.append(record)?;

        tracing::info!(
            match_id = %record.match_id,
            player = %record.player_name,
            total_guesses = record.total_guesses,
            total_time_seconds = record.total_time_seconds,
            "submitted leaderboard record"
        );

        Ok(())
    }

    fn sorted(&self, compare: fn(&MatchRecord, &MatchRecord) -> Ordering) -> Result<Vec<MatchRecord>> {
        let mut records = self.store.load_all()?;
        records.sort_by(compare);
        Ok(records)
    }

    pub fn rank_by_time(&self, record: &MatchRecord) -> Result<TimeRanking> {
        let mut sorted = self.sorted(by_time)?;
        let position = position_of(&sorted, record.match_id)?;
        sorted.truncate(self.top_n);

        Ok(TimeRanking {
            position,
            top: sorted,
        })
    }

    pub fn rank_by_guesses(&self, record: &MatchRecord) -> Result<usize> {
        let sorted = self.sorted(by_guesses)?;
        position_of(&sorted, record.match_id)
    }

    /// Both rankings for one record.
    pub fn standing(&self, record: &MatchRecord) -> Result<Standing> {
        let TimeRanking { position, top } = self.rank_by_time(record)?;
        let by_guesses = self.rank_by_guesses(record)?;

        Ok(Standing {
            by_time: position,
            by_guesses,
            top_by_time: top,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaderboard::store::MemoryStore;
    use chrono::{Duration, TimeZone, Utc};

    fn record(player: &str, time: f64, guesses: u32) -> MatchRecord {
        let started_at = Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap();
        MatchRecord {
            player_name: player.to_string(),
            total_time_seconds: time,
            total_guesses: guesses,
            started_at,
            played_at: started_at,
            match_id: MatchId::new(),
        }
    }

    fn board(records: &[MatchRecord]) -> Leaderboard<MemoryStore> {
        let mut board = Leaderboard::new(MemoryStore::new());
        for r in records {
            board.submit(r).unwrap();
        }
        board
    }

    #[test]
    fn test_rank_by_time_breaks_ties_on_guesses() {
        let a = record("a", 30.0, 6);
        let b = record("b", 20.0, 10);
        let c = record("c", 30.0, 5);
        let board = board(&[a.clone(), b.clone(), c.clone()]);

        let ranking = board.rank_by_time(&c).unwrap();
        assert_eq!(ranking.position, 2);
        assert_eq!(ranking.top, vec![b.clone(), c.clone(), a.clone()]);

        assert_eq!(board.rank_by_time(&b).unwrap().position, 1);
        assert_eq!(board.rank_by_time(&a).unwrap().position, 3);
    }

    #[test]
    fn test_rank_by_guesses_breaks_ties_on_time() {
        let a = record("a", 30.0, 6);
        let b = record("b", 20.0, 10);
        let c = record("c", 30.0, 5);
        let d = record("d", 25.0, 6);
        let board = board(&[a.clone(), b.clone(), c.clone(), d.clone()]);

        assert_eq!(board.rank_by_guesses(&c).unwrap(), 1);
        assert_eq!(board.rank_by_guesses(&d).unwrap(), 2);
        assert_eq!(board.rank_by_guesses(&a).unwrap(), 3);
        assert_eq!(board.rank_by_guesses(&b).unwrap(), 4);
    }

    #[test]
    fn test_full_ties_keep_append_order() {
        let first = record("first", 42.0, 7);
        let second = record("second", 42.0, 7);
        let board = board(&[first.clone(), second.clone()]);

        assert_eq!(board.rank_by_time(&first).unwrap().position, 1);
        assert_eq!(board.rank_by_time(&second).unwrap().position, 2);
        assert_eq!(board.rank_by_guesses(&second).unwrap(), 2);
    }

    #[test]
    fn test_top_is_truncated() {
        let records: Vec<MatchRecord> = (0..15)
            .map(|i| record(&format!("p{i}"), 100.0 - i as f64, 3))
            .collect();
        let board = board(&records);

        let slowest = &records[0];
        let ranking = board.rank_by_time(slowest).unwrap();
        assert_eq!(ranking.position, 15);
        assert_eq!(ranking.top.len(), DEFAULT_TOP_N);
        assert_eq!(ranking.top[0].player_name, "p14");

        let mut short = Leaderboard::with_top_n(MemoryStore::new(), 3);
        for r in &records {
            short.submit(r).unwrap();
        }
        assert_eq!(short.top_n(), 3);
        assert_eq!(short.rank_by_time(slowest).unwrap().top.len(), 3);
    }

    #[test]
    fn test_missing_record() {
        let board = board(&[record("a", 30.0, 6)]);
        let stranger = record("b", 10.0, 3);

        assert!(matches!(
            board.rank_by_time(&stranger),
            Err(GameError::RecordNotFound(id)) if id == stranger.match_id
        ));
        assert!(matches!(
            board.rank_by_guesses(&stranger),
            Err(GameError::RecordNotFound(_))
        ));
    }

    #[test]
    fn test_same_start_time_does_not_collide() {
        // Two matches started in the same second still rank separately
        let mut fast = record("fast", 10.0, 3);
        let mut slow = record("slow", 50.0, 9);
        let started = Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap() + Duration::seconds(1);
        fast.started_at = started;
        slow.started_at = started;
        let board = board(&[slow.clone(), fast.clone()]);

        assert_eq!(board.rank_by_time(&slow).unwrap().position, 2);
        assert_eq!(board.rank_by_time(&fast).unwrap().position, 1);
    }

    #[test]
    fn test_standing_combines_both_tables() {
        let a = record("a", 30.0, 6);
        let b = record("b", 20.0, 10);
        let c = record("c", 30.0, 5);
        let board = board(&[a, b, c.clone()]);

        let standing = board.standing(&c).unwrap();
        assert_eq!(standing.by_time, 2);
        assert_eq!(standing.by_guesses, 1);
        assert_eq!(standing.top_by_time.len(), 3);
    }
}
