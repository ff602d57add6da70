//! Shared types used by the scheduler subsystem.

use std::collections::HashMap;

use serde::Serialize;

use session::model::ParticipantId;

use crate::search::DEFAULT_ATTEMPTS;

/// Unordered pair of two distinct participants.
///
/// Normalized at construction so that equality and hashing are
/// independent of argument order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Pair {
    a: ParticipantId,
    b: ParticipantId,
}

impl Pair {
    pub fn new(x: ParticipantId, y: ParticipantId) -> Self {
        debug_assert!(x != y, "a pair needs two distinct participants");
        if x <= y {
            Self { a: x, b: y }
        } else {
            Self { a: y, b: x }
        }
    }

    pub fn members(&self) -> (ParticipantId, ParticipantId) {
        (self.a, self.b)
    }

    pub fn contains(&self, id: ParticipantId) -> bool {
        self.a == id || self.b == id
    }
}

/// One seating assignment: every active participant mapped to a 0-based
/// table index. Produced once and appended to history, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Round {
    seating: HashMap<ParticipantId, usize>,
}

impl Round {
    pub(crate) fn from_tables(tables: &[Vec<ParticipantId>]) -> Self {
        let mut seating = HashMap::new();
        for (idx, table) in tables.iter().enumerate() {
            for &id in table {
                seating.insert(id, idx);
            }
        }
        Self { seating }
    }

    pub fn table_of(&self, id: ParticipantId) -> Option<usize> {
        self.seating.get(&id).copied()
    }

    pub fn contains(&self, id: ParticipantId) -> bool {
        self.seating.contains_key(&id)
    }

    /// Number of participants seated this round.
    pub fn len(&self) -> usize {
        self.seating.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seating.is_empty()
    }

    pub fn table_count(&self) -> usize {
        self.seating.values().copied().max().map_or(0, |m| m + 1)
    }

    /// Recover the grouped tables, ordered by table index with members
    /// sorted by id. Used when recomputing co-seatings from history.
    pub fn tables(&self) -> Vec<Vec<ParticipantId>> {
        let mut tables = vec![Vec::new(); self.table_count()];
        for (&id, &idx) in &self.seating {
            tables[idx].push(id);
        }
        for table in &mut tables {
            table.sort_unstable();
        }
        tables
    }

    pub fn iter(&self) -> impl Iterator<Item = (ParticipantId, usize)> + '_ {
        self.seating.iter().map(|(&id, &idx)| (id, idx))
    }
}

/// Construction-time knobs for a [`SessionScheduler`](crate::engine::SessionScheduler).
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// Number of tables available, N >= 1.
    pub table_count: usize,

    /// Seats per table, M >= 1.
    pub seat_capacity: usize,

    /// Randomized trials per generated round.
    pub attempts: usize,

    /// Seed for the scheduler-owned RNG. Fixed so identical inputs yield
    /// identical schedules.
    pub seed: u64,
}

impl SchedulerConfig {
    pub fn new(table_count: usize, seat_capacity: usize) -> Self {
        Self {
            table_count,
            seat_capacity,
            attempts: DEFAULT_ATTEMPTS,
            seed: 42,
        }
    }

    pub fn with_attempts(mut self, attempts: usize) -> Self {
        self.attempts = attempts;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Why no round was produced. All of these are routine outcomes the
/// caller branches on, never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NoRoundReason {
    /// Fewer than 2 active participants.
    InsufficientParticipants,
    /// Every possible pair over the current roster has already met.
    CoverageExhausted,
    /// The attempts budget produced no partition with a positive score.
    SearchExhausted,
    /// The round-bound cap has been reached.
    RoundLimitReached,
}

/// Outcome of a round request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextRound {
    Seated(Round),
    NoRound(NoRoundReason),
}

impl NextRound {
    pub fn is_seated(&self) -> bool {
        matches!(self, NextRound::Seated(_))
    }

    pub fn round(&self) -> Option<&Round> {
        match self {
            NextRound::Seated(round) => Some(round),
            NextRound::NoRound(_) => None,
        }
    }
}

/// Derived snapshot of session progress. Recomputed on every call,
/// never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionStats {
    pub participants: usize,
    pub rounds_generated: usize,
    /// Hard cap on rounds for the roster as it has grown so far.
    pub round_bound: usize,
    /// C(participants, 2) over the current roster.
    pub possible_pairs: usize,
    /// Met pairs restricted to the current roster.
    pub met_pairs: usize,
    /// Current roster members who have met at least one other.
    pub participants_met: usize,
    pub coverage: f64,
    pub table_count: usize,
    pub seat_capacity: usize,
}

/// Pairs co-seated more than once, recomputed from round history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepeatReport {
    /// (pair, co-seating count) with count > 1, descending by count.
    pub repeated: Vec<(Pair, usize)>,
    /// Share of all co-seatings that were repeats, in percent.
    pub duplicate_pct: f64,
}

impl RepeatReport {
    pub fn is_clean(&self) -> bool {
        self.repeated.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_equality_ignores_order() {
        assert_eq!(Pair::new(3, 9), Pair::new(9, 3));
        assert_eq!(Pair::new(3, 9).members(), (3, 9));
    }

    #[test]
    fn round_groups_tables_by_index() {
        let round = Round::from_tables(&[vec![4, 1], vec![3, 2]]);

        assert_eq!(round.table_of(1), Some(0));
        assert_eq!(round.table_of(3), Some(1));
        assert_eq!(round.table_count(), 2);
        assert_eq!(round.tables(), vec![vec![1, 4], vec![2, 3]]);
    }
}
