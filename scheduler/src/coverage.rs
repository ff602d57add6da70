//! Tracks which unordered participant pairs have ever shared a table.
//
//  This module is deliberately pure: no randomness, no IO.

use std::collections::{HashMap, HashSet};

use session::model::ParticipantId;

use crate::types::Pair;

/// All C(n, 2) pairs over the given roster, recomputed on demand; the
/// roster changes over time, so this is never cached across mutations.
pub fn all_pairs(roster: &[ParticipantId]) -> Vec<Pair> {
    let mut pairs = Vec::with_capacity(roster.len().saturating_sub(1) * roster.len() / 2);
    for (i, &a) in roster.iter().enumerate() {
        for &b in &roster[i + 1..] {
            pairs.push(Pair::new(a, b));
        }
    }
    pairs
}

/// Append-only (until reset) set of pairs that have ever shared a table.
///
/// Removing a participant from the roster never deletes their historical
/// pairs; the set only grows until an explicit [`reset`](Self::reset).
#[derive(Debug, Default, Clone)]
pub struct PairCoverage {
    met: HashSet<Pair>,
}

impl PairCoverage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every in-table pair as met. Idempotent.
    pub fn record_table(&mut self, table: &[ParticipantId]) {
        for (i, &a) in table.iter().enumerate() {
            for &b in &table[i + 1..] {
                self.met.insert(Pair::new(a, b));
            }
        }
    }

    pub fn has_met(&self, pair: Pair) -> bool {
        self.met.contains(&pair)
    }

    /// Total recorded pairs, including those involving departed
    /// participants.
    pub fn len(&self) -> usize {
        self.met.len()
    }

    pub fn is_empty(&self) -> bool {
        self.met.is_empty()
    }

    /// Met pairs restricted to the given roster.
    pub fn met_within(&self, roster: &[ParticipantId]) -> usize {
        all_pairs(roster)
            .into_iter()
            .filter(|p| self.met.contains(p))
            .count()
    }

    /// Fraction of currently possible pairs that have met. Defined as 1.0
    /// when fewer than 2 participants remain (nothing left to cover).
    pub fn coverage_fraction(&self, roster: &[ParticipantId]) -> f64 {
        let possible = all_pairs(roster);
        if possible.is_empty() {
            return 1.0;
        }
        let met = possible.iter().filter(|p| self.met.contains(p)).count();
        met as f64 / possible.len() as f64
    }

    /// Currently possible pairs that have never shared a table.
    pub fn unmet_pairs(&self, roster: &[ParticipantId]) -> Vec<Pair> {
        all_pairs(roster)
            .into_iter()
            .filter(|p| !self.met.contains(p))
            .collect()
    }

    /// Historical meeting count per participant, over everything recorded.
    pub fn meeting_counts(&self) -> HashMap<ParticipantId, usize> {
        let mut counts = HashMap::new();
        for pair in &self.met {
            let (a, b) = pair.members();
            *counts.entry(a).or_insert(0) += 1;
            *counts.entry(b).or_insert(0) += 1;
        }
        counts
    }

    /// Clear everything. Only used on a full session restart.
    pub fn reset(&mut self) {
        self.met.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_pairs_counts_combinations() {
        assert!(all_pairs(&[]).is_empty());
        assert!(all_pairs(&[1]).is_empty());
        assert_eq!(all_pairs(&[1, 2]).len(), 1);
        assert_eq!(all_pairs(&[1, 2, 3, 4, 5, 6]).len(), 15);
    }

    #[test]
    fn record_table_is_idempotent() {
        let mut cov = PairCoverage::new();
        cov.record_table(&[1, 2, 3]);
        cov.record_table(&[1, 2, 3]);

        assert_eq!(cov.len(), 3);
        assert!(cov.has_met(Pair::new(3, 1)));
    }

    #[test]
    fn coverage_fraction_small_rosters_are_complete() {
        let cov = PairCoverage::new();
        assert_eq!(cov.coverage_fraction(&[]), 1.0);
        assert_eq!(cov.coverage_fraction(&[42]), 1.0);
        assert_eq!(cov.coverage_fraction(&[1, 2]), 0.0);
    }

    #[test]
    fn unmet_shrinks_as_tables_are_recorded() {
        let roster = [1, 2, 3, 4];
        let mut cov = PairCoverage::new();

        assert_eq!(cov.unmet_pairs(&roster).len(), 6);
        cov.record_table(&[1, 2]);
        cov.record_table(&[3, 4]);
        assert_eq!(cov.unmet_pairs(&roster).len(), 4);
        assert_eq!(cov.coverage_fraction(&roster), 2.0 / 6.0);
    }

    #[test]
    fn departed_participants_keep_their_history() {
        let mut cov = PairCoverage::new();
        cov.record_table(&[1, 2, 3]);

        // 3 leaves; the set still remembers every recorded pair.
        assert_eq!(cov.len(), 3);
        assert_eq!(cov.met_within(&[1, 2]), 1);
        assert!(cov.has_met(Pair::new(2, 3)));
    }

    #[test]
    fn meeting_counts_tally_per_participant() {
        let mut cov = PairCoverage::new();
        cov.record_table(&[1, 2, 3]);
        cov.record_table(&[1, 4]);

        let counts = cov.meeting_counts();
        assert_eq!(counts[&1], 3);
        assert_eq!(counts[&2], 2);
        assert_eq!(counts[&4], 1);
        assert_eq!(counts.get(&9), None);
    }

    #[test]
    fn reset_clears_everything() {
        let mut cov = PairCoverage::new();
        cov.record_table(&[1, 2]);
        cov.reset();

        assert!(cov.is_empty());
        assert_eq!(cov.unmet_pairs(&[1, 2]).len(), 1);
    }
}
