//! Scores a candidate partition by new-pair yield and balance.

use std::collections::HashSet;

use session::model::ParticipantId;

use crate::coverage::PairCoverage;
use crate::types::Pair;

/// Awarded per in-table pair that has never met.
pub const NEW_PAIR_SCORE: i64 = 100;

/// Extra award when that pair was unmet over the pre-round roster; this
/// biases the search toward clearing the remaining backlog.
pub const PRIORITY_PAIR_BONUS: i64 = 50;

/// Charged per seat of spread between the largest and smallest table.
pub const IMBALANCE_PENALTY: i64 = 10;

/// In-table pairs of `tables` that are not yet in the coverage set, in
/// table order.
pub fn partition_new_pairs(
    tables: &[Vec<ParticipantId>],
    coverage: &PairCoverage,
) -> Vec<Pair> {
    let mut new_pairs = Vec::new();
    for table in tables {
        for (i, &a) in table.iter().enumerate() {
            for &b in &table[i + 1..] {
                let pair = Pair::new(a, b);
                if !coverage.has_met(pair) {
                    new_pairs.push(pair);
                }
            }
        }
    }
    new_pairs
}

/// Integer score of a candidate partition. A partition creating zero new
/// pairs scores at or below zero once the balance penalty applies, which
/// the search treats as no improvement.
pub fn score_partition(
    tables: &[Vec<ParticipantId>],
    new_pairs: &[Pair],
    unmet_before: &HashSet<Pair>,
) -> i64 {
    if tables.is_empty() {
        return 0;
    }

    let mut score = 0i64;
    for pair in new_pairs {
        score += NEW_PAIR_SCORE;
        if unmet_before.contains(pair) {
            score += PRIORITY_PAIR_BONUS;
        }
    }

    let max = tables.iter().map(Vec::len).max().unwrap_or(0);
    let min = tables.iter().map(Vec::len).min().unwrap_or(0);
    score -= IMBALANCE_PENALTY * (max - min) as i64;

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unmet(pairs: &[Pair]) -> HashSet<Pair> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn empty_partition_scores_zero() {
        let cov = PairCoverage::new();
        let new = partition_new_pairs(&[], &cov);
        assert!(new.is_empty());
        assert_eq!(score_partition(&[], &new, &HashSet::new()), 0);
    }

    #[test]
    fn new_pairs_earn_base_plus_priority() {
        let cov = PairCoverage::new();
        let tables = vec![vec![1, 2], vec![3, 4]];
        let new = partition_new_pairs(&tables, &cov);
        assert_eq!(new.len(), 2);

        let backlog = unmet(&[Pair::new(1, 2), Pair::new(3, 4)]);
        assert_eq!(
            score_partition(&tables, &new, &backlog),
            2 * (NEW_PAIR_SCORE + PRIORITY_PAIR_BONUS)
        );
    }

    #[test]
    fn already_met_pairs_earn_nothing() {
        let mut cov = PairCoverage::new();
        cov.record_table(&[1, 2]);

        let tables = vec![vec![1, 2], vec![3, 4]];
        let new = partition_new_pairs(&tables, &cov);
        assert_eq!(new, vec![Pair::new(3, 4)]);

        let backlog = unmet(&[Pair::new(3, 4)]);
        assert_eq!(
            score_partition(&tables, &new, &backlog),
            NEW_PAIR_SCORE + PRIORITY_PAIR_BONUS
        );
    }

    #[test]
    fn imbalance_is_penalized() {
        let cov = PairCoverage::new();
        let tables = vec![vec![1, 2, 3, 4], vec![5, 6]];
        let new = partition_new_pairs(&tables, &cov);

        // 7 new pairs, all priority, spread of 2 seats.
        let backlog: HashSet<Pair> = new.iter().copied().collect();
        assert_eq!(
            score_partition(&tables, &new, &backlog),
            7 * (NEW_PAIR_SCORE + PRIORITY_PAIR_BONUS) - 2 * IMBALANCE_PENALTY
        );
    }

    #[test]
    fn all_met_partition_scores_at_most_zero() {
        let mut cov = PairCoverage::new();
        cov.record_table(&[1, 2, 3]);

        let tables = vec![vec![1, 2], vec![3]];
        let new = partition_new_pairs(&tables, &cov);
        assert!(new.is_empty());
        assert!(score_partition(&tables, &new, &HashSet::new()) <= 0);
    }
}
