//! Bounded randomized search for the next round.
//!
//! Each trial reorders the roster (least-met participants first, random
//! tiebreaks), partitions it, and scores the partition; the best-scoring
//! candidate wins. All randomness comes from the injected RNG, so a fixed
//! seed reproduces the exact schedule.

use std::collections::HashSet;

use rand::Rng;
use tracing::debug;

use session::model::ParticipantId;

use crate::assign::assign_tables;
use crate::coverage::{PairCoverage, all_pairs};
use crate::score::{partition_new_pairs, score_partition};
use crate::types::Pair;

/// Trials per round unless the caller overrides.
pub const DEFAULT_ATTEMPTS: usize = 100;

/// Once less than this fraction of pairs remains unmet, the budget is
/// doubled: late-stage pairings are scarce and need a wider search.
const LATE_STAGE_UNMET_FRACTION: f64 = 0.2;

/// Winning candidate: the partition, the pairs it newly creates, and its
/// score.
#[derive(Debug, Clone)]
pub(crate) struct RoundPlan {
    pub tables: Vec<Vec<ParticipantId>>,
    pub new_pairs: Vec<Pair>,
    pub score: i64,
}

#[derive(Debug, Clone)]
pub(crate) enum SearchOutcome {
    Found(RoundPlan),
    /// Fewer than 2 participants, so no round is possible.
    TooFewParticipants,
    /// Every possible pair over this roster has already met.
    CoverageComplete,
    /// Budget spent without a positive-scoring partition.
    NoImprovement,
}

pub(crate) fn search_round(
    roster: &[ParticipantId],
    coverage: &PairCoverage,
    table_count: usize,
    seat_capacity: usize,
    attempts: usize,
    rng: &mut impl Rng,
) -> SearchOutcome {
    if roster.len() < 2 {
        return SearchOutcome::TooFewParticipants;
    }

    let possible = all_pairs(roster);
    let unmet: HashSet<Pair> = coverage.unmet_pairs(roster).into_iter().collect();
    if unmet.is_empty() {
        return SearchOutcome::CoverageComplete;
    }

    let mut budget = attempts.max(1);
    if (unmet.len() as f64) < possible.len() as f64 * LATE_STAGE_UNMET_FRACTION {
        budget *= 2;
    }

    let counts = coverage.meeting_counts();
    let mut best: Option<RoundPlan> = None;

    for attempt in 0..budget {
        let mut order = roster.to_vec();
        // Least-met participants first; ties broken by a random draw so
        // repeated trials explore different partitions.
        order.sort_by_cached_key(|id| (counts.get(id).copied().unwrap_or(0), rng.random::<u64>()));

        let tables = assign_tables(&order, table_count, seat_capacity);
        if tables.is_empty() {
            // Structurally impossible for this roster/layout; reordering
            // cannot change that.
            break;
        }

        let new_pairs = partition_new_pairs(&tables, coverage);
        let score = score_partition(&tables, &new_pairs, &unmet);
        let covers_all_unmet = new_pairs.len() == unmet.len();

        if best.as_ref().is_none_or(|b| score > b.score) {
            best = Some(RoundPlan {
                tables,
                new_pairs,
                score,
            });
        }

        if covers_all_unmet {
            debug!(attempt, "candidate covers every unmet pair, stopping early");
            break;
        }
    }

    match best {
        Some(plan) if plan.score > 0 => {
            debug!(
                score = plan.score,
                new_pairs = plan.new_pairs.len(),
                tables = plan.tables.len(),
                "round search succeeded"
            );
            SearchOutcome::Found(plan)
        }
        _ => SearchOutcome::NoImprovement,
    }
}
