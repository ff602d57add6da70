//! The session scheduler.
//!
//! Owns the roster, the met-pair coverage, the round history and the
//! round-bound cap for one event. Single-threaded and synchronous: the
//! embedding application (bot, dashboard bridge) serializes all calls
//! against one instance, and ending a session means discarding it.

use std::collections::HashMap;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, instrument};

use session::model::{Participant, ParticipantId, Roster};

use crate::coverage::{PairCoverage, all_pairs};
use crate::error::SchedulerError;
use crate::layout::round_bound;
use crate::search::{SearchOutcome, search_round};
use crate::types::{
    NextRound, NoRoundReason, Pair, RepeatReport, Round, SchedulerConfig, SessionStats,
};

#[derive(Debug)]
pub struct SessionScheduler {
    roster: Roster,
    table_count: usize,
    seat_capacity: usize,
    attempts: usize,
    round_bound: usize,
    coverage: PairCoverage,
    rounds: Vec<Round>,
    rng: StdRng,
}

impl SessionScheduler {
    /// Build a scheduler for one event. `table_count` and `seat_capacity`
    /// below 1 are precondition violations; duplicate ids in the initial
    /// roster are dropped.
    pub fn new(
        cfg: SchedulerConfig,
        participants: impl IntoIterator<Item = ParticipantId>,
    ) -> Result<Self, SchedulerError> {
        Self::validate_layout(cfg.table_count, cfg.seat_capacity)?;

        let mut scheduler = Self {
            roster: Roster::new(),
            table_count: cfg.table_count,
            seat_capacity: cfg.seat_capacity,
            attempts: cfg.attempts,
            round_bound: 1,
            coverage: PairCoverage::new(),
            rounds: Vec::new(),
            rng: StdRng::seed_from_u64(cfg.seed),
        };

        for id in participants {
            scheduler.add_participant(id);
        }

        Ok(scheduler)
    }

    fn validate_layout(table_count: usize, seat_capacity: usize) -> Result<(), SchedulerError> {
        if table_count < 1 {
            return Err(SchedulerError::InvalidConfiguration(
                "table_count must be at least 1".into(),
            ));
        }
        if seat_capacity < 1 {
            return Err(SchedulerError::InvalidConfiguration(
                "seat_capacity must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Register a plain participant. Returns false if the id is already
    /// on the roster.
    pub fn add_participant(&mut self, id: ParticipantId) -> bool {
        self.add(Participant::new(id))
    }

    /// Register a batch; returns how many were actually added.
    pub fn add_participants(&mut self, ids: &[ParticipantId]) -> usize {
        ids.iter().filter(|&&id| self.add_participant(id)).count()
    }

    /// Register a full participant record. Named members and
    /// operator-injected synthetic seat fillers schedule identically.
    pub fn add(&mut self, participant: Participant) -> bool {
        let id = participant.id;
        let added = self.roster.add(participant);
        if added {
            self.grow_round_bound();
            debug!(id, roster = self.roster.len(), "participant joined");
        }
        added
    }

    /// Remove from the roster. Unknown ids are a no-op; historical pairs
    /// are never deleted.
    pub fn remove_participant(&mut self, id: ParticipantId) -> bool {
        let removed = self.roster.remove(id);
        if removed {
            debug!(id, roster = self.roster.len(), "participant left");
        }
        removed
    }

    /// Reconfigure the table layout between rounds (the operator can
    /// resize the venue mid-event). Validated like construction.
    pub fn set_layout(
        &mut self,
        table_count: usize,
        seat_capacity: usize,
    ) -> Result<(), SchedulerError> {
        Self::validate_layout(table_count, seat_capacity)?;
        self.table_count = table_count;
        self.seat_capacity = seat_capacity;
        Ok(())
    }

    /// The cap only ever grows while the instance lives; shrinking it on
    /// departures could retroactively invalidate rounds already played.
    fn grow_round_bound(&mut self) {
        let computed = round_bound(self.roster.len(), self.seat_capacity);
        self.round_bound = self.round_bound.max(computed);
    }

    /// Produce the next round with the configured attempts budget.
    pub fn generate_next_round(&mut self) -> NextRound {
        self.generate_next_round_with(self.attempts)
    }

    /// Produce the next round, or report why none is possible. Every
    /// "no round" is a routine outcome, never an error.
    #[instrument(skip(self), fields(roster = self.roster.len(), rounds = self.rounds.len()))]
    pub fn generate_next_round_with(&mut self, attempts: usize) -> NextRound {
        if self.rounds.len() >= self.round_bound {
            debug!(bound = self.round_bound, "round bound reached");
            return NextRound::NoRound(NoRoundReason::RoundLimitReached);
        }

        let ids: Vec<ParticipantId> = self.roster.ids().collect();
        let outcome = search_round(
            &ids,
            &self.coverage,
            self.table_count,
            self.seat_capacity,
            attempts,
            &mut self.rng,
        );

        match outcome {
            SearchOutcome::Found(plan) => {
                for table in &plan.tables {
                    self.coverage.record_table(table);
                }
                let round = Round::from_tables(&plan.tables);
                self.rounds.push(round.clone());

                info!(
                    round = self.rounds.len(),
                    tables = plan.tables.len(),
                    new_pairs = plan.new_pairs.len(),
                    score = plan.score,
                    "round generated"
                );
                NextRound::Seated(round)
            }
            SearchOutcome::TooFewParticipants => {
                NextRound::NoRound(NoRoundReason::InsufficientParticipants)
            }
            SearchOutcome::CoverageComplete => {
                NextRound::NoRound(NoRoundReason::CoverageExhausted)
            }
            SearchOutcome::NoImprovement => NextRound::NoRound(NoRoundReason::SearchExhausted),
        }
    }

    /// Derived progress snapshot; recomputed on every call.
    pub fn session_stats(&self) -> SessionStats {
        let ids: Vec<ParticipantId> = self.roster.ids().collect();
        let possible = all_pairs(&ids).len();
        let met = self.coverage.met_within(&ids);

        let counts = self.coverage.meeting_counts();
        let participants_met = ids
            .iter()
            .filter(|id| counts.get(id).copied().unwrap_or(0) > 0)
            .count();

        SessionStats {
            participants: ids.len(),
            rounds_generated: self.rounds.len(),
            round_bound: self.round_bound,
            possible_pairs: possible,
            met_pairs: met,
            participants_met,
            coverage: self.coverage.coverage_fraction(&ids),
            table_count: self.table_count,
            seat_capacity: self.seat_capacity,
        }
    }

    /// How many times each pair has actually been co-seated, recomputed
    /// from the round history (the coverage set only records "ever met").
    pub fn check_repeated_meetings(&self) -> RepeatReport {
        let mut meetings: HashMap<Pair, usize> = HashMap::new();
        for round in &self.rounds {
            for table in round.tables() {
                for (i, &a) in table.iter().enumerate() {
                    for &b in &table[i + 1..] {
                        *meetings.entry(Pair::new(a, b)).or_insert(0) += 1;
                    }
                }
            }
        }

        let total: usize = meetings.values().sum();
        let distinct = meetings.len();

        let mut repeated: Vec<(Pair, usize)> = meetings
            .into_iter()
            .filter(|&(_, count)| count > 1)
            .collect();
        repeated.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        let duplicate_pct = if total == 0 {
            0.0
        } else {
            100.0 * (total - distinct) as f64 / total as f64
        };

        RepeatReport {
            repeated,
            duplicate_pct,
        }
    }

    /// All pairs over the current roster, for diagnostics.
    pub fn all_pairs(&self) -> Vec<Pair> {
        let ids: Vec<ParticipantId> = self.roster.ids().collect();
        all_pairs(&ids)
    }

    /// Full session restart: forget who has met whom and every played
    /// round, keep the roster, and re-derive the cap from it.
    pub fn reset(&mut self) {
        self.coverage.reset();
        self.rounds.clear();
        self.round_bound = round_bound(self.roster.len(), self.seat_capacity);
        info!(roster = self.roster.len(), "session state reset");
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn round_bound(&self) -> usize {
        self.round_bound
    }
}
