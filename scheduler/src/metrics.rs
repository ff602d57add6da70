//! Dashboard payload derivation.
//!
//! The dashboard shows round progress per round; everything it needs is
//! derived here from a stats snapshot plus the operator settings. The
//! core performs no I/O; shipping the payload is the bridge's job.

use serde::Serialize;

use session::model::Settings;

use crate::types::SessionStats;

/// One dashboard update, derived per generated round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardMetrics {
    pub current_round: usize,
    pub total_rounds: usize,
    pub round_minutes: u32,
    pub break_minutes: u32,
    pub unmet_pairs: usize,
}

pub fn dashboard_metrics(stats: &SessionStats, settings: &Settings) -> DashboardMetrics {
    DashboardMetrics {
        current_round: stats.rounds_generated,
        total_rounds: stats.round_bound,
        round_minutes: settings.round_minutes,
        break_minutes: settings.break_minutes,
        unmet_pairs: stats.possible_pairs - stats.met_pairs,
    }
}
