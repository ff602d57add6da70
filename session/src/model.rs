use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Chat id of a participant, unique for the lifetime of one event.
pub type ParticipantId = i64;

/// One registered participant.
///
/// `synthetic` marks seat-filler entries injected by the operator (dry
/// runs, demos). The messaging layer skips notifying them; the scheduling
/// core treats every id uniformly and never inspects this flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub display_name: Option<String>,
    pub synthetic: bool,
}

impl Participant {
    pub fn new(id: ParticipantId) -> Self {
        Self {
            id,
            display_name: None,
            synthetic: false,
        }
    }

    pub fn synthetic(id: ParticipantId) -> Self {
        Self {
            id,
            display_name: None,
            synthetic: true,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }
}

/// The ordered set of participants currently eligible for seating.
///
/// All joins and leaves go through this container; duplicate ids are
/// rejected on insert, so the no-duplicate invariant holds everywhere
/// downstream.
#[derive(Debug, Default, Clone)]
pub struct Roster {
    members: Vec<Participant>,
    index: HashSet<ParticipantId>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a participant. Returns false (and leaves the roster
    /// untouched) if the id is already present.
    pub fn add(&mut self, participant: Participant) -> bool {
        if !self.index.insert(participant.id) {
            return false;
        }
        self.members.push(participant);

        debug_assert!(
            self.members.len() == self.index.len(),
            "roster index out of sync"
        );
        true
    }

    /// Remove by id. Unknown ids are a no-op so duplicate leave events
    /// never fail.
    pub fn remove(&mut self, id: ParticipantId) -> bool {
        if !self.index.remove(&id) {
            return false;
        }
        self.members.retain(|p| p.id != id);
        true
    }

    pub fn contains(&self, id: ParticipantId) -> bool {
        self.index.contains(&id)
    }

    pub fn get(&self, id: ParticipantId) -> Option<&Participant> {
        self.members.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Ids in join order.
    pub fn ids(&self) -> impl Iterator<Item = ParticipantId> + '_ {
        self.members.iter().map(|p| p.id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.members.iter()
    }
}

/// Operator-facing event settings, edited from the admin chat between
/// rounds. Round/break durations are pacing policy and never enter the
/// scheduling core; they ride along to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub tables_count: usize,
    pub seats_per_table: usize,
    pub round_minutes: u32,
    pub break_minutes: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tables_count: 1,
            seats_per_table: 1,
            round_minutes: 3,
            break_minutes: 1,
        }
    }
}
