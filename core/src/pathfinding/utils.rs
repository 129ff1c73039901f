use crate::filmography::{PersonId, WorkId};
use serde::Serialize;

/// One hop of a path: the shared work and the person reached through it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PathStep {
    pub work_id: WorkId,
    pub person_id: PersonId,
}

impl PathStep {
    pub fn new(work_id: WorkId, person_id: PersonId) -> Self {
        Self { work_id, person_id }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Steps in source-to-target order; empty when source and target coincide.
    Found(Vec<PathStep>),
    /// The reachable component was exhausted without meeting the target.
    NotConnected,
    /// `max_expansions` ran out before the search finished.
    LimitReached,
}

impl SearchOutcome {
    pub fn path(&self) -> Option<&[PathStep]> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            _ => None,
        }
    }

    pub fn into_path(self) -> Option<Vec<PathStep>> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            _ => None,
        }
    }
}

/// Outcome, number of people discovered, elapsed seconds.
pub type PathResult = (SearchOutcome, usize, f64);
