use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::graph::LocationId;
use crate::route::policy::Verdict;

/// What a single search step did.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    /// The search was seeded at the origin.
    Start { node: LocationId },
    /// A frontier entry was selected for expansion.
    Explore { node: LocationId, cost: f64 },
    /// Entry discarded: its cost already meets the best complete route.
    Prune {
        node: LocationId,
        cost: f64,
        bound: f64,
    },
    /// The goal was reached at a new best cost.
    FoundGoal { node: LocationId, cost: f64 },
    /// Entry discarded: the location was already settled at least as cheaply.
    Skip { node: LocationId },
    /// A neighbouring location was costed, and possibly rejected.
    CheckNeighbor {
        from: LocationId,
        to: LocationId,
        verdict: Verdict,
        edge_cost: f64,
    },
}

/// One entry of the exploration trace.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExplorationEvent {
    /// Position within the trace; ever-increasing within one search.
    pub seq: usize,
    #[serde(flatten)]
    pub kind: EventKind,
    /// Operator-facing narration of the step.
    pub description: String,
}

/// The complete, ordered record of one search run.
///
/// Fully materialized before the search returns, addressable by index, and
/// never extended afterwards. A new search always produces a new trace.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    events: Vec<ExplorationEvent>,
}

impl Trace {
    pub(crate) fn record(&mut self, kind: EventKind, description: String) {
        let seq = self.events.len();
        self.events.push(ExplorationEvent {
            seq,
            kind,
            description,
        });
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&ExplorationEvent> {
        self.events.get(index)
    }

    pub fn first(&self) -> Option<&ExplorationEvent> {
        self.events.first()
    }

    pub fn last(&self) -> Option<&ExplorationEvent> {
        self.events.last()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExplorationEvent> {
        self.events.iter()
    }
}

impl Index<usize> for Trace {
    type Output = ExplorationEvent;

    fn index(&self, index: usize) -> &ExplorationEvent {
        &self.events[index]
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a ExplorationEvent;
    type IntoIter = std::slice::Iter<'a, ExplorationEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
