use serde::{Deserialize, Serialize};

use crate::flood::Severity;
use crate::graph::LocationId;
use crate::route::trace::Trace;

/// One edge of a travelled path, with its full cost derivation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SegmentCostRecord {
    pub from: LocationId,
    pub to: LocationId,
    pub base_distance: f64,
    /// Severity at the entered location when the edge was costed.
    pub severity: Severity,
    pub multiplier: f64,
    pub edge_cost: f64,
    /// Accumulated path cost after traversing this segment.
    pub running_total: f64,
}

/// Terminal artifact of one search.
///
/// Always complete: an unreachable goal is a valid result (empty path, no
/// cost), not an error, and still carries the full trace of every dead end
/// explored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    /// Locations of the winning route, origin first. Empty when no passable
    /// route exists.
    pub path: Vec<LocationId>,
    /// Minimal cost of the winning route; `None` when unreachable.
    pub cost: Option<f64>,
    /// Per-segment cost log of the winning route only.
    pub segments: Vec<SegmentCostRecord>,
    /// Every decision the search made, in order.
    pub trace: Trace,
}

impl PathResult {
    /// Whether a passable route was found.
    pub fn found(&self) -> bool {
        self.cost.is_some()
    }

    pub(crate) fn unreachable(trace: Trace) -> PathResult {
        PathResult {
            path: Vec::new(),
            cost: None,
            segments: Vec::new(),
            trace,
        }
    }
}
