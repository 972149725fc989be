use log::{debug, info};
use rustc_hash::FxHashMap;

use crate::flood::FloodMap;
use crate::graph::{LocationId, Network};
use crate::route::frontier::{Frontier, FrontierEntry};
use crate::route::policy::assess;
use crate::route::profile::{VehicleClass, VehicleProfile};
use crate::route::result::{PathResult, SegmentCostRecord};
use crate::route::trace::{EventKind, Trace};

/// Bounded best-first route solver over a fixed [`Network`].
///
/// Expansion is Dijkstra-style (cheapest entry first, settled locations
/// never reopened) with an explicit best-solution bound cutting off entries
/// that can no longer improve on a complete route. Every decision is
/// recorded into the returned [`Trace`].
pub struct Router<'a> {
    network: &'a Network,
    profile: VehicleProfile,
    bounded: bool,
}

impl<'a> Router<'a> {
    pub fn new(network: &'a Network, class: VehicleClass) -> Router<'a> {
        Router {
            network,
            profile: class.profile(),
            bounded: true,
        }
    }

    /// Disables the best-solution cutoff, expanding every queued entry.
    ///
    /// The cutoff is a shortcut, never a semantic: an unbounded run returns
    /// the same minimal cost at the price of a longer trace.
    pub fn unbounded(self) -> Router<'a> {
        Router {
            bounded: false,
            ..self
        }
    }

    pub fn profile(&self) -> &VehicleProfile {
        &self.profile
    }

    /// Runs one search from `origin` to `goal` under the given severities.
    ///
    /// Always returns a complete [`PathResult`]: an unreachable goal yields
    /// an empty path and no cost, with the trace still documenting every
    /// dead end explored. Identifiers the network never issued simply have
    /// no corridors and resolve the same way.
    pub fn route(&self, flood: &FloodMap, origin: LocationId, goal: LocationId) -> PathResult {
        let mut trace = Trace::default();
        let mut frontier = Frontier::seeded(origin);
        let mut visited: FxHashMap<LocationId, f64> = FxHashMap::default();

        let mut best: Option<FrontierEntry> = None;
        let mut bound = f64::INFINITY;

        debug!(
            "Routing {} -> {} for {}",
            self.label(origin),
            self.label(goal),
            self.profile.class
        );

        trace.record(
            EventKind::Start { node: origin },
            format!("Search started from {}", self.label(origin)),
        );

        while let Some(entry) = frontier.pop() {
            trace.record(
                EventKind::Explore {
                    node: entry.location,
                    cost: entry.cost,
                },
                format!(
                    "Visiting {} (total cost {:.1})",
                    self.label(entry.location),
                    entry.cost
                ),
            );

            // Branch-and-bound cutoff. Sound with non-negative edge costs:
            // a partial route already at the bound cannot improve on it.
            if self.bounded && entry.cost >= bound {
                trace.record(
                    EventKind::Prune {
                        node: entry.location,
                        cost: entry.cost,
                        bound,
                    },
                    format!(
                        "Pruned: cost {:.1} meets the best complete route ({:.1})",
                        entry.cost, bound
                    ),
                );
                continue;
            }

            if entry.location == goal {
                if entry.cost < bound {
                    bound = entry.cost;
                    trace.record(
                        EventKind::FoundGoal {
                            node: goal,
                            cost: entry.cost,
                        },
                        format!("Goal reached, new best route at {:.1}", entry.cost),
                    );
                    best = Some(entry);
                }
                // Never expand beyond the goal.
                continue;
            }

            if visited
                .get(&entry.location)
                .is_some_and(|&settled| settled <= entry.cost)
            {
                trace.record(
                    EventKind::Skip {
                        node: entry.location,
                    },
                    format!(
                        "Skipped {}: already settled at a lower cost",
                        self.label(entry.location)
                    ),
                );
                continue;
            }
            visited.insert(entry.location, entry.cost);

            for neighbor in self.network.neighbors(entry.location) {
                let Some(base_distance) = self.network.distance(entry.location, neighbor) else {
                    continue;
                };

                let assessment = assess(&self.profile, base_distance, flood.severity(neighbor));
                let status = if assessment.verdict.is_open() {
                    "passable"
                } else {
                    "blocked"
                };

                trace.record(
                    EventKind::CheckNeighbor {
                        from: entry.location,
                        to: neighbor,
                        verdict: assessment.verdict,
                        edge_cost: assessment.cost,
                    },
                    format!(
                        "Checked {}: {status} (+{:.1})",
                        self.label(neighbor),
                        assessment.cost
                    ),
                );

                if !assessment.verdict.is_open() {
                    continue;
                }

                let running_total = entry.cost + assessment.cost;
                if visited
                    .get(&neighbor)
                    .is_some_and(|&settled| settled <= running_total)
                {
                    continue;
                }

                frontier.push(entry.extended(SegmentCostRecord {
                    from: entry.location,
                    to: neighbor,
                    base_distance,
                    severity: assessment.severity,
                    multiplier: assessment.multiplier,
                    edge_cost: assessment.cost,
                    running_total,
                }));
            }
        }

        match best {
            Some(winner) => {
                info!(
                    "Route {} -> {} solved at cost {:.1} over {} segments",
                    self.label(origin),
                    self.label(goal),
                    winner.cost,
                    winner.segments.len()
                );

                PathResult {
                    path: winner.path,
                    cost: Some(winner.cost),
                    segments: winner.segments,
                    trace,
                }
            }
            None => {
                info!(
                    "No passable route {} -> {} for {}",
                    self.label(origin),
                    self.label(goal),
                    self.profile.class
                );

                PathResult::unreachable(trace)
            }
        }
    }

    fn label(&self, id: LocationId) -> &str {
        self.network
            .location(id)
            .map(|location| location.name.as_str())
            .unwrap_or("unknown location")
    }
}
