//! Single-operator routing session: one search per input change, with the
//! previous result and its playback superseded atomically.

#[doc(hidden)]
#[cfg(test)]
mod test;

use log::debug;

use crate::flood::{FloodMap, Severity};
use crate::graph::{LocationId, Network};
use crate::ledger::{compose, CostLedger};
use crate::playback::Playback;
use crate::route::{PathResult, Router, VehicleClass};

/// Owns the fixed network and the current search inputs.
///
/// Every input mutation (a wholesale severity replacement, a single
/// location edit, a vehicle change, an endpoint change) triggers exactly
/// one new search. The previous [`PathResult`] is discarded and playback
/// returns to its not-yet-started state, so a consumer can never observe a
/// cursor into a superseded trace. Last write wins.
pub struct Session {
    network: Network,
    flood: FloodMap,
    vehicle: VehicleClass,
    origin: LocationId,
    goal: LocationId,

    result: PathResult,
    playback: Playback,
}

impl Session {
    /// Opens a session and runs the initial search over a dry network.
    pub fn new(
        network: Network,
        vehicle: VehicleClass,
        origin: LocationId,
        goal: LocationId,
    ) -> Session {
        let flood = FloodMap::new();
        let result = Router::new(&network, vehicle).route(&flood, origin, goal);
        let playback = Playback::new(result.trace.clone());

        Session {
            network,
            flood,
            vehicle,
            origin,
            goal,
            result,
            playback,
        }
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn flood(&self) -> &FloodMap {
        &self.flood
    }

    pub fn vehicle(&self) -> VehicleClass {
        self.vehicle
    }

    pub fn endpoints(&self) -> (LocationId, LocationId) {
        (self.origin, self.goal)
    }

    /// The current search result. Superseded wholesale on every change.
    pub fn result(&self) -> &PathResult {
        &self.result
    }

    /// Replay cursor over the current trace.
    pub fn playback(&mut self) -> &mut Playback {
        &mut self.playback
    }

    /// Replaces the severity snapshot wholesale.
    pub fn set_flood(&mut self, flood: FloodMap) {
        self.flood = flood;
        self.reroute();
    }

    /// Edits a single location's severity reading.
    pub fn set_severity(&mut self, location: LocationId, severity: Severity) {
        self.flood.set(location, severity);
        self.reroute();
    }

    pub fn set_vehicle(&mut self, vehicle: VehicleClass) {
        self.vehicle = vehicle;
        self.reroute();
    }

    pub fn set_endpoints(&mut self, origin: LocationId, goal: LocationId) {
        self.origin = origin;
        self.goal = goal;
        self.reroute();
    }

    /// Prices the current result.
    pub fn ledger(&self, per_unit_rate: f64) -> CostLedger {
        compose(
            &self.network,
            &self.result,
            &self.vehicle.profile(),
            per_unit_rate,
        )
    }

    fn reroute(&mut self) {
        debug!(
            "Superseding current result ({} trace events)",
            self.result.trace.len()
        );

        let result =
            Router::new(&self.network, self.vehicle).route(&self.flood, self.origin, self.goal);

        self.playback.replace(result.trace.clone());
        self.result = result;
    }
}
