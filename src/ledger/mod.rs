//! Prices a winning route: a presentable row per segment plus the
//! monetary estimate for the dispatched vehicle.


use itertools::Itertools;
use serde::Serialize;

use crate::flood::Severity;
use crate::graph::Network;
use crate::route::{PathResult, VehicleClass, VehicleProfile};

/// Default conversion rate from path cost to currency units.
pub const DEFAULT_UNIT_RATE: f64 = 1500.0;

/// One presentable row of the cost breakdown.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LedgerRow {
    pub from: String,
    pub to: String,
    pub base_distance: f64,
    pub severity: Severity,
    pub multiplier: f64,
    pub edge_cost: f64,
    pub running_total: f64,
}

/// Priced breakdown of a search result.
#[derive(Clone, Debug, Serialize)]
pub struct CostLedger {
    pub vehicle: VehicleClass,
    pub rows: Vec<LedgerRow>,
    /// Sum of weighted segment costs over the route.
    pub total_cost: f64,
    /// `base_cost + total_cost x rate`, in currency units.
    pub estimate: f64,
}

/// Derives a priced ledger from a search result.
///
/// Pure function of its inputs. An unreachable result composes an empty
/// ledger priced at the dispatch cost alone.
pub fn compose(
    network: &Network,
    result: &PathResult,
    profile: &VehicleProfile,
    per_unit_rate: f64,
) -> CostLedger {
    let label = |id| {
        network
            .location(id)
            .map(|location| location.name.clone())
            .unwrap_or_else(|| "unknown location".into())
    };

    let rows = result
        .segments
        .iter()
        .map(|segment| LedgerRow {
            from: label(segment.from),
            to: label(segment.to),
            base_distance: segment.base_distance,
            severity: segment.severity,
            multiplier: segment.multiplier,
            edge_cost: segment.edge_cost,
            running_total: segment.running_total,
        })
        .collect_vec();

    let total_cost = result.cost.unwrap_or(0.0);

    CostLedger {
        vehicle: profile.class,
        rows,
        total_cost,
        estimate: profile.base_cost + total_cost * per_unit_rate,
    }
}
