use serde::{Deserialize, Serialize};

use crate::flood::Severity;
use crate::graph::Weight;
use crate::route::profile::VehicleProfile;

/// Cost multiplier added per severity level on a passable edge.
const SEVERITY_STEP: f64 = 0.5;

/// Passability verdict for entering a location along one edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Ok,
    Blocked,
}

impl Verdict {
    #[inline]
    pub const fn is_open(&self) -> bool {
        matches!(self, Verdict::Ok)
    }
}

/// Costed assessment of one edge under a severity reading.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeAssessment {
    pub severity: Severity,
    pub multiplier: f64,
    pub cost: f64,
    pub verdict: Verdict,
}

/// Applies the uniform flood cost formula for a vehicle profile.
///
/// Severity is read at the location being *entered*; the same corridor can
/// assess differently in each direction. A blocked edge keeps the dry
/// multiplier; its cost is reported for audit and never accumulated.
pub fn assess(profile: &VehicleProfile, base_distance: Weight, severity: Severity) -> EdgeAssessment {
    if severity > profile.max_severity {
        return EdgeAssessment {
            severity,
            multiplier: 1.0,
            cost: base_distance,
            verdict: Verdict::Blocked,
        };
    }

    let multiplier = 1.0 + f64::from(severity.level()) * SEVERITY_STEP;

    EdgeAssessment {
        severity,
        multiplier,
        cost: base_distance * multiplier,
        verdict: Verdict::Ok,
    }
}
