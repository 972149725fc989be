use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::flood::map::FloodMap;
use crate::flood::severity::{Severity, SeverityError};
use crate::graph::{Location, LocationId, Network};

/// A single severity observation for one location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeverityReport {
    pub location: LocationId,
    pub severity: Severity,
    /// Estimator confidence in `[0, 1]`.
    pub confidence: f64,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("no reading available for {0}")]
    Unavailable(String),

    #[error("reading rejected: {0}")]
    Invalid(#[from] SeverityError),
}

/// Boundary through which flood readings enter the system.
///
/// Implementations may call out to slow or unreliable collectors; the
/// [`gather`] step recovers every failure as a dry reading, so a failing
/// source can never fail a search.
pub trait SeveritySource {
    /// Produces the current reading for one location.
    fn report(&mut self, location: &Location) -> Result<SeverityReport, SourceError>;
}

/// Folds a source over every location of the network into a [`FloodMap`].
///
/// Fail-open: a location whose reading errors is recorded as dry.
pub fn gather(source: &mut impl SeveritySource, network: &Network) -> FloodMap {
    network
        .locations()
        .map(|location| match source.report(location) {
            Ok(report) => (location.id, report.severity),
            Err(err) => {
                warn!("No severity reading for {}: {err}", location.code);
                (location.id, Severity::DRY)
            }
        })
        .collect()
}
