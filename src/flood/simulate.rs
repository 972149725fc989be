use chrono::Utc;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::flood::severity::Severity;
use crate::flood::source::{SeverityReport, SeveritySource, SourceError};
use crate::graph::Location;

const SIMULATED_CONFIDENCE: f64 = 0.8;

/// Synthetic severity source following the band distribution of a
/// wet-season metropolitan forecast: extreme 10%, danger 10%, warning 20%,
/// alert 30%, dry otherwise.
///
/// Seeded, so a fixed seed reproduces the same readings across runs.
pub struct SimulatedSource {
    rng: SmallRng,
}

impl SimulatedSource {
    pub fn new(seed: u64) -> SimulatedSource {
        SimulatedSource {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl SeveritySource for SimulatedSource {
    fn report(&mut self, location: &Location) -> Result<SeverityReport, SourceError> {
        let roll: f64 = self.rng.gen();

        let severity = if roll > 0.9 {
            Severity::EXTREME
        } else if roll > 0.8 {
            Severity::DANGER
        } else if roll > 0.6 {
            Severity::WARNING
        } else if roll > 0.3 {
            Severity::ALERT
        } else {
            Severity::DRY
        };

        Ok(SeverityReport {
            location: location.id,
            severity,
            confidence: SIMULATED_CONFIDENCE,
            recorded_at: Utc::now(),
        })
    }
}
