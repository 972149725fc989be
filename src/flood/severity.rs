use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Flood intensity at a single location, graded 0 (dry) through 4 (extreme).
///
/// The grading follows the standing alert ladder used for river discharge
/// readings: normal, alert, warning, danger, extreme.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Severity(u8);

impl Severity {
    pub const DRY: Severity = Severity(0);
    pub const ALERT: Severity = Severity(1);
    pub const WARNING: Severity = Severity(2);
    pub const DANGER: Severity = Severity(3);
    pub const EXTREME: Severity = Severity(4);

    /// The raw alert level, `0..=4`.
    #[inline]
    pub const fn level(&self) -> u8 {
        self.0
    }

    /// Whether any flooding is present at all.
    #[inline]
    pub const fn is_flooded(&self) -> bool {
        self.0 > 0
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Lvl {}", self.0)
    }
}

impl TryFrom<u8> for Severity {
    type Error = SeverityError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            0..=4 => Ok(Severity(level)),
            out => Err(SeverityError::OutOfRange(out)),
        }
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> u8 {
        severity.0
    }
}

#[derive(Error, Debug)]
pub enum SeverityError {
    #[error("severity level {0} falls outside the 0-4 alert ladder")]
    OutOfRange(u8),
}
