//! Flood severity: the 0-4 grading, the per-search severity snapshot,
//! and the ingestion boundary readings arrive through.

#[doc(hidden)]
pub mod map;
#[doc(hidden)]
pub mod severity;
#[doc(hidden)]
pub mod simulate;
#[doc(hidden)]
pub mod source;

#[doc(inline)]
pub use map::FloodMap;
#[doc(inline)]
pub use severity::{Severity, SeverityError};
#[doc(inline)]
pub use simulate::SimulatedSource;
#[doc(inline)]
pub use source::{gather, SeverityReport, SeveritySource, SourceError};
