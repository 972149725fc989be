#![doc = include_str!("../readme.md")]

pub mod fixtures;
pub mod flood;
pub mod graph;
pub mod ledger;
pub mod playback;
pub mod route;
pub mod session;

#[doc(inline)]
pub use flood::{FloodMap, Severity};
#[doc(inline)]
pub use graph::Network;
#[doc(inline)]
pub use route::{PathResult, Router, VehicleClass};
#[doc(inline)]
pub use session::Session;
