//! The fixed logistics network: locations, weighted corridors,
//! and the lookups the solver routes over.

#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod item;
#[doc(hidden)]
pub mod network;

#[doc(inline)]
pub use error::NetworkError;
#[doc(inline)]
pub use item::{Category, ConnectionRecord, Location, LocationId, LocationRecord, Zone};
#[doc(inline)]
pub use network::{Network, Weight};
