use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Index-assigned identifier for a location within a [`Network`].
///
/// Identifiers are issued in table order when the network is built, and are
/// only meaningful against the network that issued them.
///
/// [`Network`]: crate::graph::Network
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LocationId(pub(crate) u32);

impl LocationId {
    /// The raw table index of the location.
    #[inline]
    pub const fn index(&self) -> u32 {
        self.0
    }
}

impl Display for LocationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "L{}", self.0)
    }
}

/// Administrative zone a location belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Zone {
    North,
    West,
    Central,
    East,
    South,
}

/// Functional classification of a location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Category {
    /// Freight origin, e.g. a port or depot.
    Warehouse,
    /// Ordinary district node.
    District,
    /// Historically flood-affected district.
    FloodProne,
    /// Common delivery destination.
    Destination,
}

/// A location of the network, fixed at build time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    /// Stable string key, e.g. `TG_PRIOK`.
    pub code: String,
    /// Operator-facing display name.
    pub name: String,
    pub zone: Zone,
    pub category: Category,
}

/// Declarative form of a location, before the network assigns an identifier.
#[derive(Clone, Debug)]
pub struct LocationRecord {
    pub code: String,
    pub name: String,
    pub zone: Zone,
    pub category: Category,
}

impl LocationRecord {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        zone: Zone,
        category: Category,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            zone,
            category,
        }
    }
}

/// An undirected corridor between two locations, by code.
///
/// Declared once; `(a, b)` and `(b, a)` describe the same corridor.
#[derive(Clone, Debug)]
pub struct ConnectionRecord {
    pub a: String,
    pub b: String,
    /// Base distance in kilometres. Must be positive.
    pub distance: f64,
}

impl ConnectionRecord {
    pub fn new(a: impl Into<String>, b: impl Into<String>, distance: f64) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            distance,
        }
    }
}
