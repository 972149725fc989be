use indexmap::IndexMap;
use log::debug;
use petgraph::prelude::UnGraphMap;
use rustc_hash::{FxHashMap, FxHasher};
use std::fmt::{Debug, Formatter};
use std::hash::BuildHasherDefault;

use crate::graph::error::NetworkError;
use crate::graph::item::{ConnectionRecord, Location, LocationId, LocationRecord};

pub type Weight = f64;

pub type NetworkStructure = UnGraphMap<LocationId, Weight, BuildHasherDefault<FxHasher>>;

/// The fixed logistics network: a location table and the undirected
/// weighted corridors joining it.
///
/// Built once from declarative records and never mutated afterwards; the
/// solver only performs lookups against it.
pub struct Network {
    pub(crate) graph: NetworkStructure,
    pub(crate) locations: IndexMap<LocationId, Location, BuildHasherDefault<FxHasher>>,
    pub(crate) codes: FxHashMap<String, LocationId>,
}

impl Debug for Network {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Network with Locations: {}", self.locations.len())
    }
}

impl Network {
    /// Builds a network from location and connection tables.
    ///
    /// Identifiers are assigned in table order. Duplicate codes, connections
    /// naming unknown codes and non-positive distances are build errors;
    /// nothing is validated again at query time.
    pub fn new(
        locations: impl IntoIterator<Item = LocationRecord>,
        connections: impl IntoIterator<Item = ConnectionRecord>,
    ) -> Result<Network, NetworkError> {
        let mut table: IndexMap<LocationId, Location, BuildHasherDefault<FxHasher>> =
            IndexMap::default();
        let mut codes: FxHashMap<String, LocationId> = FxHashMap::default();
        let mut graph = NetworkStructure::default();

        for (index, record) in locations.into_iter().enumerate() {
            if codes.contains_key(&record.code) {
                return Err(NetworkError::DuplicateLocation(record.code));
            }

            let id = LocationId(index as u32);
            codes.insert(record.code.clone(), id);
            graph.add_node(id);
            table.insert(
                id,
                Location {
                    id,
                    code: record.code,
                    name: record.name,
                    zone: record.zone,
                    category: record.category,
                },
            );
        }

        for connection in connections {
            let a = *codes
                .get(&connection.a)
                .ok_or_else(|| NetworkError::UnknownLocation(connection.a.clone()))?;
            let b = *codes
                .get(&connection.b)
                .ok_or_else(|| NetworkError::UnknownLocation(connection.b.clone()))?;

            if connection.distance <= 0.0 {
                return Err(NetworkError::NonPositiveDistance(
                    connection.a,
                    connection.b,
                    connection.distance,
                ));
            }

            graph.add_edge(a, b, connection.distance);
        }

        debug!(
            "Built network with {} locations and {} corridors",
            table.len(),
            graph.edge_count()
        );

        Ok(Network {
            graph,
            locations: table,
            codes,
        })
    }

    /// Number of locations in the network.
    pub fn size(&self) -> usize {
        self.locations.len()
    }

    /// Resolves a stable string code to the identifier the network issued.
    #[inline]
    pub fn locate(&self, code: &str) -> Option<LocationId> {
        self.codes.get(code).copied()
    }

    /// The location behind an identifier, if this network issued it.
    #[inline]
    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(&id)
    }

    /// Base distance of the corridor joining `a` and `b`, independent of
    /// argument order. `None` when no direct corridor exists.
    #[inline]
    pub fn distance(&self, a: LocationId, b: LocationId) -> Option<Weight> {
        self.graph.edge_weight(a, b).copied()
    }

    /// Every location directly connected to `a`, in corridor-table order.
    #[inline]
    pub fn neighbors(&self, a: LocationId) -> impl Iterator<Item = LocationId> + '_ {
        self.graph.neighbors(a)
    }

    /// All locations, in table order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }
}
