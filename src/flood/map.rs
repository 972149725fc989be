use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::flood::severity::Severity;
use crate::graph::LocationId;

/// Wholesale snapshot of flood severities across a network.
///
/// A plain value, supplied fresh to every search: the solver never reads
/// ambient flood state. Locations without an entry read as dry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FloodMap {
    levels: FxHashMap<LocationId, Severity>,
}

impl FloodMap {
    pub fn new() -> FloodMap {
        FloodMap::default()
    }

    /// Severity at a location; dry when no reading is present.
    #[inline]
    pub fn severity(&self, id: LocationId) -> Severity {
        self.levels.get(&id).copied().unwrap_or(Severity::DRY)
    }

    /// Records a severity for one location, replacing any prior reading.
    pub fn set(&mut self, id: LocationId, severity: Severity) {
        self.levels.insert(id, severity);
    }

    /// Every location holding a non-dry reading.
    pub fn flooded(&self) -> impl Iterator<Item = (LocationId, Severity)> + '_ {
        self.levels
            .iter()
            .filter(|(_, severity)| severity.is_flooded())
            .map(|(id, severity)| (*id, *severity))
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl FromIterator<(LocationId, Severity)> for FloodMap {
    fn from_iter<T: IntoIterator<Item = (LocationId, Severity)>>(iter: T) -> FloodMap {
        FloodMap {
            levels: iter.into_iter().collect(),
        }
    }
}
