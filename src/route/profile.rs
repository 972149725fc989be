use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::flood::Severity;

/// The closed set of vehicle classes the fleet operates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum VehicleClass {
    /// Heavy logistics truck. High capacity, low water clearance.
    Truck,
    /// Courier motorcycle. Low capacity, wades further.
    Motorcycle,
}

/// Operating parameters of a vehicle class.
///
/// Only [`max_severity`](#structfield.max_severity) changes which routes are
/// reachable; the remaining fields price and describe the vehicle and are
/// surfaced by the ledger.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VehicleProfile {
    pub class: VehicleClass,
    /// Flat dispatch cost, in currency units.
    pub base_cost: f64,
    /// Nominal cargo capacity. Not consulted by the search.
    pub capacity: u32,
    /// Relative flood surcharge factor quoted for the class.
    pub flood_penalty: f64,
    /// Highest severity the vehicle may enter.
    pub max_severity: Severity,
}

impl VehicleClass {
    /// The fixed operating profile of the class.
    pub const fn profile(self) -> VehicleProfile {
        match self {
            VehicleClass::Truck => VehicleProfile {
                class: self,
                base_cost: 5000.0,
                capacity: 100,
                flood_penalty: 2.5,
                max_severity: Severity::WARNING,
            },
            VehicleClass::Motorcycle => VehicleProfile {
                class: self,
                base_cost: 2000.0,
                capacity: 20,
                flood_penalty: 1.5,
                max_severity: Severity::DANGER,
            },
        }
    }
}
