//! Canned networks for tests, demos and downstream consumers.

use crate::graph::{Category, ConnectionRecord, LocationRecord, Network, NetworkError, Zone};

/// The Jakarta metropolitan logistics network: fourteen districts across
/// the five administrative zones, joined by twenty-five weighted corridors.
pub fn metro_jakarta() -> Result<Network, NetworkError> {
    let locations = [
        // North
        LocationRecord::new(
            "TG_PRIOK",
            "Pelabuhan Tg. Priok",
            Zone::North,
            Category::Warehouse,
        ),
        LocationRecord::new("PLUIT", "Pluit/Muara Karang", Zone::North, Category::FloodProne),
        LocationRecord::new("CLINCING", "Cilincing", Zone::North, Category::District),
        // West
        LocationRecord::new("CENGKARENG", "Cengkareng", Zone::West, Category::District),
        LocationRecord::new("GROGOL", "Grogol/Trisakti", Zone::West, Category::FloodProne),
        // Central
        LocationRecord::new("MONAS", "Monas/Gambir", Zone::Central, Category::District),
        LocationRecord::new("TN_ABANG", "Tanah Abang", Zone::Central, Category::Destination),
        LocationRecord::new(
            "MANGGARAI",
            "Pintu Air Manggarai",
            Zone::Central,
            Category::FloodProne,
        ),
        // East
        LocationRecord::new("KELAPA_GD", "Kelapa Gading", Zone::East, Category::FloodProne),
        LocationRecord::new("CAKUNG", "Cakung/Pulo Gadung", Zone::East, Category::District),
        LocationRecord::new(
            "JATINEGARA",
            "Jatinegara/Kp. Melayu",
            Zone::East,
            Category::FloodProne,
        ),
        // South
        LocationRecord::new("BLOK_M", "Blok M", Zone::South, Category::District),
        LocationRecord::new("CILANDAK", "Cilandak/Kemang", Zone::South, Category::FloodProne),
        LocationRecord::new("PS_MINGGU", "Pasar Minggu", Zone::South, Category::District),
    ];

    let connections = [
        ConnectionRecord::new("TG_PRIOK", "PLUIT", 12.0),
        ConnectionRecord::new("TG_PRIOK", "CLINCING", 8.0),
        ConnectionRecord::new("TG_PRIOK", "KELAPA_GD", 10.0),
        ConnectionRecord::new("PLUIT", "GROGOL", 8.0),
        ConnectionRecord::new("PLUIT", "MONAS", 10.0),
        ConnectionRecord::new("CLINCING", "CAKUNG", 6.0),
        ConnectionRecord::new("CENGKARENG", "GROGOL", 10.0),
        ConnectionRecord::new("CENGKARENG", "BLOK_M", 18.0),
        ConnectionRecord::new("GROGOL", "TN_ABANG", 5.0),
        ConnectionRecord::new("GROGOL", "MONAS", 4.0),
        ConnectionRecord::new("MONAS", "TN_ABANG", 3.0),
        ConnectionRecord::new("MONAS", "MANGGARAI", 4.0),
        ConnectionRecord::new("MONAS", "KELAPA_GD", 9.0),
        ConnectionRecord::new("TN_ABANG", "BLOK_M", 8.0),
        ConnectionRecord::new("TN_ABANG", "JATINEGARA", 7.0),
        ConnectionRecord::new("KELAPA_GD", "CAKUNG", 5.0),
        ConnectionRecord::new("KELAPA_GD", "JATINEGARA", 8.0),
        ConnectionRecord::new("CAKUNG", "JATINEGARA", 9.0),
        ConnectionRecord::new("MANGGARAI", "JATINEGARA", 3.0),
        ConnectionRecord::new("MANGGARAI", "PS_MINGGU", 10.0),
        ConnectionRecord::new("MANGGARAI", "TN_ABANG", 5.0),
        ConnectionRecord::new("JATINEGARA", "PS_MINGGU", 11.0),
        ConnectionRecord::new("BLOK_M", "CILANDAK", 5.0),
        ConnectionRecord::new("BLOK_M", "PS_MINGGU", 7.0),
        ConnectionRecord::new("CILANDAK", "PS_MINGGU", 6.0),
    ];

    Network::new(locations, connections)
}
