use crate::fixtures::metro_jakarta;
use crate::flood::{gather, Severity, SimulatedSource};
use crate::ledger::DEFAULT_UNIT_RATE;
use crate::route::VehicleClass;
use crate::session::Session;

use approx::assert_relative_eq;

fn open_session() -> Session {
    let network = metro_jakarta().unwrap();
    let origin = network.locate("TG_PRIOK").unwrap();
    let goal = network.locate("BLOK_M").unwrap();

    Session::new(network, VehicleClass::Truck, origin, goal)
}

#[test]
fn initial_search_runs_on_open() {
    let session = open_session();

    assert!(session.result().found());
    assert_relative_eq!(session.result().cost.unwrap(), 30.0);
}

#[test]
fn severity_edit_supersedes_result_and_playback() {
    let mut session = open_session();

    // Start replaying the current trace.
    session.playback().seek(5);
    assert!(session.playback().started());

    let kelapa_gading = session.network().locate("KELAPA_GD").unwrap();
    session.set_severity(kelapa_gading, Severity::DANGER);

    // One fresh search, playback back to not-yet-started.
    assert_relative_eq!(session.result().cost.unwrap(), 33.0);
    assert!(!session.result().path.contains(&kelapa_gading));
    assert!(!session.playback().started());
}

#[test]
fn vehicle_change_reroutes() {
    let mut session = open_session();

    // Danger readings on every corridor out of the port strand the truck.
    let kelapa_gading = session.network().locate("KELAPA_GD").unwrap();
    let pluit = session.network().locate("PLUIT").unwrap();
    let cilincing = session.network().locate("CLINCING").unwrap();
    session.set_severity(kelapa_gading, Severity::DANGER);
    session.set_severity(pluit, Severity::DANGER);
    session.set_severity(cilincing, Severity::DANGER);

    assert!(!session.result().found());

    // A motorcycle tolerates danger readings and wades out through the
    // cheapest surcharged corridor.
    session.set_vehicle(VehicleClass::Motorcycle);
    assert_relative_eq!(session.result().cost.unwrap(), 45.0);
    assert!(session.result().path.contains(&kelapa_gading));
}

#[test]
fn wholesale_replacement_wins_last() {
    let mut session = open_session();

    let first = gather(&mut SimulatedSource::new(19), session.network());
    let second = gather(&mut SimulatedSource::new(77), session.network());

    session.set_flood(first);
    session.set_flood(second.clone());

    assert_eq!(session.flood(), &second);
}

#[test]
fn endpoint_change_reroutes() {
    let mut session = open_session();

    let monas = session.network().locate("MONAS").unwrap();
    let blok_m = session.network().locate("BLOK_M").unwrap();
    session.set_endpoints(monas, blok_m);

    // MONAS -> TN_ABANG -> BLOK_M.
    assert_relative_eq!(session.result().cost.unwrap(), 11.0);
}

#[test]
fn ledger_prices_the_current_result() {
    let session = open_session();
    let ledger = session.ledger(DEFAULT_UNIT_RATE);

    assert_relative_eq!(ledger.total_cost, 30.0);
    assert_relative_eq!(ledger.estimate, 50_000.0);
}
