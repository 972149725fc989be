use crate::fixtures::metro_jakarta;
use crate::flood::FloodMap;
use crate::playback::{CadenceDriver, Playback};
use crate::route::{Router, Trace, VehicleClass};

use std::time::{Duration, Instant};

fn sample_trace() -> Trace {
    let network = metro_jakarta().unwrap();
    let router = Router::new(&network, VehicleClass::Truck);

    router
        .route(
            &FloodMap::new(),
            network.locate("TG_PRIOK").unwrap(),
            network.locate("BLOK_M").unwrap(),
        )
        .trace
}

#[test]
fn starts_unstarted_and_enters_on_first_step() {
    let mut playback = Playback::new(sample_trace());

    assert!(!playback.started());
    assert!(playback.current().is_none());

    let first = playback.step().expect("trace is non-empty");
    assert_eq!(first.seq, 0);
    assert_eq!(playback.position(), Some(0));
}

#[test]
fn step_holds_at_the_final_event() {
    let mut playback = Playback::new(sample_trace());

    let last = playback.skip_to_end().expect("trace is non-empty").seq;
    assert!(playback.finished());

    assert!(playback.step().is_none());
    assert_eq!(playback.position(), Some(last));
}

#[test]
fn seek_clamps_to_the_trace() {
    let mut playback = Playback::new(sample_trace());

    let clamped = playback.seek(usize::MAX).expect("trace is non-empty");
    assert_eq!(Some(clamped.seq), playback.position());
    assert!(playback.finished());

    let first = playback.rewind().expect("trace is non-empty");
    assert_eq!(first.seq, 0);
}

#[test]
fn empty_trace_never_starts() {
    let mut playback = Playback::new(Trace::default());

    assert!(playback.step().is_none());
    assert!(playback.seek(3).is_none());
    assert!(playback.skip_to_end().is_none());
    assert!(!playback.started());
}

#[test]
fn replace_resets_to_unstarted() {
    let mut playback = Playback::new(sample_trace());
    playback.seek(4);

    playback.replace(sample_trace());
    assert!(!playback.started());
}

#[test]
fn cadence_advances_only_when_due() {
    let mut playback = Playback::new(sample_trace());
    let mut driver = CadenceDriver::new(Duration::from_millis(100));

    let epoch = Instant::now();

    // Not playing: polls are inert.
    assert!(!driver.poll(epoch, &mut playback));
    assert!(!playback.started());

    driver.play();
    assert!(driver.poll(epoch, &mut playback));
    assert_eq!(playback.position(), Some(0));

    // Within the period nothing moves.
    assert!(!driver.poll(epoch + Duration::from_millis(40), &mut playback));
    assert_eq!(playback.position(), Some(0));

    assert!(driver.poll(epoch + Duration::from_millis(120), &mut playback));
    assert_eq!(playback.position(), Some(1));
}

#[test]
fn pause_cancels_and_exhaustion_stops() {
    let mut playback = Playback::new(sample_trace());
    let mut driver = CadenceDriver::new(Duration::from_millis(10));

    driver.play();
    driver.pause();
    assert!(!driver.poll(Instant::now(), &mut playback));
    assert!(!playback.started());

    // Run the driver to the end of the trace.
    playback.skip_to_end();
    driver.play();
    assert!(!driver.poll(Instant::now(), &mut playback));
    assert!(!driver.playing());
}
