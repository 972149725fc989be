use dotenv::dotenv;

use banjir::fixtures::metro_jakarta;
use banjir::flood::{gather, SimulatedSource};
use banjir::ledger::{compose, DEFAULT_UNIT_RATE};
use banjir::route::{Router, VehicleClass};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load `.env` file
    dotenv().ok();
    env_logger::init();

    let network = metro_jakarta()?;

    // Simulated wet-season readings; swap in a live source for real data.
    let flood = gather(&mut SimulatedSource::new(2024), &network);

    let origin = network.locate("TG_PRIOK").ok_or("unknown origin")?;
    let goal = network.locate("BLOK_M").ok_or("unknown goal")?;

    let router = Router::new(&network, VehicleClass::Truck);
    let result = router.route(&flood, origin, goal);

    match result.cost {
        Some(cost) => println!("Optimal route found at cost {cost:.1}"),
        None => {
            println!("No passable route under the current readings.");
            return Ok(());
        }
    }

    let ledger = compose(&network, &result, router.profile(), DEFAULT_UNIT_RATE);
    for row in &ledger.rows {
        println!(
            "{} -> {} | {:>4.1} km x{:.1} ({}) = {:>5.1} | running {:>5.1}",
            row.from,
            row.to,
            row.base_distance,
            row.multiplier,
            row.severity,
            row.edge_cost,
            row.running_total,
        );
    }
    println!(
        "Estimate for {}: {:.0} (base {:.0})",
        ledger.vehicle,
        ledger.estimate,
        router.profile().base_cost
    );

    println!("\nExploration steps: {}", result.trace.len());
    for event in result.trace.iter().take(10) {
        println!("  [{:>3}] {}", event.seq, event.description);
    }

    Ok(())
}
