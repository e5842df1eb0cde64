//! Minimal headless example of the vapor simulation
//!
//! Copy into `examples/` of a project depending on `vapor`, or run through
//! `cargo run -- run` for the same output from the CLI.

use vapor::{stats, SimulationEngine};

fn main() {
    println!("Vapor - Minimal Example");
    println!("=======================\n");

    // Create engine with seeded RNG for reproducibility
    let mut engine = SimulationEngine::new_with_seed(100, 800.0, 400.0, 42);

    println!("Initial state:");
    println!("  Particles: {}", engine.particles.len());
    println!("  Temperature: {:.1}", engine.temperature());
    println!();

    // Bring the flask to a boil
    engine.set_temperature(130.0);

    let ticks = 1000;
    println!("Running {} ticks...\n", ticks);

    for i in 0..ticks {
        engine.update();

        // Print progress every 100 ticks
        if (i + 1) % 100 == 0 {
            println!("{}", stats::summary(&engine));
        }
    }

    println!("\nFinal state:");
    println!("  Collected water: {}", engine.collected_water());
    println!("  Phases: {:?}", engine.counts());
}
