//! # Vapor
//!
//! A stylized boiling and condensation toy. Water particles sit in a flask,
//! turn to vapor above 100 °C, condense on an inclined plate and drain into a
//! collection vessel. The server owns the simulation and streams it to the
//! browser over WebSocket.
//!
//! ## Quick Start
//!
//! ```rust
//! use vapor::SimulationEngine;
//!
//! let mut engine = SimulationEngine::new_with_seed(100, 800.0, 400.0, 42);
//!
//! // Boil
//! engine.set_temperature(120.0);
//! engine.run(200);
//!
//! let state = engine.get_state();
//! println!("Collected water: {}", state.collected_water);
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use vapor::{Config, SimulationEngine};
//!
//! let mut config = Config::default();
//! config.simulation.num_particles = 250;
//! config.simulation.seed = Some(7);
//!
//! let engine = SimulationEngine::from_config(&config);
//! assert_eq!(engine.particles.len(), 250);
//! ```

pub mod commands;
pub mod condenser;
pub mod config;
pub mod energy;
pub mod engine;
pub mod particle;
pub mod protocol;
pub mod snapshot;
pub mod stats;

#[cfg(feature = "web")]
pub mod web;

// Re-export main types
pub use config::Config;
pub use engine::SimulationEngine;
pub use particle::{Particle, ParticleState};
pub use snapshot::SimulationSnapshot;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run a quick benchmark of the update loop
pub fn benchmark(ticks: u64, particles: usize) -> BenchmarkResult {
    use std::time::Instant;

    let mut engine = SimulationEngine::new_with_seed(particles, 800.0, 400.0, 42);
    engine.set_temperature(engine::MAX_TEMPERATURE);

    let start = Instant::now();
    engine.run(ticks);
    let elapsed = start.elapsed();

    BenchmarkResult {
        ticks,
        particles,
        elapsed_secs: elapsed.as_secs_f64(),
        ticks_per_second: ticks as f64 / elapsed.as_secs_f64().max(f64::EPSILON),
        collected_water: engine.collected_water(),
    }
}

/// Benchmark result
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub ticks: u64,
    pub particles: usize,
    pub elapsed_secs: f64,
    pub ticks_per_second: f64,
    pub collected_water: u64,
}

impl std::fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Benchmark Results ===")?;
        writeln!(f, "Ticks: {}", self.ticks)?;
        writeln!(f, "Particles: {}", self.particles)?;
        writeln!(f, "Time: {:.3}s", self.elapsed_secs)?;
        writeln!(f, "Speed: {:.1} ticks/s", self.ticks_per_second)?;
        writeln!(f, "Collected water: {}", self.collected_water)?;
        Ok(())
    }
}
