//! Statistics for headless runs and benchmarks.

use serde::{Deserialize, Serialize};

use crate::engine::SimulationEngine;
use crate::particle::{Particle, ParticleState};

/// Number of particles in each phase
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticleCounts {
    pub liquid: usize,
    pub vapor: usize,
    pub condensed: usize,
}

impl ParticleCounts {
    /// Tally phases over a particle list
    pub fn from_particles(particles: &[Particle]) -> Self {
        particles.iter().fold(Self::default(), |mut counts, p| {
            match p.state {
                ParticleState::Liquid => counts.liquid += 1,
                ParticleState::Vapor => counts.vapor += 1,
                ParticleState::Condensed { .. } => counts.condensed += 1,
            }
            counts
        })
    }

    pub fn total(&self) -> usize {
        self.liquid + self.vapor + self.condensed
    }
}

/// One-line progress summary of an engine
pub fn summary(engine: &SimulationEngine) -> String {
    let counts = engine.counts();
    format!(
        "T:{:6} | Temp:{:5.1} | Liquid:{:4} | Vapor:{:4} | Condensed:{:4} | Collected:{:6}",
        engine.tick(),
        engine.temperature(),
        counts.liquid,
        counts.vapor,
        counts.condensed,
        engine.collected_water(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_cover_every_particle() {
        let mut particles = vec![Particle::new(0.0, 0.0, 0.0, 0.0); 5];
        particles[1].state = ParticleState::Vapor;
        particles[2].state = ParticleState::Vapor;
        particles[4].state = ParticleState::Condensed {
            condensation_time: 1.0,
        };

        let counts = ParticleCounts::from_particles(&particles);
        assert_eq!(
            counts,
            ParticleCounts {
                liquid: 2,
                vapor: 2,
                condensed: 1
            }
        );
        assert_eq!(counts.total(), 5);
    }

    #[test]
    fn test_summary_mentions_tick() {
        let mut engine = SimulationEngine::new_with_seed(4, 800.0, 400.0, 1);
        engine.run(3);
        let line = summary(&engine);
        assert!(line.starts_with("T:     3"));
        assert!(line.contains("Liquid:   4"));
    }
}
