//! Simulation engine - owns the particles and advances them tick by tick.

use crate::condenser::Condenser;
use crate::config::Config;
use crate::particle::{Particle, ParticleState};
use crate::snapshot::SimulationSnapshot;
use crate::stats::ParticleCounts;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

/// Water boils at this temperature (Celsius)
pub const BOILING_POINT: f64 = 100.0;
/// Lowest temperature the engine accepts
pub const MIN_TEMPERATURE: f64 = 0.0;
/// Highest temperature the engine accepts
pub const MAX_TEMPERATURE: f64 = 150.0;

/// Downward acceleration per tick
const GRAVITY: f64 = 0.1;
/// Upward acceleration applied to vapor each tick
const VAPOR_BUOYANCY: f64 = 0.05;
/// Standard deviation of the horizontal jitter applied to vapor
const VAPOR_JITTER: f64 = 0.1;
/// Ticks a condensed particle drains before reaching the collection vessel
const DRAIN_TICKS: f64 = 100.0;
/// Distance kept between particles and the canvas edge
const WALL_MARGIN: f64 = 50.0;
/// Temperature at which particles move at their nominal velocity
const NOMINAL_TEMPERATURE: f64 = 50.0;

/// The boiling flask particles start in, in pixel space
#[derive(Debug, Clone, Copy)]
struct Vessel {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Vessel {
    /// Left third of the canvas, in a 200px band centred vertically
    fn for_canvas(width: f64, height: f64) -> Self {
        Self {
            x: 50.0,
            y: height / 2.0 - 100.0,
            width: width / 3.0 - 50.0,
            height: 200.0,
        }
    }

    /// Random position in the lower half of the vessel
    fn sample_position<R: Rng>(&self, rng: &mut R) -> (f64, f64) {
        let x = sample_range(rng, self.x + 10.0, self.x + self.width - 10.0);
        let y = sample_range(rng, self.y + self.height / 2.0, self.y + self.height - 10.0);
        (x, y)
    }
}

/// Uniform sample that collapses to `low` when the range is empty or unbounded
fn sample_range<R: Rng>(rng: &mut R, low: f64, high: f64) -> f64 {
    if low.is_finite() && high.is_finite() && high > low {
        rng.gen_range(low..high)
    } else {
        low
    }
}

/// The boiling / condensation simulation
pub struct SimulationEngine {
    // Particles (fixed count, recycled forever)
    pub particles: Vec<Particle>,

    // Canvas
    width: f64,
    height: f64,

    // Controls
    temperature: f64,
    is_heating: bool,

    // Geometry
    condenser: Condenser,
    collection_point: (f64, f64),

    // Counters
    collected_water: u64,
    tick: u64,

    // Random number generator (seeded for reproducibility)
    rng: ChaCha8Rng,
    seed: u64,
}

impl SimulationEngine {
    /// Create an engine with the given canvas and particle count
    pub fn new(num_particles: usize, width: f64, height: f64) -> Self {
        let seed = rand::thread_rng().gen();
        Self::new_with_seed(num_particles, width, height, seed)
    }

    /// Create an engine with a specific seed for reproducibility
    pub fn new_with_seed(num_particles: usize, width: f64, height: f64, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let vessel = Vessel::for_canvas(width, height);
        let particles = (0..num_particles)
            .map(|_| {
                let (x, y) = vessel.sample_position(&mut rng);
                let vx: f64 = rng.sample(StandardNormal);
                let vy: f64 = rng.sample(StandardNormal);
                Particle::new(x, y, vx, vy)
            })
            .collect();

        Self {
            particles,
            width,
            height,
            temperature: 25.0,
            is_heating: false,
            condenser: Condenser::for_canvas(width, height),
            collection_point: (width * 0.7, height * 0.3),
            collected_water: 0,
            tick: 0,
            rng,
            seed,
        }
    }

    /// Create an engine from configuration
    pub fn from_config(config: &Config) -> Self {
        let sim = &config.simulation;
        let mut engine = match sim.seed {
            Some(seed) => Self::new_with_seed(sim.num_particles, sim.width, sim.height, seed),
            None => Self::new(sim.num_particles, sim.width, sim.height),
        };
        engine.temperature = sim.initial_temperature.clamp(MIN_TEMPERATURE, MAX_TEMPERATURE);
        engine
    }

    /// Flip the heater on or off, returning the new state
    pub fn toggle_heating(&mut self) -> bool {
        self.is_heating = !self.is_heating;
        self.is_heating
    }

    /// Set the temperature (clamped to [0, 150]) and advance one tick so the
    /// change shows up immediately.
    pub fn set_temperature(&mut self, temperature: f64) {
        self.temperature = temperature.clamp(MIN_TEMPERATURE, MAX_TEMPERATURE);
        self.update();
    }

    /// Advance every particle by one tick
    pub fn update(&mut self) {
        let speed_multiplier = self.temperature / NOMINAL_TEMPERATURE;
        let boiling = self.temperature >= BOILING_POINT;
        let drain_vx = self.condenser.drain_velocity(GRAVITY);
        let (min_x, max_x) = (WALL_MARGIN, self.width - WALL_MARGIN);
        let (min_y, max_y) = (WALL_MARGIN, self.height - WALL_MARGIN);

        for particle in &mut self.particles {
            if let ParticleState::Condensed { condensation_time } = particle.state {
                // Condensed water slides down the plate; its position is frozen
                particle.vy += GRAVITY;
                particle.vx = drain_vx;
                let condensation_time = condensation_time + 1.0;

                if condensation_time > DRAIN_TICKS {
                    particle.state = ParticleState::Liquid;
                    (particle.x, particle.y) = self.collection_point;
                    self.collected_water += 1;
                } else {
                    particle.state = ParticleState::Condensed { condensation_time };
                }
                continue;
            }

            if particle.state.is_vapor() {
                particle.vy -= VAPOR_BUOYANCY;
                let jitter: f64 = self.rng.sample(StandardNormal);
                particle.vx += jitter * VAPOR_JITTER;
            }

            particle.x += particle.vx * speed_multiplier;
            particle.y += particle.vy * speed_multiplier;
            particle.reflect(min_x, max_x, min_y, max_y);

            // Phase follows the temperature every tick, so particles flicker
            // between liquid and vapor right at the boiling point
            particle.state = if boiling {
                ParticleState::Vapor
            } else {
                ParticleState::Liquid
            };

            if particle.state.is_vapor() && self.condenser.contains(particle.x, particle.y) {
                particle.state = ParticleState::Condensed {
                    condensation_time: 0.0,
                };
            }
        }

        self.tick += 1;
    }

    /// Run `ticks` updates
    pub fn run(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.update();
        }
    }

    /// Serializable view of the current state (pure read)
    pub fn get_state(&self) -> SimulationSnapshot {
        SimulationSnapshot::from_engine(self)
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn is_heating(&self) -> bool {
        self.is_heating
    }

    /// Number of particles that completed the condense-and-drain cycle
    pub fn collected_water(&self) -> u64 {
        self.collected_water
    }

    /// Number of updates performed since construction
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn condenser(&self) -> &Condenser {
        &self.condenser
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Particles per phase
    pub fn counts(&self) -> ParticleCounts {
        ParticleCounts::from_particles(&self.particles)
    }
}
