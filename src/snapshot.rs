//! Snapshot structures sent to the browser.
//!
//! These are plain copies of the engine state in the exact shape the front-end
//! draws from: particles carry two phase flags, liquid being the absence of both.

use serde::{Deserialize, Serialize};

use crate::condenser::Condenser;
use crate::engine::SimulationEngine;
use crate::particle::Particle;

/// Wire view of a particle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleView {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub is_vapor: bool,
    pub is_condensed: bool,
}

impl From<&Particle> for ParticleView {
    fn from(p: &Particle) -> Self {
        Self {
            x: p.x,
            y: p.y,
            vx: p.vx,
            vy: p.vy,
            is_vapor: p.state.is_vapor(),
            is_condensed: p.state.is_condensed(),
        }
    }
}

/// Complete simulation snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSnapshot {
    pub temperature: f64,
    pub is_heating: bool,
    pub particles: Vec<ParticleView>,
    pub condenser: Condenser,
    pub collected_water: u64,
}

impl SimulationSnapshot {
    /// Copy the current engine state
    pub fn from_engine(engine: &SimulationEngine) -> Self {
        Self {
            temperature: engine.temperature(),
            is_heating: engine.is_heating(),
            particles: engine.particles.iter().map(ParticleView::from).collect(),
            condenser: *engine.condenser(),
            collected_water: engine.collected_water(),
        }
    }
}
