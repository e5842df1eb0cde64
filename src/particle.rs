//! Water particles and their phase lifecycle.

use serde::{Deserialize, Serialize};

/// Phase of a single particle.
///
/// A particle cycles `Liquid -> Vapor -> Condensed -> Liquid` for the whole
/// lifetime of the process. The condensation clock only exists while the
/// particle sits on the condenser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum ParticleState {
    #[default]
    Liquid,
    Vapor,
    Condensed {
        /// Ticks spent draining down the condenser
        condensation_time: f64,
    },
}

impl ParticleState {
    pub fn is_vapor(&self) -> bool {
        matches!(self, Self::Vapor)
    }

    pub fn is_condensed(&self) -> bool {
        matches!(self, Self::Condensed { .. })
    }

    pub fn is_liquid(&self) -> bool {
        matches!(self, Self::Liquid)
    }
}

/// A water particle in pixel space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub state: ParticleState,
}

impl Particle {
    /// Create a liquid particle
    pub fn new(x: f64, y: f64, vx: f64, vy: f64) -> Self {
        Self {
            x,
            y,
            vx,
            vy,
            state: ParticleState::Liquid,
        }
    }

    /// Ticks since condensation began, `None` unless condensed
    pub fn condensation_time(&self) -> Option<f64> {
        match self.state {
            ParticleState::Condensed { condensation_time } => Some(condensation_time),
            _ => None,
        }
    }

    /// Reflect off the walls of `[min_x, max_x] x [min_y, max_y]`.
    ///
    /// Each axis is checked independently; a clamp negates the velocity
    /// component of that axis.
    pub fn reflect(&mut self, min_x: f64, max_x: f64, min_y: f64, max_y: f64) {
        if self.x < min_x {
            self.x = min_x;
            self.vx = -self.vx;
        } else if self.x > max_x {
            self.x = max_x;
            self.vx = -self.vx;
        }

        if self.y < min_y {
            self.y = min_y;
            self.vy = -self.vy;
        } else if self.y > max_y {
            self.y = max_y;
            self.vy = -self.vy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_particle_is_liquid() {
        let p = Particle::new(1.0, 2.0, 0.5, -0.5);
        assert!(p.state.is_liquid());
        assert!(!p.state.is_vapor());
        assert!(!p.state.is_condensed());
        assert_eq!(p.condensation_time(), None);
    }

    #[test]
    fn test_default_state_is_liquid() {
        assert_eq!(ParticleState::default(), ParticleState::Liquid);
    }

    #[test]
    fn test_condensation_time_only_when_condensed() {
        let mut p = Particle::new(0.0, 0.0, 0.0, 0.0);
        p.state = ParticleState::Condensed {
            condensation_time: 12.0,
        };
        assert_eq!(p.condensation_time(), Some(12.0));
        p.state = ParticleState::Vapor;
        assert_eq!(p.condensation_time(), None);
    }

    #[test]
    fn test_reflect_low_walls() {
        let mut p = Particle::new(10.0, 20.0, -3.0, -4.0);
        p.reflect(50.0, 750.0, 50.0, 350.0);
        assert_eq!((p.x, p.y), (50.0, 50.0));
        assert_eq!((p.vx, p.vy), (3.0, 4.0));
    }

    #[test]
    fn test_reflect_high_walls() {
        let mut p = Particle::new(800.0, 400.0, 2.0, 1.0);
        p.reflect(50.0, 750.0, 50.0, 350.0);
        assert_eq!((p.x, p.y), (750.0, 350.0));
        assert_eq!((p.vx, p.vy), (-2.0, -1.0));
    }

    #[test]
    fn test_reflect_inside_is_noop() {
        let mut p = Particle::new(100.0, 100.0, 2.0, 1.0);
        p.reflect(50.0, 750.0, 50.0, 350.0);
        assert_eq!(p, Particle::new(100.0, 100.0, 2.0, 1.0));
    }
}
