//! Inclined condenser plate.

use serde::{Deserialize, Serialize};

/// Thickness of the condensing surface below the plate line, in pixels
const SURFACE_THICKNESS: f64 = 5.0;

/// A straight condenser segment anchored at `(start_x, start_y)` and tilted
/// `angle` radians from horizontal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Condenser {
    pub start_x: f64,
    pub start_y: f64,
    pub length: f64,
    pub angle: f64,
}

impl Condenser {
    /// Place the condenser for a canvas of the given size: 30 degrees,
    /// 40% of the width long, starting at (30% width, 20% height).
    pub fn for_canvas(width: f64, height: f64) -> Self {
        Self {
            start_x: width * 0.3,
            start_y: height * 0.2,
            length: width * 0.4,
            angle: std::f64::consts::FRAC_PI_6,
        }
    }

    /// Transform a world point into the plate's local frame.
    ///
    /// `x` runs along the plate from its start, `y` is perpendicular to it.
    pub fn to_local(&self, x: f64, y: f64) -> (f64, f64) {
        let rel_x = x - self.start_x;
        let rel_y = y - self.start_y;
        let (sin_a, cos_a) = (-self.angle).sin_cos();
        (rel_x * cos_a - rel_y * sin_a, rel_x * sin_a + rel_y * cos_a)
    }

    /// Inverse of [`Condenser::to_local`]
    pub fn to_world(&self, local_x: f64, local_y: f64) -> (f64, f64) {
        let (sin_a, cos_a) = self.angle.sin_cos();
        (
            self.start_x + local_x * cos_a - local_y * sin_a,
            self.start_y + local_x * sin_a + local_y * cos_a,
        )
    }

    /// Whether a point lies on the condensing surface
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let (local_x, local_y) = self.to_local(x, y);
        (0.0..=self.length).contains(&local_x) && (-SURFACE_THICKNESS..=0.0).contains(&local_y)
    }

    /// Horizontal velocity of water draining down the incline
    pub fn drain_velocity(&self, gravity: f64) -> f64 {
        -self.angle.sin() * gravity * 2.0
    }
}
