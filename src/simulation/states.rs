//! Core state types for the charge simulation.
//!
//! - `Particle` a charged point mass in the 2D box
//! - `System` the owned particle collection plus the accumulated simulation time `t`

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub q: f64, // charge, already scaled by the elementary charge
}

impl Particle {
    pub fn new(x: NVec2, v: NVec2, q: f64) -> Self {
        Self { x, v, q }
    }

    pub fn is_negative(&self) -> bool {
        self.q < 0.0
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub particles: Vec<Particle>, // fixed set, created once
    pub t: f64, // time
}

impl System {
    pub fn new(particles: Vec<Particle>) -> Self {
        Self { particles, t: 0.0 }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
