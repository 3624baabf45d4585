//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds every tunable the particle system and field sampler read:
//! - charge unit and permittivity for Coulomb's law,
//! - the squared-separation deadzone,
//! - box extent and wall restitution,
//! - field grid resolution and heat-map intensity scale

pub const ELEMENTARY_CHARGE: f64 = 1.602176634e-3;
pub const PERMITTIVITY: f64 = 8.854187813e-12;
pub const DEADZONE: f64 = 0.01;
pub const BOX_EXTENT: f64 = 1024.0;
pub const GRID_RESOLUTION: usize = 128;
pub const RESTITUTION: f64 = 0.8;
pub const FIELD_SCALE: f64 = 1.0e7;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub elementary_charge: f64, // unit multiplying configured charges
    pub permittivity: f64, // epsilon_0
    pub deadzone: f64, // pairs with |r|^2 at or below this are skipped
    pub box_extent: f64, // side of the square world box
    pub grid_resolution: usize, // field cells per side
    pub restitution: f64, // fraction of velocity kept after a wall hit
    pub field_scale: f64, // |qe| -> 0..255 intensity
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            elementary_charge: ELEMENTARY_CHARGE,
            permittivity: PERMITTIVITY,
            deadzone: DEADZONE,
            box_extent: BOX_EXTENT,
            grid_resolution: GRID_RESOLUTION,
            restitution: RESTITUTION,
            field_scale: FIELD_SCALE,
        }
    }
}
