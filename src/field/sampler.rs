//! Heat-map sampling of the superposed charge potential
//!
//! The grid stores RGBA8 texels row-major (`j * resolution + i`, `i` along x).
//! Positive potential tints red, negative tints blue, and alpha follows the
//! intensity so a vanishing field is fully transparent.

use crate::simulation::states::{Particle, NVec2};

pub type Rgba = [u8; 4];

/// Signed potential-like sum `q_k / |x_k - point|` over all particles.
/// A particle sitting exactly on `point` yields an infinite or NaN value
pub fn potential_at(particles: &[Particle], point: NVec2) -> f64 {
    particles
        .iter()
        .map(|p| p.q / (p.x - point).norm())
        .sum()
}

/// Map a potential to a texel.
/// `intensity = clamp(|qe| * field_scale, 0, 255)` lands in red for `qe > 0`,
/// blue for `qe < 0`, and in alpha either way. Green is always 0
pub fn encode(qe: f64, field_scale: f64) -> Rgba {
    // NaN survives clamp and casts to 0
    let intensity = (qe.abs() * field_scale).clamp(0.0, 255.0) as u8;
    let r = if qe < 0.0 { 0 } else { intensity };
    let b = if qe > 0.0 { 0 } else { intensity };
    [r, 0, b, intensity]
}

/// Fixed-resolution RGBA heat-map over the world box
#[derive(Debug, Clone, PartialEq)]
pub struct FieldGrid {
    resolution: usize,
    pixels: Vec<Rgba>,
}

impl FieldGrid {
    /// Transparent grid of `resolution x resolution` texels
    pub fn new(resolution: usize) -> Self {
        Self {
            resolution,
            pixels: vec![[0; 4]; resolution * resolution],
        }
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Texel for cell `(i, j)`, `i` along x and `j` along y
    pub fn pixel(&self, i: usize, j: usize) -> Rgba {
        self.pixels[j * self.resolution + i]
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Flat RGBA8 bytes, ready for a texture upload
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_flattened()
    }

    /// World-space center of cell `(i, j)`
    pub fn cell_center(&self, i: usize, j: usize, box_extent: f64) -> NVec2 {
        let scale = box_extent / self.resolution as f64;
        NVec2::new(scale * (i as f64 + 0.5), scale * (j as f64 + 0.5))
    }

    /// Resample every cell in place from the current particle positions
    pub fn sample(&mut self, particles: &[Particle], box_extent: f64, field_scale: f64) {
        let n = self.resolution;
        let scale = box_extent / n as f64;
        for j in 0..n {
            let y = scale * (j as f64 + 0.5);
            for i in 0..n {
                let point = NVec2::new(scale * (i as f64 + 0.5), y);
                self.pixels[j * n + i] = encode(potential_at(particles, point), field_scale);
            }
        }
    }
}

/// Allocate a grid and sample it once
pub fn sample_field(particles: &[Particle], grid_resolution: usize, box_extent: f64, field_scale: f64) -> FieldGrid {
    let mut grid = FieldGrid::new(grid_resolution);
    grid.sample(particles, box_extent, field_scale);
    grid
}
