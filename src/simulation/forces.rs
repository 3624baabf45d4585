//! Force / acceleration contributors for the charge simulation
//!
//! Particles carry no mass, so a force contribution is applied directly as a
//! velocity change per unit time. Defines the acceleration trait, the set that
//! sums terms, and the direct Coulomb interaction with a deadzone cutoff

use std::f64::consts::PI;

use crate::simulation::states::{System, NVec2};

/// Collection of acceleration terms
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per particle
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Compute total accelerations at time `t` for all particles in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        // Iterate over all acceration contributors
        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each particle
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec2]);
}

/// Direct pairwise Coulomb interaction
///
/// A pair whose squared separation is at or below `deadzone` is skipped
/// entirely instead of being softened
pub struct Coulomb {
    pub permittivity: f64, // epsilon_0
    pub deadzone: f64, // squared separation cutoff
}

impl Coulomb {
    /// Coulomb constant 1 / (4 pi epsilon_0)
    pub fn k(&self) -> f64 {
        (4.0 * PI * self.permittivity).recip()
    }

    /// Acceleration felt by a charge `qa` at separation `r = xa - xb` from `qb`.
    /// Zero when the pair falls in the deadzone
    pub fn pair(&self, r: NVec2, qa: f64, qb: f64) -> NVec2 {
        let r2 = r.norm_squared();
        if r2 <= self.deadzone {
            return NVec2::zeros();
        }
        // |F| = qa qb / (4 pi eps0 |r|^2), directed along r_hat
        let magnitude = qa * qb / (4.0 * PI * self.permittivity * r2);
        r / r2.sqrt() * magnitude
    }
}

impl Acceleration for Coulomb {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec2]) {
        let n = sys.particles.len();
        if n == 0 { // No particles, return
            return;
        }

        // Each unordered pair (i, j) with i < j, applied to both sides
        for i in 0..n {
            let pi = &sys.particles[i];
            for j in (i + 1)..n {
                let pj = &sys.particles[j];

                // r points from j to i; like charges push i along +r
                let a = self.pair(pi.x - pj.x, pi.q, pj.q);

                out[i] += a;
                out[j] -= a;
            }
        }
    }
}
