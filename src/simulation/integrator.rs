//! Fixed-step explicit Euler integration for the charge system
//!
//! A frame is two full passes: every velocity is kicked from the positions at
//! the start of the frame, then every particle drifts and is bounced off the walls

use super::states::{System, NVec2};
use super::forces::AccelSet;
use super::params::Parameters;
use super::collision::resolve_walls;

/// Force pass: `v += dt * a` for every particle.
/// `accels` is caller-owned scratch, one slot per particle
pub fn step(sys: &mut System, forces: &AccelSet, accels: &mut [NVec2], dt: f64) {
    debug_assert_eq!(accels.len(), sys.particles.len());

    // All accelerations come from the positions at the start of the step
    forces.accumulate_accels(sys.t, &*sys, accels);

    for (p, a) in sys.particles.iter_mut().zip(accels.iter()) {
        p.v += dt * *a;
    }
}

/// Drift pass: `x += dt * v` for every particle
pub fn integrate(sys: &mut System, dt: f64) {
    for p in sys.particles.iter_mut() {
        p.x += dt * p.v;
    }
}

/// Advance the system by one frame of length `dt`.
/// Force pass, then drift with wall resolution, then `sys.t += dt`
pub fn euler_integrator(sys: &mut System, forces: &AccelSet, accels: &mut [NVec2], params: &Parameters, dt: f64) {
    if sys.particles.is_empty() { // no particles, only time moves
        sys.t += dt;
        return;
    }

    step(sys, forces, accels, dt);

    integrate(sys, dt);
    for p in sys.particles.iter_mut() {
        resolve_walls(p, params.box_extent, params.restitution);
    }

    sys.t += dt;
}
