use std::time::Instant;

use crate::field::sampler::FieldGrid;
use crate::simulation::forces::{AccelSet, Acceleration, Coulomb};
use crate::simulation::integrator::euler_integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, Particle, System};

/// Helper to build a manual System of size `n`, alternating charge signs
fn make_system(n: usize, params: &Parameters) -> System {
    let mut particles = Vec::with_capacity(n);
    let half = params.box_extent / 2.0;

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec2::new(
            half + (i_f * 0.37).sin() * half * 0.9,
            half + (i_f * 0.13).cos() * half * 0.9,
        );
        let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
        let q = sign * params.elementary_charge;
        particles.push(Particle::new(x, NVec2::zeros(), q));
    }

    System::new(particles)
}

/// Time the Coulomb force pass alone and a full Euler frame for a range of n
pub fn bench_coulomb() {
    let ns = [6, 50, 100, 200, 400, 800, 1600];
    let steps = 10;
    let params = Parameters::default();
    let dt = 1.0 / 60.0;

    for n in ns {
        let mut sys = make_system(n, &params);
        let mut out = vec![NVec2::zeros(); n];

        let coulomb = Coulomb {
            permittivity: params.permittivity,
            deadzone: params.deadzone,
        };

        // Warm up
        coulomb.acceleration(0.0, &sys, &mut out);

        let t0 = Instant::now();
        coulomb.acceleration(0.0, &sys, &mut out);
        let force_pass = t0.elapsed().as_secs_f64();

        let forces = AccelSet::new().with(Coulomb {
            permittivity: params.permittivity,
            deadzone: params.deadzone,
        });

        let t1 = Instant::now();
        for _ in 0..steps {
            euler_integrator(&mut sys, &forces, &mut out, &params, dt);
        }
        let per_step = t1.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, force pass = {:10.8} s, euler step = {:10.8} s", force_pass, per_step);
    }
}

/// Time one heat-map resample for a range of grid resolutions
/// Paste output directly into a spreadsheet to graph
pub fn bench_field_curve() {
    let params = Parameters::default();
    let sys = make_system(6, &params);

    println!("resolution,sample_ms");

    for resolution in (32..=512).step_by(32) {
        let mut grid = FieldGrid::new(resolution);
        let repeats = if resolution <= 128 { 5 } else { 1 };

        let t0 = Instant::now();
        for _ in 0..repeats {
            grid.sample(&sys.particles, params.box_extent, params.field_scale);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / repeats as f64;

        println!("{},{:.6}", resolution, ms);
    }
}
