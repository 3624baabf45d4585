//! Build a fully-initialized simulation scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with particles at t = 0)
//! - active force set (`AccelSet`) and its per-particle scratch buffer
//! - the viewer window settings
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! integration, field sampling and drawing systems

use anyhow::{ensure, Result};
use bevy::prelude::{debug, Resource};

use crate::configuration::config::{DisplayConfig, ParametersConfig, ParticleConfig, ScenarioConfig};
use crate::simulation::collision::in_box;
use crate::simulation::forces::{AccelSet, Coulomb};
use crate::simulation::integrator::euler_integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, Particle, System};

/// Bevy resource representing a fully-initialized simulation
///
/// Owns everything that persists across frames: the particle system and the
/// scratch acceleration buffer, sized once here and reused every step
#[derive(Resource)]
pub struct Scenario {
    pub display: DisplayConfig,
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
    pub accels: Vec<NVec2>,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        // Parameters (runtime) from ParametersConfig
        let parameters = build_parameters(&cfg.parameters)?;

        // Particles: map `ParticleConfig` -> runtime `Particle` using nalgebra vectors
        let particles = cfg
            .particles
            .iter()
            .enumerate()
            .map(|(i, pc)| build_particle(i, pc, &parameters))
            .collect::<Result<Vec<_>>>()?;

        // Initial system state: particles at t = 0
        let system = System::new(particles);

        // Forces: construct an AccelSet and register Coulomb's law
        let forces = AccelSet::new().with(Coulomb {
            permittivity: parameters.permittivity,
            deadzone: parameters.deadzone,
        });

        let accels = vec![NVec2::zeros(); system.len()];

        debug!(
            "built scenario: {} particles, box {}, grid {}",
            system.len(),
            parameters.box_extent,
            parameters.grid_resolution
        );

        Ok(Self {
            display: cfg.display,
            parameters,
            system,
            forces,
            accels,
        })
    }

    /// Advance the simulation by one frame of length `dt`
    pub fn advance(&mut self, dt: f64) {
        let Scenario {
            system,
            parameters,
            forces,
            accels,
            ..
        } = self;
        euler_integrator(system, forces, accels, parameters, dt);
    }
}

fn build_parameters(p: &ParametersConfig) -> Result<Parameters> {
    ensure!(p.box_extent > 0.0, "box_extent must be positive, got {}", p.box_extent);
    ensure!(p.grid_resolution > 0, "grid_resolution must be positive");
    ensure!(p.deadzone >= 0.0, "deadzone must not be negative, got {}", p.deadzone);
    ensure!(p.permittivity > 0.0, "permittivity must be positive, got {}", p.permittivity);
    ensure!(
        (0.0..=1.0).contains(&p.restitution),
        "restitution must lie in [0, 1], got {}",
        p.restitution
    );
    ensure!(p.field_scale >= 0.0, "field_scale must not be negative, got {}", p.field_scale);
    ensure!(
        p.elementary_charge.is_finite() && p.elementary_charge != 0.0,
        "elementary_charge must be finite and nonzero"
    );

    Ok(Parameters {
        elementary_charge: p.elementary_charge,
        permittivity: p.permittivity,
        deadzone: p.deadzone,
        box_extent: p.box_extent,
        grid_resolution: p.grid_resolution,
        restitution: p.restitution,
        field_scale: p.field_scale,
    })
}

fn build_particle(i: usize, pc: &ParticleConfig, params: &Parameters) -> Result<Particle> {
    ensure!(pc.x.len() == 2, "particle {i}: x needs 2 components, got {}", pc.x.len());
    ensure!(pc.v.len() == 2, "particle {i}: v needs 2 components, got {}", pc.v.len());
    ensure!(pc.q.is_finite() && pc.q != 0.0, "particle {i}: charge must be finite and nonzero");

    let p = Particle::new(
        NVec2::new(pc.x[0], pc.x[1]),
        NVec2::new(pc.v[0], pc.v[1]),
        pc.q * params.elementary_charge,
    );
    ensure!(
        in_box(&p, params.box_extent),
        "particle {i}: position ({}, {}) lies outside the box [0, {}]",
        p.x.x,
        p.x.y,
        params.box_extent
    );
    Ok(p)
}
