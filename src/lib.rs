pub mod simulation;
pub mod field;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Particle, System, NVec2};
pub use simulation::params::Parameters;
pub use simulation::forces::{Acceleration, AccelSet, Coulomb};
pub use simulation::integrator::{step, integrate, euler_integrator};
pub use simulation::collision::resolve_walls;
pub use simulation::scenario::Scenario;
pub use field::sampler::{FieldGrid, sample_field, potential_at, encode};
pub use configuration::config::{DisplayConfig, ParametersConfig, ParticleConfig, ScenarioConfig};
pub use visualization::efield_vis2d::run_2d;
pub use benchmark::benchmark::{bench_coulomb, bench_field_curve};
