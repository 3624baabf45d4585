//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`DisplayConfig`]    – window size and title for the viewer
//! - [`ParametersConfig`] – physical constants, box, grid and heat-map tuning
//! - [`ParticleConfig`]   – initial state for each charged particle
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every section and field is optional; anything left out falls back to the
//! built-in three-dipole setup.
//!
//! # YAML format
//!
//! ```yaml
//! display:
//!   width: 1920
//!   height: 1080
//!   title: "efield"
//!
//! parameters:
//!   elementary_charge: 1.602176634e-3  # charge unit for `q` below
//!   permittivity: 8.854187813e-12      # epsilon_0
//!   deadzone: 0.01                     # squared separation cutoff
//!   box_extent: 1024.0                 # side of the world box
//!   grid_resolution: 128               # field cells per side
//!   restitution: 0.8                   # wall bounce retention
//!   field_scale: 1.0e7                 # heat-map intensity scale
//!
//! particles:
//!   - x: [ 25.0, 50.0 ]
//!     v: [  0.0,  5.0 ]
//!     q: 1.0
//!   - x: [ 50.0, 50.0 ]
//!     v: [  0.0,  0.0 ]
//!     q: -1.0
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::simulation::params::{
    BOX_EXTENT, DEADZONE, ELEMENTARY_CHARGE, FIELD_SCALE, GRID_RESOLUTION, PERMITTIVITY, RESTITUTION,
};

/// Window settings for the viewer
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: u32,    // window width in pixels
    pub height: u32,   // window height in pixels
    pub title: String, // window title
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            title: "efield".to_string(),
        }
    }
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ParametersConfig {
    pub elementary_charge: f64, // charge unit
    pub permittivity: f64,      // epsilon_0
    pub deadzone: f64,          // squared separation below which a pair is skipped
    pub box_extent: f64,        // side of the world box
    pub grid_resolution: usize, // heat-map cells per side
    pub restitution: f64,       // fraction of velocity kept on a wall bounce
    pub field_scale: f64,       // |potential| -> intensity scale
}

impl Default for ParametersConfig {
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

/// Configuration for a single particle's initial state
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ParticleConfig {
    pub x: Vec<f64>, // Initial position inside the box
    pub v: Vec<f64>, // Initial velocity
    pub q: f64,      // Charge in units of `elementary_charge`, nonzero
}

impl ParticleConfig {
    pub fn new(x: [f64; 2], v: [f64; 2], q: f64) -> Self {
        Self {
            x: x.to_vec(),
            v: v.to_vec(),
            q,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ScenarioConfig {
    pub display: DisplayConfig,       // Viewer window
    pub parameters: ParametersConfig, // Constants and tuning
    pub particles: Vec<ParticleConfig>, // The fixed particle set
}

impl Default for ScenarioConfig {
    /// Three dipoles: each positive charge drifts along +y next to a resting negative one
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            parameters: ParametersConfig::default(),
            particles: vec![
                ParticleConfig::new([25.0, 50.0], [0.0, 5.0], 1.0),
                ParticleConfig::new([50.0, 50.0], [0.0, 0.0], -1.0),
                ParticleConfig::new([35.0, 70.0], [0.0, 5.0], 1.0),
                ParticleConfig::new([60.0, 70.0], [0.0, 0.0], -1.0),
                ParticleConfig::new([75.0, 90.0], [0.0, 5.0], 1.0),
                ParticleConfig::new([100.0, 90.0], [0.0, 0.0], -1.0),
            ],
        }
    }
}

impl ScenarioConfig {
    /// Parse a scenario from a YAML string
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let cfg = serde_yaml::from_str(s).context("invalid scenario YAML")?;
        Ok(cfg)
    }

    /// Load a scenario from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open scenario {}", path.display()))?;
        let reader = BufReader::new(file);
        let cfg = serde_yaml::from_reader(reader)
            .with_context(|| format!("failed to parse scenario {}", path.display()))?;
        Ok(cfg)
    }
}
