//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of
//! a scenario:
//!
//! - [`ParametersConfig`] – world extent, frame rate, and physical constants
//! - [`BallConfig`]       – initial state for each ball
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   screen_width: 1024.0
//!   screen_height: 768.0
//!   fps: 60.0
//!   g: 2.0                 # gravitational scaling constant
//!   restitution: 0.8       # in (0, 1], 1 = perfectly elastic
//!   velocity_clamp: 0.001  # squared-speed rest threshold
//!   line_scale_force: 0.0000003
//!   line_scale_velocity: 0.6
//!
//! balls:                   # optional, the world may start empty
//!   - x: [ 412.0, 384.0 ]
//!     v: [ 0.0, 0.0 ]
//!     radius: 25.0
//!     color: [ 200, 60, 60, 255 ]
//! ```
//!
//! Ball mass is never configured; the engine derives it from the radius.

use serde::Deserialize;

/// Global numerical and physical parameters for a scenario.
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub screen_width: f64,  // world width, pixels
    pub screen_height: f64, // world height, pixels
    pub fps: f64,           // target frames per second
    pub g: f64,             // gravitational scaling constant
    pub restitution: f64,   // post-collision velocity damping, (0, 1]
    pub velocity_clamp: f64, // squared speed below which a ball is at rest
    pub line_scale_force: f64, // debug force vector scale
    pub line_scale_velocity: f64, // debug velocity vector scale
}

/// Configuration for a single ball's initial state.
#[derive(Deserialize, Debug)]
pub struct BallConfig {
    pub x: Vec<f64>,     // initial position, pixels
    pub v: Vec<f64>,     // initial velocity, pixels per second
    pub radius: f64,     // radius, pixels; mass is derived from this
    pub color: [u8; 4],  // RGBA, cosmetic only
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub balls: Vec<BallConfig>, // may be empty; balls can be spawned interactively
}
