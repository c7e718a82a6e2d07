//! Core state types for the ball simulation.
//!
//! Defines:
//! - `Ball`  a circular massive body with per-frame accumulated force
//! - `World` the ordered ball collection and the current simulation time `t`
//! - `Rgba`  cosmetic color, no physics role
//! - `DrawRecord` the read-only per-ball record handed to the renderer
//!
//! Mass is always derived from radius via the cube law
//! `m = (4/3) * pi * r^3` and recomputed whenever the radius changes.

use super::vec2::{self, NVec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[derive(Debug, Clone)]
pub struct Ball {
    pub position: NVec2, // world-space center, pixels
    pub velocity: NVec2, // pixels per second
    pub force: NVec2,    // net force for the current frame only
    pub radius: f64,
    pub mass: f64,       // derived from radius, never configured directly
    pub color: Rgba,
}

/// Mass of a ball of the given radius, `(4/3) * pi * r^3`.
pub fn mass_from_radius(radius: f64) -> f64 {
    (4.0 / 3.0) * std::f64::consts::PI * radius.powi(3)
}

impl Ball {
    pub fn new(radius: f64, color: Rgba, position: NVec2, velocity: NVec2) -> Self {
        Self {
            position,
            velocity,
            force: NVec2::zeros(),
            radius,
            mass: mass_from_radius(radius),
            color,
        }
    }

    /// Set the radius and recompute the mass from the cube law.
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
        self.mass = mass_from_radius(radius);
    }

    /// Circle-circle overlap test, inclusive boundary (touching counts).
    pub fn check_collision(&self, other: &Ball) -> bool {
        let reach = self.radius + other.radius;
        vec2::distance_squared(other.position, self.position) <= reach * reach
    }

    /// Point containment test, used for pointer hit-testing.
    pub fn contains_point(&self, point: NVec2) -> bool {
        vec2::distance_squared(point, self.position) <= self.radius * self.radius
    }
}

/// The full simulation state: balls in creation order plus elapsed time.
/// Balls are only ever appended, never removed, so an index into `balls`
/// stays valid for the lifetime of the world.
#[derive(Debug, Clone)]
pub struct World {
    pub balls: Vec<Ball>,
    pub t: f64,
}

/// Immutable per-ball draw record for the render collaborator, with
/// pre-scaled debug vector endpoints.
#[derive(Debug, Clone)]
pub struct DrawRecord {
    pub center: NVec2,
    pub radius: f64,
    pub color: Rgba,
    pub velocity_end: NVec2,
    pub force_end: NVec2,
}
