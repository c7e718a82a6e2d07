//! Runtime parameters for the simulation
//!
//! `Parameters` holds the startup constants:
//! - world extent in pixels and the target frame rate,
//! - gravitational scaling constant `g` and restitution coefficient,
//! - rest threshold for the velocity clamp,
//! - debug line-length scale factors for the overlay.

#[derive(Debug, Clone)]
pub struct Parameters {
    pub screen_width: f64,  // world width, pixels
    pub screen_height: f64, // world height, pixels
    pub fps: f64,           // target frames per second
    pub g: f64,             // gravitational scaling constant
    pub restitution: f64,   // in (0, 1], 1 = perfectly elastic
    pub velocity_clamp: f64, // squared speed at or below which velocity snaps to zero
    pub line_scale_force: f64,    // debug force vector scale
    pub line_scale_velocity: f64, // debug velocity vector scale
}
