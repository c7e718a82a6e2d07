//! Semi-implicit Euler integration for the ball world
//!
//! Advances every ball by the frame's elapsed time `dt`, then applies
//! the rest-velocity clamp and the toroidal boundary wrap, and bumps
//! `world.t`. The currently picked-up ball is integrated like any other
//! and overridden by the interaction controller afterwards.

use super::params::Parameters;
use super::states::World;
use super::vec2::{self, NVec2};

/// Advance the world by one step of `dt` seconds (`dt >= 0`).
///
/// Velocity is updated from the accumulated force before the position
/// update, with the new velocity (symplectic Euler). A non-positive
/// mass skips force and velocity application entirely: the ball is
/// treated as immovable rather than dividing by zero.
pub fn euler_integrator(world: &mut World, params: &Parameters, dt: f64) {
    for ball in world.balls.iter_mut() {
        if ball.mass > 0.0 {
            ball.velocity += ball.force / ball.mass * dt;
            ball.position += ball.velocity * dt;
        }

        // Clamp down the velocity so resting balls do not creep
        if vec2::length_squared(ball.velocity) <= params.velocity_clamp {
            ball.velocity = NVec2::zeros();
        }

        // Toroidal wrap: exit one edge, re-enter the opposite one.
        // Velocity and the other axis are untouched.
        if ball.position.x < 0.0 {
            ball.position.x = params.screen_width;
        }
        if ball.position.x > params.screen_width {
            ball.position.x = 0.0;
        }
        if ball.position.y < 0.0 {
            ball.position.y = params.screen_height;
        }
        if ball.position.y > params.screen_height {
            ball.position.y = 0.0;
        }
    }

    world.t += dt;
}
