//! Pairwise collision resolution
//!
//! Runs after integration as a positional correction plus a velocity
//! response; collision response is never an integrated force. Each
//! unordered pair of overlapping balls is visited once per frame, with
//! the lower-indexed ball as "self".

use super::params::Parameters;
use super::states::World;
use super::vec2;

/// Detect and resolve every overlapping pair in the world.
///
/// Per pair:
/// 1. de-penetration: displace both balls half the overlap along the
///    contact normal, equal and opposite, resolving the full
///    penetration in one step;
/// 2. decompose both velocities into normal and tangential components;
/// 3. 1D elastic exchange along the normal with mass weighting,
///    tangential components carried over unchanged, and one final
///    restitution scaling applied to both resulting velocities.
///
/// A pair with coincident centers is skipped entirely for the frame
/// (no defined contact normal).
pub fn resolve_collisions(world: &mut World, params: &Parameters) {
    let n = world.balls.len();

    for i in 0..n {
        for j in (i + 1)..n {
            let (head, tail) = world.balls.split_at_mut(j);
            let ball = &mut head[i];
            let other = &mut tail[0];

            if !ball.check_collision(other) {
                continue;
            }

            // Points from other toward self
            let normal = vec2::vector_from_positions(other.position, ball.position);
            if vec2::length_squared(normal) == 0.0 {
                continue;
            }

            let overlap = ball.radius + other.radius - vec2::length(normal);
            let displacement = vec2::normalize(normal) * overlap;
            ball.position += displacement / 2.0;
            other.position -= displacement / 2.0;

            // Contact frame after displacement
            let normal =
                vec2::normalize(vec2::vector_from_positions(other.position, ball.position));
            let tangent = vec2::perpendicular(normal);

            let normal_vel = vec2::project(ball.velocity, normal);
            let tangential_vel = vec2::project(ball.velocity, tangent);
            let other_normal_vel = vec2::project(other.velocity, normal);
            let other_tangential_vel = vec2::project(other.velocity, tangent);

            let total_mass = ball.mass + other.mass;
            ball.velocity = tangential_vel
                + ((ball.mass - other.mass) * normal_vel + 2.0 * other.mass * other_normal_vel)
                    / total_mass;
            other.velocity = other_tangential_vel
                + (2.0 * ball.mass * normal_vel + (other.mass - ball.mass) * other_normal_vel)
                    / total_mass;

            ball.velocity *= params.restitution;
            other.velocity *= params.restitution;
        }
    }
}
