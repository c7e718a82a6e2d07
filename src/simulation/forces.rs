//! Force contributors for the ball simulation
//!
//! Each term implements [`Force`] and their contributions are summed
//! into a single net-force vector per ball. The buffer is fully
//! recomputed every frame; stale values from the prior frame never
//! survive accumulation.

use crate::simulation::states::World;
use crate::simulation::vec2::{self, NVec2};

/// Collection of force terms (gravity, and whatever gets added later).
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Force + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total forces for all balls in `world`.
    /// `out[i]` is zeroed first and set to the sum of contributions
    /// from all terms.
    pub fn accumulate_forces(&self, world: &World, out: &mut [NVec2]) {
        for f in out.iter_mut() {
            *f = NVec2::zeros();
        }
        for term in &self.terms {
            term.accumulate(world, out);
        }
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for force sources operating on [`World`].
/// Implementations add their contribution into `out[i]` for each ball.
pub trait Force {
    fn accumulate(&self, world: &World, out: &mut [NVec2]);
}

/// Pairwise gravitational attraction, direct n^2 sum.
///
/// Force magnitude between a pair is `g * m_i * m_j / d^2`, directed
/// along the center line. No softening: a pair with coincident centers
/// contributes nothing that frame (explicit zero-distance guard rather
/// than an epsilon term).
pub struct MutualGravity {
    pub g: f64,
}

impl Force for MutualGravity {
    fn accumulate(&self, world: &World, out: &mut [NVec2]) {
        let n = world.balls.len();

        // Each unordered pair once; the pull on i is the exact negation
        // of the pull on j, so one evaluation covers both.
        for i in 0..n {
            let bi = &world.balls[i];
            for j in (i + 1)..n {
                let bj = &world.balls[j];

                // Displacement from i to j; i is pulled along +r, j along -r.
                let r = vec2::vector_from_positions(bi.position, bj.position);
                let d2 = vec2::length_squared(r);
                if d2 == 0.0 {
                    // Coincident centers, no contribution this frame
                    continue;
                }

                let magnitude = bi.mass * bj.mass / d2;

                // Normalize the direction and scale by g and the magnitude
                let f = self.g * magnitude * vec2::rsqrt(d2) * r;

                out[i] += f;
                out[j] -= f;
            }
        }
    }
}
