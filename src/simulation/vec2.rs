//! 2D vector math for the ball simulation.
//!
//! Everything operates on nalgebra's `Vector2<f64>` (aliased `NVec2`);
//! add/sub/scalar ops and their in-place forms come straight from
//! nalgebra's operators. The functions here cover the geometry the
//! physics core needs: distances, projections, perpendiculars, and a
//! fast approximate inverse square root.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Squared distance between two points.
pub fn distance_squared(a: NVec2, b: NVec2) -> f64 {
    let d = b - a;
    d.x * d.x + d.y * d.y
}

/// Squared distance from a point to the origin (squared length).
pub fn length_squared(v: NVec2) -> f64 {
    v.x * v.x + v.y * v.y
}

pub fn dot(a: NVec2, b: NVec2) -> f64 {
    a.x * b.x + a.y * b.y
}

/// Scalar z-component of the 3D cross product of two in-plane vectors.
pub fn cross(a: NVec2, b: NVec2) -> f64 {
    a.x * b.y - b.x * a.y
}

/// Displacement vector from `a` to `b`.
pub fn vector_from_positions(a: NVec2, b: NVec2) -> NVec2 {
    b - a
}

/// 90 degrees counterclockwise rotation.
pub fn perpendicular(v: NVec2) -> NVec2 {
    NVec2::new(-v.y, v.x)
}

/// Fast approximate inverse square root (bit-level Newton-Raphson seed,
/// one refinement iteration). Relative error is on the order of 0.1%;
/// callers treat it as a documented numerical approximation.
/// Magic constant for doubles from https://cs.uwaterloo.ca/~m32rober/rsqrt.pdf
pub fn rsqrt(number: f64) -> f64 {
    let x2 = number * 0.5;
    let i = 0x5fe6_eb50_c7b5_37a9_u64.wrapping_sub(number.to_bits() >> 1);
    let y = f64::from_bits(i);
    y * (1.5 - x2 * y * y)
}

/// Unit vector in the direction of `v`. The zero vector normalizes to
/// the zero vector (coincident-position guard, so `rsqrt(0)` is never
/// reached through here).
pub fn normalize(v: NVec2) -> NVec2 {
    let d2 = length_squared(v);
    if d2 == 0.0 {
        return NVec2::zeros();
    }
    v * rsqrt(d2)
}

pub fn length(v: NVec2) -> f64 {
    length_squared(v).sqrt()
}

/// Projection of `a` onto the axis spanned by `onto`.
/// Projecting onto the zero vector yields the zero vector.
pub fn project(a: NVec2, onto: NVec2) -> NVec2 {
    let axis = normalize(onto);
    dot(a, axis) * axis
}
