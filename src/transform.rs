//! Point transforms: diffusion, shrink and per-frame breathing perturbation.
//!
//! All three are pure apart from the draws they take from the sampler. A point
//! sitting exactly on the center feels no radial force.

use crate::random::Sampler;
use glam::Vec2;

/// Exponent on squared distance for [`shrink_toward_center`] (d^1.2).
pub const SHRINK_EXPONENT: f32 = 0.6;

/// Exponent on squared distance for [`perturb_position`] (d^0.84).
pub const PERTURB_EXPONENT: f32 = 0.42;

/// Inverse-power radial force magnitude `1 / (d^2)^exponent`.
///
/// Zero at the center instead of a division fault.
#[inline]
pub fn radial_force(point: Vec2, center: Vec2, exponent: f32) -> f32 {
    let d2 = point.distance_squared(center);
    if d2 <= f32::EPSILON {
        return 0.0;
    }
    1.0 / d2.powf(exponent)
}

/// Scatter a point inward along each axis independently.
///
/// Each axis draws `-beta * ln(U)` and moves the point that fraction of its
/// offset toward the center. Larger `beta` pulls further in; a draw above 1
/// overshoots past the center.
pub fn scatter_inside(point: Vec2, center: Vec2, beta: f32, sampler: &mut Sampler) -> Vec2 {
    let ratio = Vec2::new(
        -beta * sampler.random_open_unit().ln(),
        -beta * sampler.random_open_unit().ln(),
    );
    point - ratio * (point - center)
}

/// Move a point radially by `ratio * -1/d^1.2`.
///
/// Positive `ratio` compresses toward the center; `ratio == 0` is identity.
#[inline]
pub fn shrink_toward_center(point: Vec2, center: Vec2, ratio: f32) -> Vec2 {
    let force = -radial_force(point, center, SHRINK_EXPONENT);
    point + ratio * force * (point - center)
}

/// Breathing perturbation applied to every static point each frame.
///
/// Moves the point by `ratio / d^0.84` of its offset (inward for positive
/// `ratio`, outward for negative) plus an integer jitter in `[-1, 1]` per axis.
pub fn perturb_position(point: Vec2, center: Vec2, ratio: f32, sampler: &mut Sampler) -> Vec2 {
    let force = radial_force(point, center, PERTURB_EXPONENT);
    let jitter = Vec2::new(
        sampler.random_int(-1, 1) as f32,
        sampler.random_int(-1, 1) as f32,
    );
    let delta = ratio * force * (point - center) + jitter;
    point - delta
}
