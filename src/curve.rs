//! Closed-form curves driving the heart shape and its animation.

use glam::Vec2;

/// Default enlargement applied to the raw heart curve.
pub const DEFAULT_ENLARGEMENT: f32 = 11.0;

/// Raw heart boundary at parameter `t`, centered on the origin.
///
/// `x = 17 sin^3(t)`, `y = -(16 cos t - 5 cos 2t - 3 cos 3t)`.
/// Canvas y grows downward, hence the negation. Uniform `t` is not uniform in
/// arc length, so points cluster where the curve moves slowly.
#[inline]
pub fn heart_curve_raw(t: f32) -> Vec2 {
    let s = t.sin();
    Vec2::new(
        17.0 * s * s * s,
        -(16.0 * t.cos() - 5.0 * (2.0 * t).cos() - 3.0 * (3.0 * t).cos()),
    )
}

/// Heart boundary point scaled by `enlargement` and translated to `center`.
#[inline]
pub fn heart_curve(t: f32, center: Vec2, enlargement: f32) -> Vec2 {
    heart_curve_raw(t) * enlargement + center
}

/// Periodic modulation curve: `2 * (2 sin 4p) / (2 PI)`.
///
/// Peaks at about +/-0.637, not +/-1.
#[inline]
pub fn breathing_curve(p: f32) -> f32 {
    2.0 * (2.0 * (4.0 * p).sin()) / std::f32::consts::TAU
}
