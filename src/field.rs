//! Static point populations sampled once per generator.
//!
//! # Set semantics
//!
//! Points are deduplicated by value, never by identity:
//!
//! | Key | Equality | Used for |
//! |-----|----------|----------|
//! | [`PointKey`] | exact f32 bits of both coordinates (`-0.0 == 0.0`) | outline and diffusion sets |
//! | [`HaloKey`] | coordinates truncated toward zero to `i32` | per-frame halo |
//!
//! The halo key is deliberately coarse: it bounds halo density to one point
//! per pixel cell. Tightening it would visibly thicken the halo.

use crate::config::HeartConfig;
use crate::curve::heart_curve;
use crate::random::Sampler;
use crate::transform::scatter_inside;
use glam::Vec2;
use std::collections::HashSet;
use std::f32::consts::TAU;

/// Exact-value identity of a point.
///
/// No quantization on purpose: two static points collapse only when both
/// coordinates are bit-for-bit equal (after folding `-0.0` into `0.0`), so
/// diffused points a fraction of a pixel apart all survive. This differs
/// from [`HaloKey`], which truncates to pixel cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointKey(u32, u32);

impl PointKey {
    pub fn new(point: Vec2) -> Self {
        // +0.0 folds in -0.0 so both zeros share a key.
        Self((point.x + 0.0).to_bits(), (point.y + 0.0).to_bits())
    }
}

/// Pixel-cell identity of a point, truncating toward zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HaloKey(i32, i32);

impl HaloKey {
    pub fn new(point: Vec2) -> Self {
        Self(point.x as i32, point.y as i32)
    }
}

/// Insertion-ordered set of points keyed by [`PointKey`].
///
/// Ordering is kept so that iteration and random choice are reproducible
/// under a fixed seed.
#[derive(Debug, Clone, Default)]
pub struct PointSet {
    points: Vec<Vec2>,
    index: HashSet<PointKey>,
}

impl PointSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            index: HashSet::with_capacity(capacity),
        }
    }

    /// Insert a point. Returns `false` if an equal point was already present.
    pub fn insert(&mut self, point: Vec2) -> bool {
        if self.index.insert(PointKey::new(point)) {
            self.points.push(point);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.index.contains(&PointKey::new(point))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in insertion order.
    #[inline]
    pub fn as_slice(&self) -> &[Vec2] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vec2> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Vec2;
    type IntoIter = std::slice::Iter<'a, Vec2>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// The three static populations the frames are built from.
#[derive(Debug, Clone)]
pub struct HeartField {
    /// Points directly on the heart curve.
    pub outline: PointSet,
    /// Tight blur scattered slightly inward from every outline point.
    pub edge_diffusion: PointSet,
    /// Broad fill scattered far inward from randomly chosen outline points.
    pub center_diffusion: PointSet,
}

impl HeartField {
    /// Sample all three populations.
    ///
    /// The config must already be validated; with zero outline samples the
    /// center diffusion stays empty.
    pub fn build(config: &HeartConfig, sampler: &mut Sampler) -> Self {
        let center = config.center;

        let mut outline = PointSet::with_capacity(config.outline_samples);
        for _ in 0..config.outline_samples {
            let t = sampler.random_range(0.0, TAU);
            outline.insert(heart_curve(t, center, config.enlargement));
        }

        let mut edge_diffusion =
            PointSet::with_capacity(outline.len() * config.edge_samples_per_point);
        for &point in &outline {
            for _ in 0..config.edge_samples_per_point {
                edge_diffusion.insert(scatter_inside(point, center, config.edge_beta, sampler));
            }
        }

        let mut center_diffusion = PointSet::with_capacity(config.center_samples);
        for _ in 0..config.center_samples {
            let Some(&point) = sampler.random_choice(outline.as_slice()) else {
                break;
            };
            center_diffusion.insert(scatter_inside(point, center, config.center_beta, sampler));
        }

        Self {
            outline,
            edge_diffusion,
            center_diffusion,
        }
    }

    /// Total number of static points across all three populations.
    pub fn total_len(&self) -> usize {
        self.outline.len() + self.edge_diffusion.len() + self.center_diffusion.len()
    }
}
