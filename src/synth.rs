//! Per-frame synthesis.
//!
//! Frame `f` is driven entirely by [`FrameParams::for_frame`]: a breathing
//! ratio that perturbs the static populations, and a halo radius and count
//! for the freshly sampled halo. No state carries between frames.

use crate::config::HeartConfig;
use crate::curve::{breathing_curve, heart_curve};
use crate::field::{HaloKey, HeartField, PointSet};
use crate::frame::{Frame, Particle};
use crate::random::Sampler;
use crate::transform::{perturb_position, shrink_toward_center};
use glam::Vec2;
use std::collections::HashSet;
use std::f32::consts::{PI, TAU};

/// Halo sizes: 1 twice as likely as 2.
const HALO_SIZES: [u32; 3] = [1, 1, 2];

/// Time-varying parameters for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParams {
    /// Breathing curve value at this frame's phase.
    pub curve: f32,
    /// Strength of the static-point perturbation. Negative pushes outward.
    pub ratio: f32,
    /// Shrink ratio applied to halo points.
    pub halo_radius: i32,
    /// Number of halo draws before per-pixel dedup.
    pub halo_count: usize,
}

impl FrameParams {
    /// Derive the parameters for frame index `frame`.
    pub fn for_frame(frame: usize) -> Self {
        let phase = frame as f32 / 10.0 * PI;
        let curve = breathing_curve(phase);
        Self {
            curve,
            ratio: 15.0 * curve,
            halo_radius: (4.0 + 6.0 * (1.0 + curve)).floor() as i32,
            halo_count: (1500.0 + 2000.0 * curve.abs().powi(2)).floor() as usize,
        }
    }
}

/// Build the particle list for frame index `frame`.
///
/// Order: halo, outline, edge diffusion, center diffusion.
pub fn synthesize_frame(
    frame: usize,
    field: &HeartField,
    config: &HeartConfig,
    sampler: &mut Sampler,
) -> Frame {
    let params = FrameParams::for_frame(frame);
    log::trace!(
        "frame {}: curve={:.4} ratio={:.4} halo_radius={} halo_count={}",
        frame,
        params.curve,
        params.ratio,
        params.halo_radius,
        params.halo_count
    );

    let mut particles = Vec::with_capacity(params.halo_count + field.total_len());

    push_halo(&mut particles, &params, config, sampler);
    let halo_len = particles.len();

    let center = config.center;
    push_perturbed(&mut particles, &field.outline, center, params.ratio, 3, sampler);
    push_perturbed(&mut particles, &field.edge_diffusion, center, params.ratio, 2, sampler);
    push_perturbed(&mut particles, &field.center_diffusion, center, params.ratio, 2, sampler);

    Frame::new(particles, halo_len)
}

/// Unique halo positions for one frame, before scatter.
///
/// Dedup is per frame and per pixel cell; the scratch set is dropped here.
fn halo_points(params: &FrameParams, config: &HeartConfig, sampler: &mut Sampler) -> Vec<Vec2> {
    let mut seen = HashSet::with_capacity(params.halo_count);
    let mut points = Vec::with_capacity(params.halo_count);

    for _ in 0..params.halo_count {
        let t = sampler.random_range(0.0, TAU);
        let point = heart_curve(t, config.center, config.enlargement);
        let point = shrink_toward_center(point, config.center, params.halo_radius as f32);
        if seen.insert(HaloKey::new(point)) {
            points.push(point);
        }
    }
    points
}

fn push_halo(
    particles: &mut Vec<Particle>,
    params: &FrameParams,
    config: &HeartConfig,
    sampler: &mut Sampler,
) {
    // Validated configs never carry a negative scatter.
    let scatter = config.halo_scatter.max(0);

    for point in halo_points(params, config, sampler) {
        let x = point.x + sampler.random_int(-scatter, scatter) as f32;
        let y = point.y + sampler.random_int(-scatter, scatter) as f32;
        let size = sampler.random_choice(&HALO_SIZES).copied().unwrap_or(1);
        particles.push(Particle::new(x, y, size));
    }
}

fn push_perturbed(
    particles: &mut Vec<Particle>,
    points: &PointSet,
    center: Vec2,
    ratio: f32,
    max_size: i32,
    sampler: &mut Sampler,
) {
    particles.extend(points.iter().map(|&point| {
        let moved = perturb_position(point, center, ratio, sampler);
        let size = sampler.random_int(1, max_size) as u32;
        Particle::new(moved.x, moved.y, size)
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_field(sampler: &mut Sampler) -> (HeartConfig, HeartField) {
        let config = HeartConfig::default()
            .with_outline_samples(300)
            .with_center_diffusion(800, 0.27);
        let field = HeartField::build(&config, sampler);
        (config, field)
    }

    #[test]
    fn test_params_at_rest() {
        let p = FrameParams::for_frame(0);
        assert_eq!(p.curve, 0.0);
        assert_eq!(p.ratio, 0.0);
        assert_eq!(p.halo_radius, 10);
        assert_eq!(p.halo_count, 1500);
    }

    #[test]
    fn test_params_follow_curve() {
        // Frame 1: phase PI/10, curve = (2/PI) sin(0.4 PI) ~ 0.6055
        let p = FrameParams::for_frame(1);
        let c = 2.0 / PI * (0.4 * PI).sin();
        assert!((p.curve - c).abs() < 1e-5);
        assert!((p.ratio - 15.0 * c).abs() < 1e-4);
        assert_eq!(p.halo_radius, 13);
        assert_eq!(p.halo_count, (1500.0 + 2000.0 * c * c).floor() as usize);

        // Frame 3: sin(1.2 PI) < 0, so the ratio turns outward.
        let p = FrameParams::for_frame(3);
        assert!(p.ratio < 0.0);
        assert!(p.halo_radius < 10);
    }

    #[test]
    fn test_params_period() {
        // sin(4 * f/10 * PI) repeats every 5 frames.
        for f in 0..10 {
            let a = FrameParams::for_frame(f);
            let b = FrameParams::for_frame(f + 5);
            assert!((a.curve - b.curve).abs() < 1e-4);
        }
    }

    #[test]
    fn test_frame_layout_and_sizes() {
        let mut sampler = Sampler::seeded(21);
        let (config, field) = small_field(&mut sampler);
        let frame = synthesize_frame(2, &field, &config, &mut sampler);
        let params = FrameParams::for_frame(2);

        assert_eq!(frame.body().len(), field.total_len());
        assert!(frame.halo_len() <= params.halo_count);
        assert!(frame.halo_len() > 0);

        let outline_len = field.outline.len();
        let (outline, diffusion) = frame.body().split_at(outline_len);
        assert!(outline.iter().all(|p| (1..=3).contains(&p.size)));
        assert!(diffusion.iter().all(|p| (1..=2).contains(&p.size)));
        assert!(frame.halo().iter().all(|p| (1..=2).contains(&p.size)));
    }

    #[test]
    fn test_halo_dedup_is_per_pixel() {
        let mut sampler = Sampler::seeded(22);
        let (config, field) = small_field(&mut sampler);
        let config = config.with_halo_scatter(0);
        let frame = synthesize_frame(0, &field, &config, &mut sampler);

        // With no scatter the halo particles are the deduped points themselves.
        let mut keys = HashSet::new();
        for p in frame.halo() {
            assert!(keys.insert(HaloKey::new(Vec2::new(p.x, p.y))));
        }
    }

    #[test]
    fn test_halo_offsets_are_independent_integers() {
        let mut sampler = Sampler::seeded(25);
        let (config, field) = small_field(&mut sampler);
        let scattered = synthesize_frame(1, &field, &config, &mut sampler.clone());
        let still = synthesize_frame(
            1,
            &field,
            &config.clone().with_halo_scatter(0),
            &mut sampler.clone(),
        );

        // Same seed, same halo base points; only the scatter differs.
        assert_eq!(scattered.halo_len(), still.halo_len());

        let mut offsets = HashSet::new();
        let (mut negative, mut positive) = (false, false);
        for (a, b) in scattered.halo().iter().zip(still.halo()) {
            for d in [a.x - b.x, a.y - b.y] {
                let k = d.round();
                assert!((d - k).abs() < 1e-3, "offset {} is not an integer", d);
                assert!((-60.0..=60.0).contains(&k), "offset {} out of range", k);
                negative |= k < 0.0;
                positive |= k > 0.0;
                offsets.insert(k as i32);
            }
        }
        assert!(negative && positive);
        // Every particle gets its own draw, not one shared shift.
        assert!(offsets.len() > 100, "only {} distinct offsets", offsets.len());
    }

    #[test]
    fn test_static_sets_untouched() {
        let mut sampler = Sampler::seeded(23);
        let (config, field) = small_field(&mut sampler);
        let before = field.clone();
        for f in 0..4 {
            synthesize_frame(f, &field, &config, &mut sampler);
        }
        assert_eq!(before.outline.as_slice(), field.outline.as_slice());
        assert_eq!(before.center_diffusion.as_slice(), field.center_diffusion.as_slice());
    }

    #[test]
    fn test_same_draws_same_frame() {
        let mut sampler = Sampler::seeded(24);
        let (config, field) = small_field(&mut sampler);
        let a = synthesize_frame(7, &field, &config, &mut sampler.clone());
        let b = synthesize_frame(7, &field, &config, &mut sampler.clone());
        assert_eq!(a, b);
    }
}
