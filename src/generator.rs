//! Generator aggregate: static field plus precomputed frames.

use crate::config::HeartConfig;
use crate::error::HeartError;
use crate::field::{HeartField, PointSet};
use crate::frame::{Frame, FrameSequence};
use crate::random::Sampler;
use crate::synth::synthesize_frame;
use glam::Vec2;
use std::thread::{self, JoinHandle};
use std::time::Instant;

/// A fully built heart: three static populations and every frame.
///
/// Construction does all the work up front; afterwards the generator is
/// read-only and can be shared freely across threads.
///
/// # Example
///
/// ```ignore
/// let heart = HeartGenerator::create(Vec2::new(420.0, 340.0), 20)?;
/// let frame = heart.frames().looped(tick);
/// ```
#[derive(Debug, Clone)]
pub struct HeartGenerator {
    config: HeartConfig,
    field: HeartField,
    frames: FrameSequence,
}

impl HeartGenerator {
    /// Build a generator around `center` with `frame_count` frames and
    /// default settings otherwise.
    pub fn create(center: Vec2, frame_count: usize) -> Result<Self, HeartError> {
        Self::from_config(HeartConfig::new(center).with_frame_count(frame_count))
    }

    /// Build a generator from a full configuration.
    ///
    /// Fails only if the config is rejected by [`HeartConfig::validate`].
    pub fn from_config(config: HeartConfig) -> Result<Self, HeartError> {
        config.validate()?;

        let started = Instant::now();
        let mut sampler = match config.seed {
            Some(seed) => Sampler::seeded(seed),
            None => Sampler::from_clock(),
        };

        let field = HeartField::build(&config, &mut sampler);

        let mut frames = Vec::with_capacity(config.frame_count);
        for index in 0..config.frame_count {
            frames.push(synthesize_frame(index, &field, &config, &mut sampler));
        }
        let frames = FrameSequence::new(frames);

        log::debug!(
            "built heart: outline={} edge={} center={} frames={} in {:?}",
            field.outline.len(),
            field.edge_diffusion.len(),
            field.center_diffusion.len(),
            frames.len(),
            started.elapsed()
        );

        Ok(Self {
            config,
            field,
            frames,
        })
    }

    /// Run the whole construction on a background thread.
    ///
    /// The handle yields either a complete generator or the error; a partial
    /// sequence is never observable.
    pub fn spawn_build(config: HeartConfig) -> JoinHandle<Result<Self, HeartError>> {
        thread::spawn(move || Self::from_config(config))
    }

    /// Join a handle returned by [`HeartGenerator::spawn_build`].
    pub fn join(handle: JoinHandle<Result<Self, HeartError>>) -> Result<Self, HeartError> {
        handle.join().map_err(|_| HeartError::BuildPanicked)?
    }

    #[inline]
    pub fn frames(&self) -> &FrameSequence {
        &self.frames
    }

    /// Checked frame lookup.
    #[inline]
    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.config.center
    }

    pub fn config(&self) -> &HeartConfig {
        &self.config
    }

    pub fn field(&self) -> &HeartField {
        &self.field
    }

    pub fn outline(&self) -> &PointSet {
        &self.field.outline
    }

    pub fn edge_diffusion(&self) -> &PointSet {
        &self.field.edge_diffusion
    }

    pub fn center_diffusion(&self) -> &PointSet {
        &self.field.center_diffusion
    }
}
