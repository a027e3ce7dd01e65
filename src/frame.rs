//! Frame store: particles, frames and the fixed-length frame sequence.

use bytemuck::{Pod, Zeroable};
use serde::Serialize;
use std::ops::Index;

/// One renderable square: top-left at `(x, y)` with side `size`.
///
/// `#[repr(C)]` and `Pod`, so a frame can be uploaded as a vertex buffer
/// without conversion.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub size: u32,
}

impl Particle {
    #[inline]
    pub fn new(x: f32, y: f32, size: u32) -> Self {
        Self { x, y, size }
    }
}

/// Particles for a single frame, in render order.
///
/// The first [`Frame::halo_len`] particles are halo; the rest are the
/// perturbed outline, edge diffusion and center diffusion, in that order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Frame {
    particles: Vec<Particle>,
    #[serde(skip)]
    halo_len: usize,
}

impl Frame {
    pub(crate) fn new(particles: Vec<Particle>, halo_len: usize) -> Self {
        debug_assert!(halo_len <= particles.len());
        Self {
            particles,
            halo_len,
        }
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Leading halo particles.
    pub fn halo(&self) -> &[Particle] {
        &self.particles[..self.halo_len]
    }

    /// Particles derived from the static populations.
    pub fn body(&self) -> &[Particle] {
        &self.particles[self.halo_len..]
    }

    #[inline]
    pub fn halo_len(&self) -> usize {
        self.halo_len
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Raw bytes of the particle array (`x: f32, y: f32, size: u32` each).
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.particles)
    }
}

/// Fixed-length, immutable sequence of precomputed frames.
///
/// Indexing past the end panics. Use [`FrameSequence::looped`] to wrap a
/// playback tick, or [`FrameSequence::get`] for a checked lookup.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FrameSequence {
    frames: Box<[Frame]>,
}

impl FrameSequence {
    /// Wrap fully built frames.
    ///
    /// Callers guarantee `frames` is non-empty.
    pub(crate) fn new(frames: Vec<Frame>) -> Self {
        debug_assert!(!frames.is_empty());
        Self {
            frames: frames.into_boxed_slice(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// Frame for an unbounded playback tick, wrapping modulo the length.
    #[inline]
    pub fn looped(&self, tick: usize) -> &Frame {
        &self.frames[tick % self.frames.len()]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    pub fn as_slice(&self) -> &[Frame] {
        &self.frames
    }
}

impl Index<usize> for FrameSequence {
    type Output = Frame;

    fn index(&self, index: usize) -> &Frame {
        &self.frames[index]
    }
}

impl<'a> IntoIterator for &'a FrameSequence {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}
