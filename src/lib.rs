//! # Heartfield
//!
//! Procedurally generated particle frames for a pulsing heart.
//!
//! A [`HeartGenerator`] samples a parametric heart boundary once, scatters two
//! diffusion clouds inward from it, and then precomputes a fixed number of
//! frames. Each frame perturbs those static populations by a periodic
//! "breathing" ratio and adds a freshly sampled halo ring. The finished
//! [`FrameSequence`] is immutable and can be handed to any renderer.
//!
//! ## Quick Start
//!
//! ```no_run
//! use heartfield::prelude::*;
//!
//! let heart = HeartGenerator::create(Vec2::new(420.0, 340.0), 20)?;
//!
//! for tick in 0..60 {
//!     let frame = heart.frames().looped(tick);
//!     for p in frame.particles() {
//!         // paint a filled square of side `p.size` at (p.x, p.y)
//!         let _ = (p.x, p.y, p.size);
//!     }
//! }
//! # Ok::<(), heartfield::HeartError>(())
//! ```
//!
//! ## Core Concepts
//!
//! ### Static populations
//!
//! Built once per generator:
//! - **outline** - points directly on the heart curve
//! - **edge diffusion** - a tight blur scattered slightly inward
//! - **center diffusion** - a broad fill scattered far inward
//!
//! ### Frames
//!
//! Frame `f` derives its parameters from [`breathing_curve`] at phase
//! `f / 10 * PI`. See [`FrameParams`].
//!
//! ### Reproducibility
//!
//! Set [`HeartConfig::with_seed`] to get bit-identical frame sequences across
//! runs. Without a seed the generator is seeded from the clock.

pub mod config;
pub mod curve;
mod error;
pub mod field;
pub mod frame;
mod generator;
pub mod random;
pub mod synth;
pub mod transform;

pub use bytemuck;
pub use config::HeartConfig;
pub use curve::{breathing_curve, heart_curve, heart_curve_raw};
pub use error::{ConfigError, HeartError};
pub use field::{HaloKey, HeartField, PointKey, PointSet};
pub use frame::{Frame, FrameSequence, Particle};
pub use generator::HeartGenerator;
pub use glam::Vec2;
pub use random::Sampler;
pub use synth::{synthesize_frame, FrameParams};
pub use transform::{perturb_position, radial_force, scatter_inside, shrink_toward_center};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use heartfield::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::HeartConfig;
    pub use crate::error::{ConfigError, HeartError};
    pub use crate::frame::{Frame, FrameSequence, Particle};
    pub use crate::generator::HeartGenerator;
    pub use crate::random::Sampler;
    pub use crate::Vec2;
}
