//! Generator configuration.
//!
//! Every tunable constant of the heart lives here with its classic default.
//! Configs can be saved to and loaded from JSON.
//!
//! ```ignore
//! let config = HeartConfig::new(Vec2::new(420.0, 340.0))
//!     .with_frame_count(40)
//!     .with_seed(7);
//! let heart = HeartGenerator::from_config(config)?;
//! ```

use crate::curve::DEFAULT_ENLARGEMENT;
use crate::error::{ConfigError, HeartError};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Complete generator configuration.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HeartConfig {
    /// Point the heart is built and animated around.
    pub center: Vec2,
    /// Number of precomputed frames.
    pub frame_count: usize,
    /// Scale applied to the raw heart curve.
    pub enlargement: f32,
    /// Number of `t` draws on the heart curve for the outline.
    pub outline_samples: usize,
    /// Edge diffusion draws per distinct outline point.
    pub edge_samples_per_point: usize,
    /// Inward pull strength for edge diffusion.
    pub edge_beta: f32,
    /// Number of center diffusion draws.
    pub center_samples: usize,
    /// Inward pull strength for center diffusion.
    pub center_beta: f32,
    /// Half-width of the integer scatter applied to halo points.
    pub halo_scatter: i32,
    /// RNG seed. `None` seeds from the clock.
    pub seed: Option<u64>,
}

impl Default for HeartConfig {
    fn default() -> Self {
        Self {
            center: Vec2::new(420.0, 340.0),
            frame_count: 20,
            enlargement: DEFAULT_ENLARGEMENT,
            outline_samples: 1000,
            edge_samples_per_point: 3,
            edge_beta: 0.05,
            center_samples: 5000,
            center_beta: 0.27,
            halo_scatter: 60,
            seed: None,
        }
    }
}

impl HeartConfig {
    /// Default config around the given center.
    pub fn new(center: Vec2) -> Self {
        Self {
            center,
            ..Self::default()
        }
    }

    pub fn with_center(mut self, center: Vec2) -> Self {
        self.center = center;
        self
    }

    pub fn with_frame_count(mut self, frame_count: usize) -> Self {
        self.frame_count = frame_count;
        self
    }

    pub fn with_enlargement(mut self, enlargement: f32) -> Self {
        self.enlargement = enlargement;
        self
    }

    pub fn with_outline_samples(mut self, samples: usize) -> Self {
        self.outline_samples = samples;
        self
    }

    /// Set edge diffusion draws per outline point and their pull strength.
    pub fn with_edge_diffusion(mut self, samples_per_point: usize, beta: f32) -> Self {
        self.edge_samples_per_point = samples_per_point;
        self.edge_beta = beta;
        self
    }

    /// Set center diffusion draw count and pull strength.
    pub fn with_center_diffusion(mut self, samples: usize, beta: f32) -> Self {
        self.center_samples = samples;
        self.center_beta = beta;
        self
    }

    /// Set the halo scatter half-width. Negative values fail validation.
    pub fn with_halo_scatter(mut self, half_width: i32) -> Self {
        self.halo_scatter = half_width;
        self
    }

    /// Fix the RNG seed for reproducible frames.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that the config can produce a fully built generator.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_count == 0 {
            return Err(ConfigError::ZeroFrames);
        }
        if self.outline_samples == 0 {
            return Err(ConfigError::NoOutlineSamples);
        }
        if !self.center.is_finite() {
            return Err(ConfigError::NonFiniteCenter);
        }
        if !(self.enlargement.is_finite() && self.enlargement > 0.0) {
            return Err(ConfigError::InvalidEnlargement(self.enlargement));
        }
        if self.halo_scatter < 0 {
            return Err(ConfigError::NegativeHaloScatter(self.halo_scatter));
        }
        for (name, value) in [("edge_beta", self.edge_beta), ("center_beta", self.center_beta)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::NegativeBeta { name, value });
            }
        }
        Ok(())
    }

    /// Save the configuration to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), HeartError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load a configuration from a JSON file.
    ///
    /// Missing fields fall back to their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, HeartError> {
        let json = fs::read_to_string(path)?;
        let config = serde_json::from_str(&json)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(HeartConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_zero_frames() {
        let config = HeartConfig::default().with_frame_count(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroFrames));
    }

    #[test]
    fn test_rejects_empty_outline() {
        let config = HeartConfig::default().with_outline_samples(0);
        assert_eq!(config.validate(), Err(ConfigError::NoOutlineSamples));
    }

    #[test]
    fn test_rejects_bad_numbers() {
        let config = HeartConfig::new(Vec2::new(f32::NAN, 0.0));
        assert_eq!(config.validate(), Err(ConfigError::NonFiniteCenter));

        let config = HeartConfig::default().with_enlargement(0.0);
        assert_eq!(config.validate(), Err(ConfigError::InvalidEnlargement(0.0)));

        let config = HeartConfig::default().with_center_diffusion(10, -0.1);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NegativeBeta { name: "center_beta", .. })
        ));
    }

    #[test]
    fn test_rejects_negative_halo_scatter() {
        let config: HeartConfig =
            serde_json::from_str(r#"{ "halo_scatter": -60, "seed": 5, "frame_count": 1 }"#)
                .unwrap();
        assert_eq!(config.validate(), Err(ConfigError::NegativeHaloScatter(-60)));

        // i32::MIN must be rejected, not overflow on negation.
        let config = HeartConfig::default().with_halo_scatter(i32::MIN);
        assert_eq!(config.validate(), Err(ConfigError::NegativeHaloScatter(i32::MIN)));

        let config = HeartConfig::default().with_halo_scatter(0);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: HeartConfig =
            serde_json::from_str(r#"{ "center": [100.0, 80.0], "seed": 3 }"#).unwrap();
        assert_eq!(config.center, Vec2::new(100.0, 80.0));
        assert_eq!(config.frame_count, 20);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.outline_samples, 1000);
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("heartfield-config-{}.json", std::process::id()));
        let config = HeartConfig::new(Vec2::new(10.0, 20.0))
            .with_frame_count(7)
            .with_seed(42);
        config.save(&path).unwrap();
        let loaded = HeartConfig::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = HeartConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, HeartError::Io(_)));
    }
}
