//! Error types for Heartfield.
//!
//! Frame generation itself cannot fail once the configuration is valid, so
//! errors come from configuration checks, config file I/O, and background
//! construction.

use std::fmt;

/// A configuration value that would make construction meaningless.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// `frame_count` was zero.
    ZeroFrames,
    /// `outline_samples` was zero, leaving nothing to diffuse from.
    NoOutlineSamples,
    /// The center had a NaN or infinite coordinate.
    NonFiniteCenter,
    /// The enlargement factor was not a finite positive number.
    InvalidEnlargement(f32),
    /// The halo scatter half-width was negative.
    NegativeHaloScatter(i32),
    /// A diffusion strength was negative or not finite.
    NegativeBeta {
        /// Config field holding the bad value.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroFrames => write!(f, "frame_count must be at least 1"),
            ConfigError::NoOutlineSamples => write!(
                f,
                "outline_samples must be at least 1; center diffusion needs outline points to choose from"
            ),
            ConfigError::NonFiniteCenter => write!(f, "center coordinates must be finite"),
            ConfigError::InvalidEnlargement(v) => {
                write!(f, "enlargement must be finite and positive, got {}", v)
            }
            ConfigError::NegativeHaloScatter(v) => {
                write!(f, "halo_scatter must be non-negative, got {}", v)
            }
            ConfigError::NegativeBeta { name, value } => {
                write!(f, "{} must be finite and non-negative, got {}", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors that can occur while building a generator or handling its config.
#[derive(Debug)]
pub enum HeartError {
    /// The configuration was rejected before any sampling happened.
    Config(ConfigError),
    /// Failed to read or write a config file.
    Io(std::io::Error),
    /// Failed to parse or serialize a config file.
    Json(serde_json::Error),
    /// The background build thread panicked.
    BuildPanicked,
}

impl fmt::Display for HeartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeartError::Config(e) => write!(f, "Invalid heart config: {}", e),
            HeartError::Io(e) => write!(f, "Failed to access config file: {}", e),
            HeartError::Json(e) => write!(f, "Malformed config JSON: {}", e),
            HeartError::BuildPanicked => write!(f, "Background frame build panicked"),
        }
    }
}

impl std::error::Error for HeartError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HeartError::Config(e) => Some(e),
            HeartError::Io(e) => Some(e),
            HeartError::Json(e) => Some(e),
            HeartError::BuildPanicked => None,
        }
    }
}

impl From<ConfigError> for HeartError {
    fn from(e: ConfigError) -> Self {
        HeartError::Config(e)
    }
}

impl From<std::io::Error> for HeartError {
    fn from(e: std::io::Error) -> Self {
        HeartError::Io(e)
    }
}

impl From<serde_json::Error> for HeartError {
    fn from(e: serde_json::Error) -> Self {
        HeartError::Json(e)
    }
}
