//! Error types for the background engine
//!
//! Animation itself never fails: a missing surface or a zero-sized container
//! simply defers work to the next frame. Errors only come out of parsing and
//! validating the mount configuration.

use thiserror::Error;

/// Errors produced while parsing a CSS colour string.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ColorError {
    /// The string is not one of the supported notations.
    #[error("unsupported colour notation: {0:?}")]
    Unsupported(String),

    /// A channel could not be parsed as a number.
    #[error("invalid colour channel {channel:?} in {input:?}")]
    InvalidChannel { input: String, channel: String },

    /// A channel was parsed but lies outside its allowed range.
    #[error("colour channel out of range in {0:?}")]
    OutOfRange(String),
}

/// Errors produced while loading or validating an [`EngineConfig`](crate::EngineConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be deserialized.
    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// `numBlobs` must be at least one.
    #[error("numBlobs must be positive")]
    NoBlobs,

    /// The colour palette is empty.
    #[error("blobColors must contain at least one colour")]
    EmptyPalette,

    /// Radius ratios violate `0 <= min < max <= 1`.
    #[error("radius ratios must satisfy 0 <= min < max <= 1 (got min {min}, max {max})")]
    RadiusRatios { min: f64, max: f64 },

    /// A scale or speed parameter is zero, negative or not finite.
    #[error("{name} must be a positive finite number (got {value})")]
    NotPositive { name: &'static str, value: f64 },

    /// The outline needs at least a triangle.
    #[error("numPoints must be at least 3 (got {0})")]
    TooFewPoints(usize),

    /// Wave-band style was selected without any gradient layers.
    #[error("bands.gradients must contain at least one layer")]
    NoBandGradients,
}
