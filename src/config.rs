#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("size must be odd and between 3 and 255, got {size}")]
    InvalidSize { size: usize },
    #[error("laziness must be between 0 and 1, got {laziness}")]
    InvalidLaziness { laziness: f64 },
    #[error("bias must be between -1 and 1, got {bias}")]
    InvalidBias { bias: f64 },
    #[error("root factor must be above 0, got {root_factor}")]
    InvalidRootFactor { root_factor: f64 },
    #[error("unknown colormap `{name}`")]
    UnknownColormap { name: String },
}

/// Validated generation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    size: usize,
    laziness: f64,
    bias: f64,
    root_factor: f64,
}

impl Params {
    pub const DEFAULT_SIZE: usize = 63;
    pub const DEFAULT_LAZINESS: f64 = 0.7;
    pub const DEFAULT_BIAS: f64 = 0.0;
    pub const DEFAULT_ROOT_FACTOR: f64 = 1.3;

    /// Largest side length accepted, exclusive.
    pub const SIZE_LIMIT: usize = 256;

    /// Bias of ±1 would zero out one axis entirely; this keeps both axes
    /// reachable.
    const BIAS_DAMPING: f64 = 1.02;

    pub fn new(size: usize, laziness: f64, bias: f64, root_factor: f64) -> Result<Self, ConfigError> {
        if size % 2 == 0 || size < 3 || size >= Self::SIZE_LIMIT {
            return Err(ConfigError::InvalidSize { size });
        }
        if !(0.0..=1.0).contains(&laziness) {
            return Err(ConfigError::InvalidLaziness { laziness });
        }
        if !(-1.0..=1.0).contains(&bias) {
            return Err(ConfigError::InvalidBias { bias });
        }
        if !(root_factor.is_finite() && root_factor > 0.0) {
            return Err(ConfigError::InvalidRootFactor { root_factor });
        }
        Ok(Self {
            size,
            laziness,
            bias,
            root_factor,
        })
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    pub const fn laziness(&self) -> f64 {
        self.laziness
    }

    pub const fn bias(&self) -> f64 {
        self.bias
    }

    pub const fn root_factor(&self) -> f64 {
        self.root_factor
    }

    /// Weight of each legal horizontal move; vertical moves get the rest.
    pub fn horizontal_weight(&self) -> f64 {
        0.5 + self.bias / Self::BIAS_DAMPING / 2.0
    }

    /// Most steps a single root may take.
    pub fn max_root_len(&self) -> usize {
        ((self.root_factor * self.size as f64 / 2.0).floor() as usize).max(1)
    }
}

impl Default for Params {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            laziness: Self::DEFAULT_LAZINESS,
            bias: Self::DEFAULT_BIAS,
            root_factor: Self::DEFAULT_ROOT_FACTOR,
        }
    }
}
