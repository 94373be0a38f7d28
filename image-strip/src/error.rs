use thiserror::Error;

/// A single identifier failed to resolve, failing the whole batch.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("failed to load image: {identifier}: {reason}")]
pub struct AssetLoadError {
    pub identifier: String,
    pub reason: String,
}

impl AssetLoadError {
    pub fn new(identifier: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            reason: reason.into(),
        }
    }
}

/// Rejected slider configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("canvas width must be greater than zero")]
    ZeroCanvasWidth,
    #[error("canvas height must be greater than zero")]
    ZeroCanvasHeight,
    #[error("image identifier list must not be empty")]
    NoImages,
}
