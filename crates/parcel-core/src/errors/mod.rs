mod config_error;
mod normalization_error;
mod portal_error;
mod validation_error;

pub use config_error::ConfigError;
pub use normalization_error::NormalizationError;
pub use portal_error::PortalError;
pub use validation_error::ValidationError;

/// Top-level error for the parcel pipeline.
///
/// Only validation and configuration failures are meant to reach a caller.
/// Portal and normalization failures are absorbed into per-source outcomes,
/// the variants exist so internal layers can use `?` before that happens.
#[derive(Debug, thiserror::Error)]
pub enum ParcelError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("portal error: {0}")]
    Portal(#[from] PortalError),

    #[error("normalization error: {0}")]
    Normalization(#[from] NormalizationError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience alias used throughout the workspace.
pub type ParcelResult<T> = Result<T, ParcelError>;
