//! JSON config file loading shared by `Tuning` and `Settings`

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Error type for config loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error while reading the file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The file was not valid JSON for the expected type.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Values parsed but make no sense together.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Read and deserialize a JSON file.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let bytes = fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Load a JSON config, falling back to `T::default()` when the file is
/// missing or broken. Failures are logged, never fatal.
pub fn load_or_default<T: DeserializeOwned + Default>(path: &Path, what: &str) -> T {
    match load_json(path) {
        Ok(value) => {
            log::info!("Loaded {} from {}", what, path.display());
            value
        }
        Err(ConfigError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
            log::info!("No {} at {}, using defaults", what, path.display());
            T::default()
        }
        Err(err) => {
            log::warn!("Ignoring {} at {}: {}", what, path.display(), err);
            T::default()
        }
    }
}
