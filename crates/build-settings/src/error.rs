use std::path::PathBuf;

use json_bridge::JsonError;
use thiserror::Error;

/// Failures loading or saving the settings document.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error(transparent)]
    Json(#[from] JsonError),
    #[error("cannot access settings file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Raised by `str::parse::<BuildPlatform>()` for names outside the known set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown build platform {0:?}")]
pub struct UnknownPlatform(pub String);
