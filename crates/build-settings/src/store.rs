//! File persistence for a [`BuildSettingsGroup`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::SettingsError;
use crate::group::BuildSettingsGroup;

pub const SETTINGS_DIR: &str = "Editor";
pub const SETTINGS_FILE_NAME: &str = "BuildSettings.json";

/// Where the settings document lives and how a missing file is treated.
#[derive(Debug, Clone)]
pub struct SettingsStoreConfig {
    /// Full path of the JSON document.
    pub path: PathBuf,

    /// When `true`, loading a missing file yields an empty group instead of
    /// an I/O error.
    pub allow_missing: bool,
}

impl Default for SettingsStoreConfig {
    fn default() -> Self {
        Self {
            path: Path::new(SETTINGS_DIR).join(SETTINGS_FILE_NAME),
            allow_missing: true,
        }
    }
}

impl SettingsStoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// `<data_dir>/Editor/BuildSettings.json`.
    pub fn in_data_dir(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(SETTINGS_DIR).join(SETTINGS_FILE_NAME),
            ..Self::default()
        }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Makes a missing file an error on load.
    pub fn require_existing(mut self) -> Self {
        self.allow_missing = false;
        self
    }
}

/// Loads and saves the settings document described by a
/// [`SettingsStoreConfig`].
#[derive(Debug, Clone, Default)]
pub struct SettingsStore {
    config: SettingsStoreConfig,
}

impl SettingsStore {
    pub fn new(config: SettingsStoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SettingsStoreConfig {
        &self.config
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    fn io_error(&self, source: io::Error) -> SettingsError {
        SettingsError::Io {
            path: self.config.path.clone(),
            source,
        }
    }

    /// Reads the document into a fresh group.
    pub fn load(&self) -> Result<BuildSettingsGroup, SettingsError> {
        let mut group = BuildSettingsGroup::new();
        self.load_into(&mut group)?;
        Ok(group)
    }

    /// Fills `group` in place from the document.
    ///
    /// Returns `false`, leaving `group` untouched, when the file is missing
    /// and that is allowed. On a malformed document `group` keeps whatever
    /// was assigned before the failure.
    pub fn load_into(&self, group: &mut BuildSettingsGroup) -> Result<bool, SettingsError> {
        let text = match fs::read_to_string(&self.config.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound && self.config.allow_missing => {
                tracing::debug!(path = %self.config.path.display(), "no build settings file yet");
                return Ok(false);
            }
            Err(err) => return Err(self.io_error(err)),
        };
        json_bridge::deserialize(&text, group)?;
        tracing::info!(
            path = %self.config.path.display(),
            settings = group.settings().len(),
            "loaded build settings"
        );
        Ok(true)
    }

    /// Writes the serialized group followed by a newline, creating parent
    /// directories as needed.
    pub fn save(&self, group: &BuildSettingsGroup) -> Result<(), SettingsError> {
        let mut text = json_bridge::serialize(group).to_json_string()?;
        text.push('\n');
        if let Some(parent) = self.config.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
        }
        fs::write(&self.config.path, text).map_err(|err| self.io_error(err))?;
        tracing::info!(
            path = %self.config.path.display(),
            settings = group.settings().len(),
            "saved build settings"
        );
        Ok(())
    }
}
