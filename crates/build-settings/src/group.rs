use json_bridge::{JsonDeserialize, JsonObject, JsonSerialize, Result};

use crate::setting::BuildSetting;

/// Shown when nothing is selected.
pub const NO_SELECTION_NAME: &str = "NULL";

/// The list of build settings plus the index of the selected one.
///
/// The index is `-1` when nothing is selected. It is kept as read from the
/// document, so a stale index simply resolves to no current setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSettingsGroup {
    settings: Vec<BuildSetting>,
    current_index: i32,
}

impl Default for BuildSettingsGroup {
    fn default() -> Self {
        Self {
            settings: Vec::new(),
            current_index: -1,
        }
    }
}

impl BuildSettingsGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn settings(&self) -> &[BuildSetting] {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut [BuildSetting] {
        &mut self.settings
    }

    pub fn current_index(&self) -> i32 {
        self.current_index
    }

    /// Out-of-range indices are ignored.
    pub fn set_current_index(&mut self, index: i32) {
        if self.position(index).is_some() {
            self.current_index = index;
        }
    }

    fn position(&self, index: i32) -> Option<usize> {
        usize::try_from(index).ok().filter(|&i| i < self.settings.len())
    }

    pub fn current(&self) -> Option<&BuildSetting> {
        self.position(self.current_index).map(|i| &self.settings[i])
    }

    pub fn current_mut(&mut self) -> Option<&mut BuildSetting> {
        self.position(self.current_index).map(|i| &mut self.settings[i])
    }

    pub fn current_name(&self) -> &str {
        self.current().map_or(NO_SELECTION_NAME, |setting| setting.name.as_str())
    }

    /// Setting names in list order, for a selection list.
    pub fn names(&self) -> Vec<&str> {
        self.settings.iter().map(|setting| setting.name.as_str()).collect()
    }

    /// Appends a new empty setting and selects it.
    pub fn add_setting(&mut self, name: impl Into<String>) -> &mut BuildSetting {
        self.settings.push(BuildSetting::new(name));
        self.current_index = i32::try_from(self.settings.len() - 1).unwrap_or(i32::MAX);
        tracing::debug!(index = self.current_index, "added build setting");
        let last = self.settings.len() - 1;
        &mut self.settings[last]
    }

    /// Removes the selected setting; the selection moves back by one.
    pub fn remove_selected(&mut self) -> Option<BuildSetting> {
        let index = self.position(self.current_index)?;
        let removed = self.settings.remove(index);
        self.current_index -= 1;
        tracing::debug!(name = %removed.name, index = self.current_index, "removed build setting");
        Some(removed)
    }

    /// Selects the first setting called `name`. Unknown names leave the
    /// selection unchanged.
    pub fn select_by_name(&mut self, name: &str) -> bool {
        match self.settings.iter().position(|setting| setting.name == name) {
            Some(index) => {
                self.current_index = i32::try_from(index).unwrap_or(i32::MAX);
                true
            }
            None => {
                tracing::warn!(name, "no build setting with this name");
                false
            }
        }
    }

    /// Define symbols of the current setting, e.g. `"DEBUG;F2P;"`.
    pub fn define_symbols(&self) -> Option<String> {
        self.current().map(BuildSetting::define_symbols)
    }

    /// Selects `name` (if present) and returns the define symbols of
    /// whatever is selected afterwards.
    pub fn define_symbols_for(&mut self, name: &str) -> Option<String> {
        self.select_by_name(name);
        let symbols = self.define_symbols();
        if let Some(symbols) = &symbols {
            tracing::info!(
                setting = self.current_name(),
                symbols = %symbols,
                "resolved build settings"
            );
        }
        symbols
    }
}

impl JsonSerialize for BuildSettingsGroup {
    fn write_json(&self, object: &mut JsonObject) {
        object.set_int("currentBuildSetting", self.current_index);
        object.set_object_list("settingsList", &self.settings);
    }
}

impl JsonDeserialize for BuildSettingsGroup {
    fn read_json(&mut self, object: &JsonObject) -> Result<()> {
        self.current_index = object.get_int("currentBuildSetting", 0)?;
        self.settings = object.get_object_list("settingsList")?;
        Ok(())
    }
}
