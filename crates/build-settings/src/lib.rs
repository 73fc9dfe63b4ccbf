//! build-settings — named build configurations stored as one JSON document.
//!
//! A [`BuildSettingsGroup`] holds a list of [`BuildSetting`]s (name, target
//! platform, define symbols) and the index of the selected one. Both
//! implement the `json-bridge` contracts, and [`SettingsStore`] moves the
//! serialized document to and from disk:
//!
//! ```json
//! {"currentBuildSetting": 0,
//!  "settingsList": [{"name": "dev", "platform": "Android", "defineList": ["DEBUG", "F2P"]}]}
//! ```

mod error;
mod group;
mod platform;
mod setting;
mod store;

pub use error::{SettingsError, UnknownPlatform};
pub use group::{BuildSettingsGroup, NO_SELECTION_NAME};
pub use platform::BuildPlatform;
pub use setting::BuildSetting;
pub use store::{SettingsStore, SettingsStoreConfig, SETTINGS_DIR, SETTINGS_FILE_NAME};
