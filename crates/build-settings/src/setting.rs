use json_bridge::{JsonDeserialize, JsonError, JsonObject, JsonSerialize, Result};

use crate::platform::BuildPlatform;

/// One named build configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSetting {
    pub name: String,
    pub platform: BuildPlatform,
    /// Scripting define symbols enabled for this configuration.
    pub defines: Vec<String>,
}

impl BuildSetting {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Defines joined the way the player settings expect them: `"A;B;"`.
    pub fn define_symbols(&self) -> String {
        self.defines.iter().map(|define| format!("{define};")).collect()
    }
}

impl JsonSerialize for BuildSetting {
    fn write_json(&self, object: &mut JsonObject) {
        object.set_string("name", self.name.as_str());
        object.set_string("platform", self.platform.as_str());
        object.set_string_list("defineList", &self.defines);
    }
}

impl JsonDeserialize for BuildSetting {
    fn read_json(&mut self, object: &JsonObject) -> Result<()> {
        self.name = object.get_string("name", "")?;
        self.platform = object
            .get_string("platform", "")?
            .parse()
            .map_err(|err| JsonError::invalid_value("platform", err))?;
        self.defines = object.get_string_list("defineList")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn writes_expected_layout() {
        let setting = BuildSetting {
            name: "dev".into(),
            platform: BuildPlatform::Android,
            defines: vec!["DEBUG".into(), "F2P".into()],
        };
        let object = json_bridge::serialize(&setting);
        assert_eq!(
            object.to_value().unwrap(),
            json!({"name": "dev", "platform": "Android", "defineList": ["DEBUG", "F2P"]})
        );
    }

    #[test]
    fn unknown_platform_is_invalid_value() {
        let mut setting = BuildSetting::default();
        let err = json_bridge::deserialize(
            r#"{"name": "x", "platform": "Switch", "defineList": []}"#,
            &mut setting,
        )
        .unwrap_err();
        assert!(matches!(err, JsonError::InvalidValue { ref key, .. } if key == "platform"));
        assert_eq!(setting.name, "x");
    }

    #[test]
    fn missing_define_list_is_an_error() {
        let mut setting = BuildSetting::default();
        let err = json_bridge::deserialize(r#"{"name": "x", "platform": "iOS"}"#, &mut setting);
        assert!(matches!(err, Err(JsonError::MissingArray { .. })));
    }

    #[test]
    fn define_symbols_trailing_separator() {
        let mut setting = BuildSetting::new("qa");
        assert_eq!(setting.define_symbols(), "");
        setting.defines = vec!["A".into(), "B".into()];
        assert_eq!(setting.define_symbols(), "A;B;");
    }
}
