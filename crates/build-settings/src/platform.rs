use std::fmt;
use std::str::FromStr;

use crate::error::UnknownPlatform;

/// Target platform of a build setting, stored by name (`"iOS"`, `"Android"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BuildPlatform {
    #[default]
    Ios,
    Android,
}

impl BuildPlatform {
    pub const ALL: [BuildPlatform; 2] = [BuildPlatform::Ios, BuildPlatform::Android];

    pub fn as_str(self) -> &'static str {
        match self {
            BuildPlatform::Ios => "iOS",
            BuildPlatform::Android => "Android",
        }
    }
}

impl fmt::Display for BuildPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Names are case-sensitive.
impl FromStr for BuildPlatform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BuildPlatform::ALL
            .into_iter()
            .find(|platform| platform.as_str() == s)
            .ok_or_else(|| UnknownPlatform(s.to_owned()))
    }
}
