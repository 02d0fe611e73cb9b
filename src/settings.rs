//! # Settings
//!
//! The sensors are configured with a single TOML file
//! which must contain exactly one [`Settings`](struct.Settings.html) object.
//!
//! ## Example
//!
//! ```toml
//! name = "Ottawa"
//! station = "ON/s0000430"
//! language = "English"
//! unit_system = "imperial"
//! ```

use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;

use crate::prelude::*;

pub const DEFAULT_NAME: &str = "Environment Canada";

/// Reads the settings file.
pub fn read<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    toml::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Represents a root settings object.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Display name override. Sensor names start with it.
    #[serde(default)]
    pub name: Option<String>,

    /// Station identifier, for example, `ON/s0000458`.
    pub station: String,

    #[serde(default)]
    pub language: Language,

    #[serde(default)]
    pub unit_system: UnitSystem,
}

impl Settings {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_NAME)
    }

    /// Builds an identifier that stays stable for the same station, language and key.
    pub fn unique_id(&self, key: &str) -> String {
        format!("{}-{}-{}", self.station, self.language, key)
    }
}

/// Language of the published observations and alerts.
#[derive(Deserialize, Debug, Copy, Clone, PartialEq)]
pub enum Language {
    English,
    French,
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Language::English => "English",
            Language::French => "French",
        })
    }
}

/// Preferred unit system of the installation.
#[derive(Deserialize, Debug, Copy, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn is_metric(self) -> bool {
        self == UnitSystem::Metric
    }
}

impl Default for UnitSystem {
    fn default() -> Self {
        UnitSystem::Metric
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_ok() -> Result {
        let settings: Settings = toml::from_str(r#"station = "ON/s0000458""#)?;
        assert_eq!(settings.name, None);
        assert_eq!(settings.display_name(), DEFAULT_NAME);
        assert_eq!(settings.language, Language::English);
        assert!(settings.unit_system.is_metric());
        Ok(())
    }

    #[test]
    fn parse_full_ok() -> Result {
        let settings: Settings = toml::from_str(
            r#"
            name = "Ottawa"
            station = "ON/s0000430"
            language = "French"
            unit_system = "imperial"
            "#,
        )?;
        assert_eq!(settings.display_name(), "Ottawa");
        assert_eq!(settings.language, Language::French);
        assert_eq!(settings.unit_system, UnitSystem::Imperial);
        Ok(())
    }

    #[test]
    fn station_is_required() {
        assert!(toml::from_str::<Settings>(r#"name = "Ottawa""#).is_err());
    }

    #[test]
    fn unknown_field_is_rejected() {
        assert!(toml::from_str::<Settings>("station = \"ON/s0000430\"\nlatitude = 45.4").is_err());
    }

    #[test]
    fn unique_id_ignores_name() -> Result {
        let settings: Settings = toml::from_str(r#"station = "ON/s0000430""#)?;
        let renamed = Settings {
            name: Some("Home".into()),
            ..settings.clone()
        };
        assert_eq!(settings.unique_id("pressure"), "ON/s0000430-English-pressure");
        assert_eq!(renamed.unique_id("pressure"), settings.unique_id("pressure"));
        Ok(())
    }
}
