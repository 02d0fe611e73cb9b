//! The data bundle refreshed by the coordinator.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::prelude::*;

/// Most recently fetched observations and alerts of a weather station.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    /// Raw observation values in the source's native metric units, by observation key.
    /// `null` means the station did not report the quantity.
    #[serde(default)]
    pub observations: HashMap<String, Option<Value>>,

    /// Active alerts by alert category key.
    #[serde(default)]
    pub alerts: HashMap<String, AlertGroup>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct AlertGroup {
    #[serde(default)]
    pub value: Vec<Alert>,
}

/// A single alert issued for the station area.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Alert {
    /// Example: `"Special weather statement in effect"`.
    pub title: String,

    /// Issue time as published by the source. Example: `"Thursday August 12, 2021 at 15:01"`.
    pub date: String,
}

impl Snapshot {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a snapshot dumped to a JSON file.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file)).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Gets the raw observation value. Missing keys and `null` values are both `None`.
    pub fn observation(&self, key: &str) -> Option<&Value> {
        self.observations.get(key).and_then(Option::as_ref)
    }

    /// Gets the alerts of the category, which is empty when the category is missing.
    pub fn alerts(&self, key: &str) -> &[Alert] {
        self.alerts.get(key).map(|group| group.value.as_slice()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"{
        "observations": {
            "condition": "Mostly Cloudy",
            "temperature": 18.4,
            "humidity": 65,
            "pressure": 101.3,
            "wind_chill": null
        },
        "alerts": {
            "warnings": {"value": []},
            "statements": {"value": [{"title": "Special weather statement in effect", "date": "Thursday August 12, 2021 at 15:01"}]}
        }
    }"#;

    #[test]
    fn parse_ok() -> Result {
        let snapshot = Snapshot::from_json(SNAPSHOT)?;
        assert_eq!(snapshot.observation("condition"), Some(&Value::from("Mostly Cloudy")));
        assert_eq!(snapshot.observation("humidity"), Some(&Value::Integer(65)));
        assert_eq!(snapshot.observation("pressure"), Some(&Value::Float(101.3)));
        assert_eq!(snapshot.alerts("statements").len(), 1);
        assert_eq!(snapshot.alerts("statements")[0].title, "Special weather statement in effect");
        Ok(())
    }

    #[test]
    fn null_observation_is_absent() -> Result {
        let snapshot = Snapshot::from_json(SNAPSHOT)?;
        assert_eq!(snapshot.observation("wind_chill"), None);
        assert_eq!(snapshot.observation("visibility"), None);
        Ok(())
    }

    #[test]
    fn missing_alert_category_is_empty() -> Result {
        let snapshot = Snapshot::from_json(SNAPSHOT)?;
        assert!(snapshot.alerts("warnings").is_empty());
        assert!(snapshot.alerts("watches").is_empty());
        Ok(())
    }

    #[test]
    fn empty_object_ok() -> Result {
        assert_eq!(Snapshot::from_json("{}")?, Snapshot::default());
        Ok(())
    }
}
