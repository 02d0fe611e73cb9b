//! Describes what the host platform sees of a sensor.

use crate::prelude::*;

/// Extra state attributes in insertion order.
pub type Attributes = Vec<(String, String)>;

/// A sensor entity exposed to the host.
///
/// All the methods are evaluated against the coordinator's current snapshot on every call.
pub trait Entity {
    fn name(&self) -> String;

    /// Identifier the host uses to persist user customizations across restarts.
    fn unique_id(&self) -> String;

    /// Current state, `None` when unknown.
    fn state(&self) -> Option<Value>;

    fn unit_of_measurement(&self) -> Option<Unit> {
        None
    }

    fn device_class(&self) -> Option<DeviceClass> {
        None
    }

    fn icon(&self) -> Option<&'static str> {
        None
    }

    fn entity_registry_enabled_default(&self) -> bool {
        true
    }

    fn extra_state_attributes(&self) -> Option<Attributes> {
        None
    }
}

/// Implemented by the host to take over the created entities.
pub trait AddEntities {
    fn add_entities(&mut self, entities: Vec<Box<dyn Entity>>);
}

/// Rendering of an entity at a point in time.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct EntityState {
    pub unique_id: String,

    pub name: String,

    pub state: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_of_measurement: Option<&'static str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_class: Option<DeviceClass>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,

    pub enabled_by_default: bool,

    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "serialize_attributes")]
    pub attributes: Option<Attributes>,

    pub rendered_at: DateTime<Local>,
}

impl EntityState {
    pub fn of(entity: &dyn Entity) -> Self {
        Self {
            unique_id: entity.unique_id(),
            name: entity.name(),
            state: entity.state(),
            unit_of_measurement: entity.unit_of_measurement().map(|unit| unit.as_str()),
            device_class: entity.device_class(),
            icon: entity.icon(),
            enabled_by_default: entity.entity_registry_enabled_default(),
            attributes: entity.extra_state_attributes(),
            rendered_at: Local::now(),
        }
    }

    /// Formats the state the way it is shown to a user, for example `12 mph`.
    pub fn display_state(&self) -> String {
        match (&self.state, self.unit_of_measurement) {
            (Some(state), Some(unit)) => format!("{} {}", state, unit),
            (Some(state), None) => state.to_string(),
            (None, _) => "unknown".into(),
        }
    }
}

/// Serializes the attribute pairs as a JSON object keeping their order.
fn serialize_attributes<S: serde::Serializer>(
    attributes: &Option<Attributes>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeMap;

    let attributes = attributes.as_deref().unwrap_or_default();
    let mut map = serializer.serialize_map(Some(attributes.len()))?;
    for (key, value) in attributes {
        map.serialize_entry(key, value)?;
    }
    map.end()
}
