//! Creates the station sensors.

use crate::descriptors::{ALERT_TYPES, SENSOR_TYPES};
use crate::prelude::*;

pub mod alert;
pub mod measurement;

pub use self::alert::AlertSensor;
pub use self::measurement::MeasurementSensor;

/// Creates one sensor per observed quantity and one per alert category and hands them to the host.
pub fn setup(
    coordinator: &Arc<Coordinator>,
    settings: &Arc<Settings>,
    unit_system: UnitSystem,
    host: &mut dyn AddEntities,
) {
    info!(
        "Setting up `{}` ({}, {:?})…",
        settings.station, settings.language, unit_system
    );
    host.add_entities(
        SENSOR_TYPES
            .iter()
            .map(|descriptor| -> Box<dyn Entity> {
                Box::new(MeasurementSensor::new(
                    coordinator.clone(),
                    settings.clone(),
                    descriptor,
                    unit_system,
                ))
            })
            .collect(),
    );
    host.add_entities(
        ALERT_TYPES
            .iter()
            .map(|alert_type| -> Box<dyn Entity> {
                Box::new(AlertSensor::new(coordinator.clone(), settings.clone(), *alert_type))
            })
            .collect(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Default)]
    struct Registry {
        calls: usize,
        entities: Vec<Box<dyn Entity>>,
    }

    impl AddEntities for Registry {
        fn add_entities(&mut self, entities: Vec<Box<dyn Entity>>) {
            self.calls += 1;
            self.entities.extend(entities);
        }
    }

    fn setup_registry(name: Option<&str>) -> Result<Registry> {
        let mut settings: Settings = toml::from_str(r#"station = "QC/s0000635""#)?;
        settings.name = name.map(Into::into);
        let mut registry = Registry::default();
        setup(
            &Arc::new(Coordinator::default()),
            &Arc::new(settings),
            UnitSystem::Metric,
            &mut registry,
        );
        Ok(registry)
    }

    #[test]
    fn creates_every_sensor() -> Result {
        let registry = setup_registry(None)?;
        assert_eq!(registry.calls, 2);
        assert_eq!(registry.entities.len(), SENSOR_TYPES.len() + ALERT_TYPES.len());
        let unique_ids: HashSet<_> = registry.entities.iter().map(|entity| entity.unique_id()).collect();
        assert_eq!(unique_ids.len(), registry.entities.len());
        assert!(unique_ids.contains("QC/s0000635-English-warnings"));
        Ok(())
    }

    #[test]
    fn unique_ids_survive_rename() -> Result {
        let ids = |registry: Registry| -> Vec<String> {
            registry.entities.iter().map(|entity| entity.unique_id()).collect()
        };
        assert_eq!(ids(setup_registry(None)?), ids(setup_registry(Some("Montréal"))?));
        Ok(())
    }

    #[test]
    fn empty_snapshot() -> Result {
        for entity in setup_registry(None)?.entities {
            let state = entity.state();
            if entity.extra_state_attributes().is_some() {
                assert_eq!(state, Some(Value::Integer(0)));
            } else {
                assert_eq!(state, None);
            }
        }
        Ok(())
    }
}
