//! A sensor rendering one observed quantity.

use crate::prelude::*;
use crate::units::{
    hectopascals_to_inches_of_mercury, kilometers_per_hour_to_miles_per_hour, meters_to_miles, round_to,
};

/// The station reports pressure in kPa while it is displayed in hPa.
const PRESSURE_KEY: &str = "pressure";
const KILOPASCALS_TO_HECTOPASCALS: i64 = 10;

pub struct MeasurementSensor {
    coordinator: Arc<Coordinator>,
    settings: Arc<Settings>,
    descriptor: &'static SensorDescriptor,
    is_metric: bool,

    /// Resolved once from the unit system.
    unit: Option<Unit>,
}

impl MeasurementSensor {
    pub fn new(
        coordinator: Arc<Coordinator>,
        settings: Arc<Settings>,
        descriptor: &'static SensorDescriptor,
        unit_system: UnitSystem,
    ) -> Self {
        let is_metric = unit_system.is_metric();
        Self {
            coordinator,
            settings,
            descriptor,
            is_metric,
            unit: if is_metric {
                descriptor.native_unit
            } else {
                descriptor.imperial_unit
            },
        }
    }

    /// Converts the raw observation into the display unit.
    fn convert(&self, value: Value) -> Value {
        let value = if self.descriptor.key == PRESSURE_KEY {
            value.scale(KILOPASCALS_TO_HECTOPASCALS)
        } else {
            value
        };

        if self.is_metric {
            return value;
        }

        let number = match TryInto::<f64>::try_into(&value) {
            Ok(number) => number,
            Err(_) => {
                if self.unit.is_some() {
                    debug!("[{}] `{}` is not a number, passing through.", self.descriptor.key, value);
                }
                return value;
            }
        };
        match self.descriptor.imperial_unit {
            Some(Unit::MilePerHour) => Value::Integer(kilometers_per_hour_to_miles_per_hour(number).round() as i64),
            Some(Unit::Mile) => Value::Integer(meters_to_miles(number).round() as i64),
            Some(Unit::InchOfMercury) => Value::Float(round_to(hectopascals_to_inches_of_mercury(number), 2)),
            Some(Unit::Celsius) => match value {
                Value::Integer(_) => value,
                _ => Value::Float(round_to(number, 1)),
            },
            Some(Unit::Percentage) => Value::Integer(number.round() as i64),
            _ => value,
        }
    }
}

impl Entity for MeasurementSensor {
    fn name(&self) -> String {
        format!("{} {}", self.settings.display_name(), self.descriptor.name)
    }

    fn unique_id(&self) -> String {
        self.settings.unique_id(self.descriptor.key)
    }

    fn state(&self) -> Option<Value> {
        let data = self.coordinator.data();
        match data.observation(self.descriptor.key) {
            Some(value) => Some(self.convert(value.clone())),
            None => {
                debug!("[{}] No value.", self.descriptor.key);
                None
            }
        }
    }

    fn unit_of_measurement(&self) -> Option<Unit> {
        self.unit
    }

    fn device_class(&self) -> Option<DeviceClass> {
        self.descriptor.device_class
    }

    fn icon(&self) -> Option<&'static str> {
        self.descriptor.icon
    }
}
