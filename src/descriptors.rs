//! Static description of the exposed sensors.

use crate::prelude::*;

/// Host-side classification of a sensor.
#[derive(Debug, Serialize, Copy, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    Temperature,
    Humidity,
    Pressure,
    Timestamp,
}

/// Describes one measurable quantity of a weather station.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorDescriptor {
    /// Observation key in the snapshot.
    pub key: &'static str,

    pub name: &'static str,

    /// Unit the source reports in, or the metric display unit.
    pub native_unit: Option<Unit>,

    /// Display unit used when the installation prefers imperial units.
    pub imperial_unit: Option<Unit>,

    pub device_class: Option<DeviceClass>,

    pub icon: Option<&'static str>,
}

impl SensorDescriptor {
    const fn text(key: &'static str, name: &'static str, icon: &'static str) -> Self {
        Self {
            key,
            name,
            native_unit: None,
            imperial_unit: None,
            device_class: None,
            icon: Some(icon),
        }
    }

    const fn temperature(key: &'static str, name: &'static str) -> Self {
        Self {
            key,
            name,
            native_unit: Some(Unit::Celsius),
            imperial_unit: Some(Unit::Celsius),
            device_class: Some(DeviceClass::Temperature),
            icon: None,
        }
    }

    /// Finds the descriptor by its observation key.
    pub fn find(key: &str) -> Option<&'static SensorDescriptor> {
        SENSOR_TYPES.iter().find(|descriptor| descriptor.key == key)
    }
}

/// Alert category, such as warnings or watches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertType {
    /// Category key in the alert snapshot.
    pub key: &'static str,

    pub label: &'static str,
}

pub const SENSOR_TYPES: &[SensorDescriptor] = &[
    SensorDescriptor::text("condition", "Current Condition", "mdi:weather-partly-cloudy"),
    SensorDescriptor::temperature("dewpoint", "Dew Point"),
    SensorDescriptor::temperature("high_temp", "High Temperature"),
    SensorDescriptor::temperature("humidex", "Humidex"),
    SensorDescriptor {
        key: "humidity",
        name: "Humidity",
        native_unit: Some(Unit::Percentage),
        imperial_unit: Some(Unit::Percentage),
        device_class: Some(DeviceClass::Humidity),
        icon: None,
    },
    SensorDescriptor::text("icon_code", "Icon Code", "mdi:weather-partly-cloudy"),
    SensorDescriptor::temperature("low_temp", "Low Temperature"),
    SensorDescriptor::temperature("normal_high", "Normal High Temperature"),
    SensorDescriptor::temperature("normal_low", "Normal Low Temperature"),
    SensorDescriptor {
        key: "pop",
        name: "Chance of Precipitation",
        native_unit: Some(Unit::Percentage),
        imperial_unit: Some(Unit::Percentage),
        device_class: None,
        icon: Some("mdi:weather-rainy"),
    },
    SensorDescriptor {
        key: "precip_yesterday",
        name: "Precipitation Yesterday",
        native_unit: Some(Unit::Millimeter),
        imperial_unit: Some(Unit::Inch),
        device_class: None,
        icon: Some("mdi:weather-pouring"),
    },
    SensorDescriptor {
        key: "pressure",
        name: "Barometric Pressure",
        native_unit: Some(Unit::Hectopascal),
        imperial_unit: Some(Unit::InchOfMercury),
        device_class: Some(DeviceClass::Pressure),
        icon: None,
    },
    SensorDescriptor::temperature("temperature", "Temperature"),
    SensorDescriptor::text("tendency", "Tendency", "mdi:swap-vertical"),
    SensorDescriptor::text("text_summary", "Summary", "mdi:weather-sunny"),
    SensorDescriptor {
        key: "timestamp",
        name: "Observation Time",
        native_unit: None,
        imperial_unit: None,
        device_class: Some(DeviceClass::Timestamp),
        icon: None,
    },
    SensorDescriptor {
        key: "uv_index",
        name: "UV Index",
        native_unit: Some(Unit::UvIndex),
        imperial_unit: Some(Unit::UvIndex),
        device_class: None,
        icon: Some("mdi:weather-sunny-alert"),
    },
    SensorDescriptor {
        key: "visibility",
        name: "Visibility",
        native_unit: Some(Unit::Meter),
        imperial_unit: Some(Unit::Mile),
        device_class: None,
        icon: Some("mdi:telescope"),
    },
    SensorDescriptor {
        key: "wind_bearing",
        name: "Wind Bearing",
        native_unit: Some(Unit::Degree),
        imperial_unit: Some(Unit::Degree),
        device_class: None,
        icon: Some("mdi:compass"),
    },
    SensorDescriptor::temperature("wind_chill", "Wind Chill"),
    SensorDescriptor::text("wind_dir", "Wind Direction", "mdi:sign-direction"),
    SensorDescriptor {
        key: "wind_gust",
        name: "Wind Gust",
        native_unit: Some(Unit::KilometerPerHour),
        imperial_unit: Some(Unit::MilePerHour),
        device_class: None,
        icon: Some("mdi:weather-windy"),
    },
    SensorDescriptor {
        key: "wind_speed",
        name: "Wind Speed",
        native_unit: Some(Unit::KilometerPerHour),
        imperial_unit: Some(Unit::MilePerHour),
        device_class: None,
        icon: Some("mdi:weather-windy"),
    },
];

pub const ALERT_TYPES: &[AlertType] = &[
    AlertType {
        key: "advisories",
        label: "Advisory",
    },
    AlertType {
        key: "endings",
        label: "Ending",
    },
    AlertType {
        key: "statements",
        label: "Statement",
    },
    AlertType {
        key: "warnings",
        label: "Warning",
    },
    AlertType {
        key: "watches",
        label: "Watch",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique() {
        let keys: HashSet<_> = SENSOR_TYPES
            .iter()
            .map(|descriptor| descriptor.key)
            .chain(ALERT_TYPES.iter().map(|alert_type| alert_type.key))
            .collect();
        assert_eq!(keys.len(), SENSOR_TYPES.len() + ALERT_TYPES.len());
    }

    #[test]
    fn find_ok() {
        let descriptor = SensorDescriptor::find("pressure").unwrap();
        assert_eq!(descriptor.native_unit, Some(Unit::Hectopascal));
        assert_eq!(descriptor.imperial_unit, Some(Unit::InchOfMercury));
        assert_eq!(descriptor.device_class, Some(DeviceClass::Pressure));
    }

    #[test]
    fn find_unknown() {
        assert_eq!(SensorDescriptor::find("snow_depth"), None);
    }

    #[test]
    fn units_come_in_pairs() {
        for descriptor in SENSOR_TYPES {
            assert_eq!(
                descriptor.native_unit.is_some(),
                descriptor.imperial_unit.is_some(),
                "{}",
                descriptor.key,
            );
        }
    }
}
