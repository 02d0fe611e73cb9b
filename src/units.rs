//! Describes sensor units and the conversions between metric and imperial ones.

use std::fmt::{Display, Formatter};

use uom::si::f64::{Length, Pressure, Velocity};
use uom::si::{length, pressure, velocity};

use crate::prelude::*;

/// A sensor unit of measurement.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Unit {
    Celsius,
    Percentage,
    Hectopascal,
    InchOfMercury,
    KilometerPerHour,
    MilePerHour,
    Meter,
    Mile,
    Millimeter,
    Inch,
    Degree,
    UvIndex,
}

impl Unit {
    /// Unit symbol as shown next to a value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Celsius => "°C",
            Unit::Percentage => "%",
            Unit::Hectopascal => "hPa",
            Unit::InchOfMercury => "inHg",
            Unit::KilometerPerHour => "km/h",
            Unit::MilePerHour => "mph",
            Unit::Meter => "m",
            Unit::Mile => "mi",
            Unit::Millimeter => "mm",
            Unit::Inch => "in",
            Unit::Degree => "°",
            Unit::UvIndex => "UV index",
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converts [km/h](https://en.wikipedia.org/wiki/Kilometres_per_hour) into
/// [mph](https://en.wikipedia.org/wiki/Miles_per_hour).
pub fn kilometers_per_hour_to_miles_per_hour(value: f64) -> f64 {
    Velocity::new::<velocity::kilometer_per_hour>(value).get::<velocity::mile_per_hour>()
}

pub fn meters_to_miles(value: f64) -> f64 {
    Length::new::<length::meter>(value).get::<length::mile>()
}

/// Converts [hPa](https://en.wikipedia.org/wiki/Pascal_(unit)) into
/// [inches of mercury](https://en.wikipedia.org/wiki/Inch_of_mercury).
pub fn hectopascals_to_inches_of_mercury(value: f64) -> f64 {
    Pressure::new::<pressure::hectopascal>(value).get::<pressure::inch_of_mercury>()
}

/// Rounds the value to the specified number of decimal digits, half away from zero.
pub fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10_f64.powi(digits);
    (value * factor).round() / factor
}
