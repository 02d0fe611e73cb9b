//! Implements an observation value.

use std::fmt::{Display, Formatter};

use crate::prelude::*;

/// Observation or sensor state value.
///
/// Snapshots keep integers as integers so that, for example, a humidity of `65` is not
/// rendered as `65.0`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Value {
    Integer(i64),

    Float(f64),

    /// [Plain text](https://en.wikipedia.org/wiki/Plain_text), such as a current condition.
    Text(String),
}

impl Value {
    /// Multiplies a numeric value keeping its kind. Text is returned as is.
    /// An integer that would overflow becomes a float.
    pub fn scale(self, factor: i64) -> Self {
        match self {
            Value::Integer(value) => value
                .checked_mul(factor)
                .map(Value::Integer)
                .unwrap_or_else(|| Value::Float(value as f64 * factor as f64)),
            Value::Float(value) => Value::Float(value * factor as f64),
            text => text,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl TryFrom<&Value> for f64 {
    type Error = ();

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(value) => Ok(*value as f64),
            Value::Float(value) => Ok(*value),
            Value::Text(_) => Err(()),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(value) => write!(f, "{}", value),
            Value::Float(value) => write!(f, "{}", value),
            Value::Text(value) => f.write_str(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_keeps_integers() -> Result {
        assert_eq!(serde_json::from_str::<Value>("65")?, Value::Integer(65));
        assert_eq!(serde_json::from_str::<Value>("101.3")?, Value::Float(101.3));
        assert_eq!(serde_json::from_str::<Value>(r#""Mostly Cloudy""#)?, Value::from("Mostly Cloudy"));
        Ok(())
    }

    #[test]
    fn scale_keeps_kind() {
        assert_eq!(Value::Integer(101).scale(10), Value::Integer(1010));
        assert_eq!(Value::Float(0.5).scale(10), Value::Float(5.0));
        assert_eq!(Value::from("rising").scale(10), Value::from("rising"));
    }

    #[test]
    fn scale_overflow_becomes_float() {
        assert_eq!(Value::Integer(i64::MAX).scale(10), Value::Float(i64::MAX as f64 * 10.0));
        assert_eq!(Value::Integer(i64::MIN).scale(10), Value::Float(i64::MIN as f64 * 10.0));
    }

    #[test]
    fn text_is_not_a_number() {
        assert!(TryInto::<f64>::try_into(&Value::from("N")).is_err());
        assert_eq!(TryInto::<f64>::try_into(&Value::Integer(3)), Ok(3.0));
    }

    #[test]
    fn display() {
        assert_eq!(Value::Integer(12).to_string(), "12");
        assert_eq!(Value::Float(29.91).to_string(), "29.91");
        assert_eq!(Value::from("NNW").to_string(), "NNW");
    }
}
