use serde::{Serialize, Deserialize};

use std::collections::HashMap;

use crate::error::{C45Error, Result};
use super::attribute::Attribute;


/// One labeled training example.
/// Attribute values are kept as text and parsed on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    attribute_values: HashMap<String, String>,
    target_value: String,
}


impl Instance {
    /// Construct a new instance from `(name, value)` pairs and a label.
    pub fn new<I, K, V, T>(values: I, target_value: T) -> Self
        where I: IntoIterator<Item = (K, V)>,
              K: ToString,
              V: ToString,
              T: ToString,
    {
        let attribute_values = values.into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let target_value = target_value.to_string();
        Self { attribute_values, target_value }
    }


    /// Returns the map from attribute names to raw values.
    #[inline]
    pub fn attribute_values(&self) -> &HashMap<String, String> {
        &self.attribute_values
    }


    /// Returns the raw text for `attribute`, if any.
    #[inline]
    pub fn raw_value(&self, attribute: &Attribute) -> Option<&str> {
        self.attribute_values.get(attribute.name())
            .map(String::as_str)
    }


    /// Returns the class label.
    #[inline]
    pub fn target_value(&self) -> &str {
        &self.target_value
    }


    /// Parse the value of `attribute` as a number.
    /// `NaN` and infinities are rejected.
    pub fn value(&self, attribute: &Attribute) -> Result<f64> {
        let raw = self.raw_value(attribute)
            .ok_or_else(|| C45Error::MissingValue {
                attribute: attribute.name().to_string(),
            })?;

        let value = raw.trim()
            .parse::<f64>()
            .map_err(|source| C45Error::Parse {
                attribute: attribute.name().to_string(),
                value: raw.to_string(),
                source,
            })?;

        if !value.is_finite() {
            return Err(C45Error::NonFinite {
                attribute: attribute.name().to_string(),
                value: raw.to_string(),
            });
        }
        Ok(value)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_value() {
        let age = Attribute::continuous("age");
        let instance = Instance::new([("age", " 32.5 ")], "Yes");
        let value = instance.value(&age).unwrap();
        assert_eq!(value, 32.5);
    }

    #[test]
    fn non_numeric_value_is_a_parse_error() {
        let age = Attribute::continuous("age");
        let instance = Instance::new([("age", "old")], "Yes");
        let err = instance.value(&age).unwrap_err();
        assert!(matches!(err, C45Error::Parse { ref value, .. } if value == "old"));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let age = Attribute::continuous("age");
        for raw in ["NaN", "inf", "-infinity"] {
            let instance = Instance::new([("age", raw)], "Yes");
            let err = instance.value(&age).unwrap_err();
            assert!(
                matches!(err, C45Error::NonFinite { ref value, .. } if value == raw),
                "expected `NonFinite` for {raw}, got {err:?}"
            );
        }
    }

    #[test]
    fn absent_value_is_reported() {
        let age = Attribute::continuous("age");
        let instance = Instance::new([("height", "180")], "Yes");
        let err = instance.value(&age).unwrap_err();
        assert!(matches!(err, C45Error::MissingValue { .. }));
    }
}
