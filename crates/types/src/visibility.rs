//! Visibility predicates over the live configuration value map
//!
//! A field carrying a predicate is drawn only while the predicate holds.
//! The serialized form is `{"<referenced field>": {"$ne": <comparand>}}`,
//! which is what the web renderer reads from a field's `show_if` key.

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Live configuration values keyed by field name
pub type ValueMap = Map<String, Value>;

/// Comparison applied to the referenced field's current value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Condition {
    /// Value differs from the comparand
    #[serde(rename = "$ne")]
    NotEqual(Value),
    /// Value equals the comparand
    #[serde(rename = "$eq")]
    Equal(Value),
    /// Value equals one of the listed comparands
    #[serde(rename = "$in")]
    OneOf(Vec<Value>),
}

impl Condition {
    /// Value an absent key is compared as.
    ///
    /// The comparand's type stands in for the field's type: `""` for
    /// strings, `0` for numbers, `false` for booleans, `null` otherwise.
    pub fn zero_value(&self) -> Value {
        let sample = match self {
            Condition::NotEqual(comparand) | Condition::Equal(comparand) => Some(comparand),
            Condition::OneOf(comparands) => comparands.first(),
        };
        match sample {
            Some(Value::String(_)) => Value::String(String::new()),
            Some(Value::Number(_)) => Value::from(0),
            Some(Value::Bool(_)) => Value::Bool(false),
            _ => Value::Null,
        }
    }

    pub fn matches(&self, current: &Value) -> bool {
        match self {
            Condition::NotEqual(comparand) => !loosely_equal(current, comparand),
            Condition::Equal(comparand) => loosely_equal(current, comparand),
            Condition::OneOf(comparands) => comparands.iter().any(|c| loosely_equal(current, c)),
        }
    }
}

/// JSON equality, except numbers compare by value (`1 == 1.0`).
/// Integers compare exactly; `f64` is used only when a float is involved.
fn loosely_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) if x.is_f64() || y.is_f64() => x.as_f64() == y.as_f64(),
        (Value::Number(x), Value::Number(y)) => match (x.as_i64(), y.as_i64()) {
            (Some(x), Some(y)) => x == y,
            _ => x.as_u64().is_some() && x.as_u64() == y.as_u64(),
        },
        _ => a == b,
    }
}

/// Boolean condition on one other field of the same scope
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    /// Name of the field whose value is inspected
    pub field: String,
    pub condition: Condition,
}

impl Predicate {
    pub fn new(field: impl Into<String>, condition: Condition) -> Self {
        Self {
            field: field.into(),
            condition,
        }
    }

    pub fn not_equal(field: impl Into<String>, comparand: impl Into<Value>) -> Self {
        Self::new(field, Condition::NotEqual(comparand.into()))
    }

    pub fn equal(field: impl Into<String>, comparand: impl Into<Value>) -> Self {
        Self::new(field, Condition::Equal(comparand.into()))
    }

    pub fn one_of<V: Into<Value>>(field: impl Into<String>, comparands: impl IntoIterator<Item = V>) -> Self {
        Self::new(
            field,
            Condition::OneOf(comparands.into_iter().map(Into::into).collect()),
        )
    }

    /// Evaluate against the current values. Never mutates `values`.
    pub fn evaluate(&self, values: &ValueMap) -> bool {
        let zero;
        let current = match values.get(&self.field) {
            Some(value) if !value.is_null() => value,
            _ => {
                zero = self.condition.zero_value();
                &zero
            }
        };
        self.condition.matches(current)
    }
}

/// Decide whether a field is shown. A missing predicate always shows.
pub fn is_visible(predicate: Option<&Predicate>, values: &ValueMap) -> bool {
    predicate.map_or(true, |predicate| predicate.evaluate(values))
}

impl Serialize for Predicate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.field, &self.condition)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Predicate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PredicateVisitor;

        impl<'de> Visitor<'de> for PredicateVisitor {
            type Value = Predicate;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map with exactly one field name and its condition")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Predicate, A::Error> {
                let (field, condition) = access
                    .next_entry::<String, Condition>()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                if access.next_key::<de::IgnoredAny>()?.is_some() {
                    return Err(de::Error::custom(
                        "show_if references more than one field",
                    ));
                }
                Ok(Predicate { field, condition })
            }
        }

        deserializer.deserialize_map(PredicateVisitor)
    }
}
