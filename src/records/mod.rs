//! Sample Records
//!
//! One row of a fetched dataset: an ordered field-name to scalar mapping.
//!
//! The backend serves two dataset shapes. Rather than probing `name` and
//! falling back to `pregnancies` ad hoc, a record is classified into a
//! [`RecordShape`] and can be viewed through the tagged [`TypedRecord`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fields of the demographic shape, in table-column order
pub const DEMOGRAPHIC_FIELDS: [&str; 3] = ["name", "age", "class"];

/// Fields of the clinical shape, in table-column order
pub const CLINICAL_FIELDS: [&str; 3] = ["pregnancies", "glucose", "outcome"];

/// A single dataset row as returned by the backend.
///
/// Field order follows the JSON body, so chart labels come out in the
/// order the backend wrote them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SampleRecord(Map<String, Value>);

/// Which known schema a record matches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordShape {
    /// Has `name`, `age` and `class`
    Demographic,
    /// Has `pregnancies`, `glucose` and `outcome`
    Clinical,
    /// Neither schema is complete
    Unrecognized,
}

impl RecordShape {
    /// Lowercase name, used to tag rendered rows
    pub fn as_str(self) -> &'static str {
        match self {
            RecordShape::Demographic => "demographic",
            RecordShape::Clinical => "clinical",
            RecordShape::Unrecognized => "unrecognized",
        }
    }
}

/// Borrowed, shape-tagged view of a record
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TypedRecord<'a> {
    Demographic {
        name: &'a Value,
        age: &'a Value,
        class: &'a Value,
    },
    Clinical {
        pregnancies: &'a Value,
        glucose: &'a Value,
        outcome: &'a Value,
    },
    Unrecognized(&'a SampleRecord),
}

impl SampleRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly useful for constructing fixtures
    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.0.insert(field.to_string(), value.into());
        self
    }

    /// Get a field if it is present and not `null`
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name).filter(|v| !v.is_null())
    }

    /// Primary field, else the fallback field
    pub fn resolve(&self, primary: &str, fallback: &str) -> Option<&Value> {
        self.field(primary).or_else(|| self.field(fallback))
    }

    /// Field names in body order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Field name/value pairs in body order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn shape(&self) -> RecordShape {
        match self.typed() {
            TypedRecord::Demographic { .. } => RecordShape::Demographic,
            TypedRecord::Clinical { .. } => RecordShape::Clinical,
            TypedRecord::Unrecognized(_) => RecordShape::Unrecognized,
        }
    }

    pub fn typed(&self) -> TypedRecord<'_> {
        if let [Some(name), Some(age), Some(class)] = DEMOGRAPHIC_FIELDS.map(|f| self.field(f)) {
            return TypedRecord::Demographic { name, age, class };
        }
        if let [Some(pregnancies), Some(glucose), Some(outcome)] =
            CLINICAL_FIELDS.map(|f| self.field(f))
        {
            return TypedRecord::Clinical {
                pregnancies,
                glucose,
                outcome,
            };
        }
        TypedRecord::Unrecognized(self)
    }
}

impl From<Map<String, Value>> for SampleRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Render a scalar the way it reads in a table cell.
///
/// Integral numbers print without a fractional part (`6.0` reads `6`).
pub fn format_scalar(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                n.as_f64().map(format_number).unwrap_or_else(|| n.to_string())
            }
        }
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Shortest readable form of a float
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

/// Bar height for a value: numbers as-is, numeric strings parsed, else no bar
pub fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_preserves_field_order() {
        let record: SampleRecord =
            serde_json::from_str(r#"{"glucose": 148, "age": 50, "outcome": 1}"#).unwrap();
        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["glucose", "age", "outcome"]);
    }

    #[test]
    fn test_shape_classification() {
        let demo = SampleRecord::new()
            .with("name", "Alice")
            .with("age", 34)
            .with("class", "A");
        assert_eq!(demo.shape(), RecordShape::Demographic);

        let clinical = SampleRecord::new()
            .with("pregnancies", 6)
            .with("glucose", 148)
            .with("outcome", 1);
        assert_eq!(clinical.shape(), RecordShape::Clinical);

        let partial = SampleRecord::new().with("name", "Bob").with("glucose", 90);
        assert_eq!(partial.shape(), RecordShape::Unrecognized);

        assert_eq!(demo.shape().as_str(), "demographic");
        assert_eq!(clinical.shape().as_str(), "clinical");
        assert_eq!(partial.shape().as_str(), "unrecognized");
    }

    #[test]
    fn test_null_counts_as_missing() {
        let record = SampleRecord::new()
            .with("name", Value::Null)
            .with("pregnancies", 2);
        assert_eq!(record.resolve("name", "pregnancies"), Some(&json!(2)));
        assert_eq!(record.field("name"), None);
    }

    #[test]
    fn test_format_scalar() {
        assert_eq!(format_scalar(&json!("Alice")), "Alice");
        assert_eq!(format_scalar(&json!(34)), "34");
        assert_eq!(format_scalar(&json!(6.0)), "6");
        assert_eq!(format_scalar(&json!(33.6)), "33.6");
        assert_eq!(format_scalar(&json!(0.627)), "0.627");
        assert_eq!(format_scalar(&json!(true)), "true");
        assert_eq!(format_scalar(&Value::Null), "");
    }

    #[test]
    fn test_numeric_value() {
        assert_eq!(numeric_value(&json!(148)), Some(148.0));
        assert_eq!(numeric_value(&json!(" 2.5 ")), Some(2.5));
        assert_eq!(numeric_value(&json!("Alice")), None);
        assert_eq!(numeric_value(&json!(false)), None);
        assert_eq!(numeric_value(&Value::Null), None);
    }
}
