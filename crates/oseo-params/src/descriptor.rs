//! Parameter descriptor types.
//!
//! A descriptor names one query parameter, its value type, its namespace and
//! the inclusive numeric range its values must fall in.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::errors::ParameterError;
use crate::metadata_keys;
use crate::prefixes;

/// Semantic type of a parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// ISO 8601 instant.
    Date,
    /// Signed integer.
    Integer,
    /// Floating point number.
    Double,
    /// Free text.
    String,
    /// A [`DateRelation`](crate::DateRelation) name.
    Relation,
    /// A geographic envelope, "west,south,east,north".
    Box,
}

impl ValueType {
    /// Whether values of this type can carry numeric bounds.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ValueType::Integer | ValueType::Double)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Date => "date",
            ValueType::Integer => "integer",
            ValueType::Double => "double",
            ValueType::String => "string",
            ValueType::Relation => "relation",
            ValueType::Box => "box",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Namespace a parameter belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Prefix {
    Os,
    Geo,
    Time,
    Eo,
}

impl Prefix {
    pub fn as_str(&self) -> &'static str {
        match self {
            Prefix::Os => prefixes::OS,
            Prefix::Geo => prefixes::GEO,
            Prefix::Time => prefixes::TIME,
            Prefix::Eo => prefixes::EO,
        }
    }

    /// The OpenSearch native namespace, rendered unqualified on request.
    pub fn is_native(&self) -> bool {
        matches!(self, Prefix::Os)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Prefix {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            prefixes::OS => Ok(Prefix::Os),
            prefixes::GEO => Ok(Prefix::Geo),
            prefixes::TIME => Ok(Prefix::Time),
            prefixes::EO => Ok(Prefix::Eo),
            other => Err(ParameterError::UnknownPrefix(other.to_string())),
        }
    }
}

/// An inclusive numeric bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericBound {
    Integer(i64),
    Double(f64),
}

impl NumericBound {
    pub fn as_f64(&self) -> f64 {
        match self {
            NumericBound::Integer(v) => *v as f64,
            NumericBound::Double(v) => *v,
        }
    }

    /// Numeric comparison across integer and floating point bounds.
    ///
    /// Two integers compare exactly; anything involving a double compares
    /// as `f64`. Returns `None` if a NaN is involved.
    pub fn compare(&self, other: &NumericBound) -> Option<Ordering> {
        match (self, other) {
            (NumericBound::Integer(a), NumericBound::Integer(b)) => Some(a.cmp(b)),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

impl From<i64> for NumericBound {
    fn from(v: i64) -> Self {
        NumericBound::Integer(v)
    }
}

impl From<i32> for NumericBound {
    fn from(v: i32) -> Self {
        NumericBound::Integer(v as i64)
    }
}

impl From<f64> for NumericBound {
    fn from(v: f64) -> Self {
        NumericBound::Double(v)
    }
}

impl fmt::Display for NumericBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericBound::Integer(v) => write!(f, "{}", v),
            NumericBound::Double(v) => write!(f, "{}", v),
        }
    }
}

/// Inclusive range carried by a numeric parameter. Either end may be open.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub min: Option<NumericBound>,
    pub max: Option<NumericBound>,
}

impl Bounds {
    /// Whether neither end is bounded.
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Check a value against both ends of the range.
    pub fn contains(&self, value: NumericBound) -> bool {
        let above_min = self.min.map_or(true, |min| {
            matches!(value.compare(&min), Some(Ordering::Greater | Ordering::Equal))
        });
        let below_max = self.max.map_or(true, |max| {
            matches!(value.compare(&max), Some(Ordering::Less | Ordering::Equal))
        });
        above_min && below_max
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.min {
            Some(min) => write!(f, "[{}, ", min)?,
            None => f.write_str("(-inf, ")?,
        }
        match self.max {
            Some(max) => write!(f, "{}]", max),
            None => f.write_str("+inf)"),
        }
    }
}

/// Immutable description of one query parameter.
///
/// Built through [`ParameterBuilder`](crate::ParameterBuilder).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterDescriptor {
    pub(crate) key: String,

    #[serde(rename = "type")]
    pub(crate) value_type: ValueType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) prefix: Option<Prefix>,

    #[serde(rename = "minInclusive", skip_serializing_if = "Option::is_none")]
    pub(crate) min_inclusive: Option<NumericBound>,

    #[serde(rename = "maxInclusive", skip_serializing_if = "Option::is_none")]
    pub(crate) max_inclusive: Option<NumericBound>,
}

impl ParameterDescriptor {
    /// Parameter key, unique within its namespace.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn prefix(&self) -> Option<Prefix> {
        self.prefix
    }

    pub fn min_inclusive(&self) -> Option<NumericBound> {
        self.min_inclusive
    }

    pub fn max_inclusive(&self) -> Option<NumericBound> {
        self.max_inclusive
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            min: self.min_inclusive,
            max: self.max_inclusive,
        }
    }

    /// Wire name, qualified with the prefix even for native parameters.
    pub fn qualified_name(&self) -> String {
        crate::registry::qualified_name(self)
    }

    /// String-keyed view of the prefix and bounds, for capability documents.
    pub fn metadata(&self) -> BTreeMap<&'static str, String> {
        let mut map = BTreeMap::new();
        if let Some(prefix) = self.prefix {
            map.insert(metadata_keys::PARAM_PREFIX, prefix.as_str().to_string());
        }
        if let Some(min) = self.min_inclusive {
            map.insert(metadata_keys::MIN_INCLUSIVE, min.to_string());
        }
        if let Some(max) = self.max_inclusive {
            map.insert(metadata_keys::MAX_INCLUSIVE, max.to_string());
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_round_trip() {
        for prefix in [Prefix::Os, Prefix::Geo, Prefix::Time, Prefix::Eo] {
            assert_eq!(prefix.as_str().parse::<Prefix>().unwrap(), prefix);
        }
        assert!(matches!(
            "dc".parse::<Prefix>(),
            Err(ParameterError::UnknownPrefix(_))
        ));
    }

    #[test]
    fn test_numeric_bound_compare() {
        let zero = NumericBound::Integer(0);
        assert_eq!(zero.compare(&NumericBound::Double(0.0)), Some(Ordering::Equal));
        assert_eq!(zero.compare(&NumericBound::Double(0.5)), Some(Ordering::Less));
        assert_eq!(
            NumericBound::Integer(i64::MAX).compare(&NumericBound::Integer(i64::MAX - 1)),
            Some(Ordering::Greater)
        );
        assert_eq!(zero.compare(&NumericBound::Double(f64::NAN)), None);
    }

    #[test]
    fn test_bounds_contains() {
        let lat = Bounds {
            min: Some(NumericBound::Integer(-90)),
            max: Some(NumericBound::Integer(90)),
        };
        assert!(lat.contains(NumericBound::Double(-90.0)));
        assert!(lat.contains(NumericBound::Double(90.0)));
        assert!(!lat.contains(NumericBound::Double(90.0001)));
        assert!(!lat.contains(NumericBound::Double(f64::NAN)));

        let open = Bounds::default();
        assert!(open.is_unbounded());
        assert!(open.contains(NumericBound::Integer(i64::MIN)));
    }

    #[test]
    fn test_bounds_display() {
        let count = Bounds {
            min: Some(NumericBound::Integer(0)),
            max: None,
        };
        assert_eq!(count.to_string(), "[0, +inf)");

        let lon = Bounds {
            min: Some(NumericBound::Double(-180.0)),
            max: Some(NumericBound::Double(180.0)),
        };
        assert_eq!(lon.to_string(), "[-180, 180]");
    }

    #[test]
    fn test_value_type_names() {
        assert!(ValueType::Integer.is_numeric());
        assert!(ValueType::Double.is_numeric());
        assert!(!ValueType::Box.is_numeric());
        assert_eq!(ValueType::Relation.to_string(), "relation");
        assert_eq!(serde_json::to_string(&ValueType::Date).unwrap(), "\"date\"");
    }
}
