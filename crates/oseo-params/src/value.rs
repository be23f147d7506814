//! Typed parameter values.

use chrono::{DateTime, Utc};
use oseo_common::{parse_iso8601, BoundingBox};
use serde::Serialize;

use crate::descriptor::{NumericBound, ParameterDescriptor, ValueType};
use crate::errors::ParameterError;
use crate::relation::DateRelation;

/// A raw query value parsed according to its descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum ParameterValue {
    Date(DateTime<Utc>),
    Integer(i64),
    Double(f64),
    String(String),
    Relation(DateRelation),
    Box(BoundingBox),
}

impl ParameterDescriptor {
    /// Parse a raw query-string value as this parameter's type.
    ///
    /// Numeric values are checked against the inclusive bounds.
    pub fn parse_value(&self, raw: &str) -> Result<ParameterValue, ParameterError> {
        let invalid = |message: String| ParameterError::InvalidValue {
            param: self.qualified_name(),
            message,
        };

        let value = match self.value_type() {
            ValueType::String => ParameterValue::String(raw.to_string()),
            ValueType::Integer => {
                let v: i64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| invalid(format!("'{}' is not an integer", raw)))?;
                self.check_bounds(NumericBound::Integer(v))?;
                ParameterValue::Integer(v)
            }
            ValueType::Double => {
                let v: f64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| invalid(format!("'{}' is not a number", raw)))?;
                if !v.is_finite() {
                    return Err(invalid(format!("'{}' is not a finite number", raw)));
                }
                self.check_bounds(NumericBound::Double(v))?;
                ParameterValue::Double(v)
            }
            ValueType::Date => {
                ParameterValue::Date(parse_iso8601(raw).map_err(|e| invalid(e.to_string()))?)
            }
            ValueType::Relation => ParameterValue::Relation(
                raw.parse::<DateRelation>()
                    .map_err(|_| invalid(format!("'{}' is not a known relation", raw)))?,
            ),
            ValueType::Box => ParameterValue::Box(
                BoundingBox::from_geo_box(raw).map_err(|e| invalid(e.to_string()))?,
            ),
        };

        Ok(value)
    }

    fn check_bounds(&self, value: NumericBound) -> Result<(), ParameterError> {
        let bounds = self.bounds();
        if bounds.contains(value) {
            Ok(())
        } else {
            Err(ParameterError::OutOfBounds {
                param: self.qualified_name(),
                value,
                bounds,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{
        basic_open_search_parameters, GEO_BOX, GEO_LAT, GEO_RADIUS, START_INDEX, TIME_RELATION,
        TIME_START,
    };

    #[test]
    fn test_parse_double_in_bounds() {
        assert_eq!(GEO_LAT.parse_value("45.5").unwrap(), ParameterValue::Double(45.5));
        assert_eq!(GEO_LAT.parse_value("-90").unwrap(), ParameterValue::Double(-90.0));
    }

    #[test]
    fn test_parse_double_out_of_bounds() {
        let err = GEO_LAT.parse_value("95").unwrap_err();
        assert!(matches!(err, ParameterError::OutOfBounds { ref param, .. } if param == "geo:lat"));

        let err = GEO_RADIUS.parse_value("-1").unwrap_err();
        assert!(matches!(err, ParameterError::OutOfBounds { .. }));
    }

    #[test]
    fn test_parse_double_rejects_nan() {
        assert!(matches!(
            GEO_LAT.parse_value("NaN"),
            Err(ParameterError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_parse_count_against_limit() {
        let params = basic_open_search_parameters(50);
        let count = params.last().unwrap();
        assert_eq!(count.parse_value("50").unwrap(), ParameterValue::Integer(50));
        assert!(count.parse_value("51").is_err());
        assert!(count.parse_value("-1").is_err());
        assert!(count.parse_value("ten").is_err());
    }

    #[test]
    fn test_parse_unbounded_integer() {
        assert_eq!(
            START_INDEX.parse_value("123456").unwrap(),
            ParameterValue::Integer(123456)
        );
    }

    #[test]
    fn test_parse_relation_and_date() {
        assert_eq!(
            TIME_RELATION.parse_value("contains").unwrap(),
            ParameterValue::Relation(DateRelation::Contains)
        );
        assert!(TIME_RELATION.parse_value("overlaps").is_err());

        match TIME_START.parse_value("2017-03-01T00:00:00Z").unwrap() {
            ParameterValue::Date(dt) => assert_eq!(dt.to_rfc3339(), "2017-03-01T00:00:00+00:00"),
            other => panic!("unexpected value {:?}", other),
        }
    }

    #[test]
    fn test_parse_box() {
        assert_eq!(
            GEO_BOX.parse_value("-10,-5,10,5").unwrap(),
            ParameterValue::Box(BoundingBox::new(-10.0, -5.0, 10.0, 5.0))
        );
        let err = GEO_BOX.parse_value("1,2,3").unwrap_err();
        assert!(err.is_client_error());
    }

    #[test]
    fn test_value_serialization() {
        let json = serde_json::to_value(ParameterValue::Relation(DateRelation::During)).unwrap();
        assert_eq!(json["type"], "relation");
        assert_eq!(json["value"], "during");
    }
}
