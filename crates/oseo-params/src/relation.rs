//! Temporal relation between a product's validity and the query interval.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ParameterError;

/// Value of the `time:relation` parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRelation {
    #[default]
    Intersects,
    Contains,
    During,
    Disjoint,
    Equals,
}

impl DateRelation {
    /// All relations, in declaration order.
    pub const ALL: [DateRelation; 5] = [
        DateRelation::Intersects,
        DateRelation::Contains,
        DateRelation::During,
        DateRelation::Disjoint,
        DateRelation::Equals,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DateRelation::Intersects => "intersects",
            DateRelation::Contains => "contains",
            DateRelation::During => "during",
            DateRelation::Disjoint => "disjoint",
            DateRelation::Equals => "equals",
        }
    }
}

impl fmt::Display for DateRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateRelation {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateRelation::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParameterError::InvalidValue {
                param: "time:relation".to_string(),
                message: format!(
                    "'{}' is not one of intersects, contains, during, disjoint, equals",
                    s
                ),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all() {
        for relation in DateRelation::ALL {
            assert_eq!(relation.as_str().parse::<DateRelation>().unwrap(), relation);
        }
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("DURING".parse::<DateRelation>().unwrap(), DateRelation::During);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "overlaps".parse::<DateRelation>().unwrap_err();
        assert!(err.is_client_error());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&DateRelation::Disjoint).unwrap();
        assert_eq!(json, "\"disjoint\"");
        let parsed: DateRelation = serde_json::from_str("\"equals\"").unwrap();
        assert_eq!(parsed, DateRelation::Equals);
    }

    #[test]
    fn test_default_is_intersects() {
        assert_eq!(DateRelation::default(), DateRelation::Intersects);
    }
}
