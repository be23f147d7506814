//! Catalog rendering and value checks.

use oseo_params::registry::{
    basic_parameters_for, find_parameter, geo_time_open_search_parameters, parameter_prefix,
    qualified_name_with,
};
use oseo_params::{
    NumericBound, ParameterDescriptor, ParameterError, ParameterValue, RecordsPerPageLimit,
    ValueType,
};
use serde::Serialize;

use crate::config::ServiceConfig;

/// One parameter as listed in a capability document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterEntry {
    /// Wire name.
    pub name: String,
    pub key: String,
    #[serde(rename = "type")]
    pub value_type: ValueType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<&'static str>,
    #[serde(rename = "minInclusive", skip_serializing_if = "Option::is_none")]
    pub min_inclusive: Option<NumericBound>,
    #[serde(rename = "maxInclusive", skip_serializing_if = "Option::is_none")]
    pub max_inclusive: Option<NumericBound>,
}

impl ParameterEntry {
    pub fn from_descriptor(param: &ParameterDescriptor, qualify_native: bool) -> Self {
        Self {
            name: qualified_name_with(param, qualify_native),
            key: param.key().to_string(),
            value_type: param.value_type(),
            prefix: parameter_prefix(param),
            min_inclusive: param.min_inclusive(),
            max_inclusive: param.max_inclusive(),
        }
    }
}

/// The full parameter listing.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    #[serde(rename = "outputCrs")]
    pub output_crs: String,
    pub basic: Vec<ParameterEntry>,
    #[serde(rename = "geoTime")]
    pub geo_time: Vec<ParameterEntry>,
}

/// Build the listing for the given configuration.
pub fn catalog(config: &ServiceConfig, output_crs: &str) -> Catalog {
    let qualify = config.qualify_native_names;
    Catalog {
        output_crs: output_crs.to_string(),
        basic: basic_parameters_for(config)
            .iter()
            .map(|p| ParameterEntry::from_descriptor(p, qualify))
            .collect(),
        geo_time: geo_time_open_search_parameters()
            .iter()
            .map(|p| ParameterEntry::from_descriptor(p, qualify))
            .collect(),
    }
}

/// Resolve a wire name and parse a raw value against it.
pub fn check_value(
    config: &ServiceConfig,
    name: &str,
    raw: &str,
) -> Result<ParameterValue, ParameterError> {
    let param = find_parameter(name, config.maximum_records_per_page())?;
    param.parse_value(raw)
}
