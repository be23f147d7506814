//! Canonical OpenSearch parameter catalogs and wire-name resolution.
//!
//! Two fixed catalogs are kept: the basic OpenSearch parameters and the
//! Geo/Time extension parameters. Both are initialized once and shared
//! read-only. The `count` parameter depends on the service's page size limit
//! and is rebuilt on every call to [`basic_open_search_parameters`].

use once_cell::sync::Lazy;
use tracing::debug;

use crate::builder::ParameterBuilder;
use crate::config::RecordsPerPageLimit;
use crate::descriptor::{ParameterDescriptor, Prefix, ValueType};
use crate::errors::ParameterError;

/// Key of the page size parameter.
pub const COUNT_KEY: &str = "count";

pub static SEARCH_TERMS: Lazy<ParameterDescriptor> = Lazy::new(|| {
    ParameterBuilder::new("searchTerms", ValueType::String)
        .prefix(Prefix::Os)
        .build_trusted()
});

pub static START_INDEX: Lazy<ParameterDescriptor> = Lazy::new(|| {
    ParameterBuilder::new("startIndex", ValueType::Integer)
        .prefix(Prefix::Os)
        .build_trusted()
});

pub static GEO_UID: Lazy<ParameterDescriptor> = Lazy::new(|| {
    ParameterBuilder::new("uid", ValueType::String)
        .prefix(Prefix::Geo)
        .build_trusted()
});

pub static GEO_BOX: Lazy<ParameterDescriptor> = Lazy::new(|| {
    ParameterBuilder::new("box", ValueType::Box)
        .prefix(Prefix::Geo)
        .build_trusted()
});

pub static GEO_NAME: Lazy<ParameterDescriptor> = Lazy::new(|| {
    ParameterBuilder::new("name", ValueType::String)
        .prefix(Prefix::Geo)
        .build_trusted()
});

pub static GEO_LAT: Lazy<ParameterDescriptor> = Lazy::new(|| {
    ParameterBuilder::new("lat", ValueType::Double)
        .prefix(Prefix::Geo)
        .minimum_inclusive(-90)
        .maximum_inclusive(90)
        .build_trusted()
});

pub static GEO_LON: Lazy<ParameterDescriptor> = Lazy::new(|| {
    ParameterBuilder::new("lon", ValueType::Double)
        .prefix(Prefix::Geo)
        .minimum_inclusive(-180)
        .maximum_inclusive(180)
        .build_trusted()
});

pub static GEO_RADIUS: Lazy<ParameterDescriptor> = Lazy::new(|| {
    ParameterBuilder::new("radius", ValueType::Double)
        .prefix(Prefix::Geo)
        .minimum_inclusive(0)
        .build_trusted()
});

pub static TIME_START: Lazy<ParameterDescriptor> = Lazy::new(|| {
    ParameterBuilder::new("start", ValueType::Date)
        .prefix(Prefix::Time)
        .build_trusted()
});

pub static TIME_END: Lazy<ParameterDescriptor> = Lazy::new(|| {
    ParameterBuilder::new("end", ValueType::Date)
        .prefix(Prefix::Time)
        .build_trusted()
});

pub static TIME_RELATION: Lazy<ParameterDescriptor> = Lazy::new(|| {
    ParameterBuilder::new("relation", ValueType::Relation)
        .prefix(Prefix::Time)
        .build_trusted()
});

static BASIC_OPENSEARCH: Lazy<Vec<ParameterDescriptor>> =
    Lazy::new(|| vec![SEARCH_TERMS.clone(), START_INDEX.clone()]);

static GEO_TIME_OPENSEARCH: Lazy<Vec<ParameterDescriptor>> = Lazy::new(|| {
    vec![
        GEO_UID.clone(),
        GEO_BOX.clone(),
        GEO_NAME.clone(),
        GEO_LAT.clone(),
        GEO_LON.clone(),
        GEO_RADIUS.clone(),
        TIME_START.clone(),
        TIME_END.clone(),
        TIME_RELATION.clone(),
    ]
});

/// Basic OpenSearch parameters, followed by a `count` parameter limited to
/// `max_records_per_page`.
///
/// `count` always has a minimum of 0. It only gets a maximum when
/// `max_records_per_page` is positive; zero or below means no limit.
pub fn basic_open_search_parameters(max_records_per_page: i64) -> Vec<ParameterDescriptor> {
    let mut count = ParameterBuilder::new(COUNT_KEY, ValueType::Integer)
        .prefix(Prefix::Os)
        .minimum_inclusive(0);
    if max_records_per_page > 0 {
        count = count.maximum_inclusive(max_records_per_page);
    }
    debug!(max_records_per_page, "Built count parameter");

    let mut result = Vec::with_capacity(BASIC_OPENSEARCH.len() + 1);
    result.extend(BASIC_OPENSEARCH.iter().cloned());
    result.push(count.build_trusted());
    result
}

/// [`basic_open_search_parameters`] with the limit read from a
/// configuration provider.
pub fn basic_parameters_for<L: RecordsPerPageLimit + ?Sized>(
    config: &L,
) -> Vec<ParameterDescriptor> {
    basic_open_search_parameters(config.maximum_records_per_page())
}

/// The OGC Geo and Time extension parameters.
pub fn geo_time_open_search_parameters() -> &'static [ParameterDescriptor] {
    &GEO_TIME_OPENSEARCH
}

/// Basic parameters followed by the Geo/Time ones, in catalog order.
pub fn all_parameters(max_records_per_page: i64) -> Vec<ParameterDescriptor> {
    let mut all = basic_open_search_parameters(max_records_per_page);
    all.extend(geo_time_open_search_parameters().iter().cloned());
    all
}

/// Qualified name of a parameter, prefixing native OpenSearch parameters too.
pub fn qualified_name(param: &ParameterDescriptor) -> String {
    qualified_name_with(param, true)
}

/// Qualified name of a parameter.
///
/// Parameters without a prefix are returned as their bare key. Extension
/// namespaces are always rendered as `prefix:key`. The native `os` namespace
/// is only qualified when `qualify_native` is set.
pub fn qualified_name_with(param: &ParameterDescriptor, qualify_native: bool) -> String {
    match param.prefix() {
        Some(prefix) if !prefix.is_native() || qualify_native => {
            format!("{}:{}", prefix.as_str(), param.key())
        }
        _ => param.key().to_string(),
    }
}

/// The prefix of a parameter, if any.
pub fn parameter_prefix(param: &ParameterDescriptor) -> Option<&'static str> {
    param.prefix().map(|p| p.as_str())
}

/// Look up a parameter by wire name.
///
/// Accepts `prefix:key` for any parameter and the bare key for parameters
/// that have no prefix or live in the native `os` namespace.
pub fn find_parameter(
    name: &str,
    max_records_per_page: i64,
) -> Result<ParameterDescriptor, ParameterError> {
    all_parameters(max_records_per_page)
        .into_iter()
        .find(|p| qualified_name_with(p, true) == name || qualified_name_with(p, false) == name)
        .ok_or_else(|| {
            debug!(name, "No parameter matches wire name");
            ParameterError::UnknownParameter(name.to_string())
        })
}
