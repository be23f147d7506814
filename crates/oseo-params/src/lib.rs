//! OpenSearch for Earth Observation - query parameter registry
//!
//! This crate declares the query parameters understood by an OpenSearch EO
//! endpoint: their names, value types, namespaces and numeric bounds. It also
//! resolves the wire name of a parameter, optionally qualified with its
//! namespace prefix.
//!
//! # Example
//!
//! ```rust
//! use oseo_params::registry::{geo_time_open_search_parameters, qualified_name_with};
//!
//! let names: Vec<String> = geo_time_open_search_parameters()
//!     .iter()
//!     .map(|p| qualified_name_with(p, false))
//!     .collect();
//! assert_eq!(names[0], "geo:uid");
//! ```

pub mod builder;
pub mod config;
pub mod crs;
pub mod descriptor;
pub mod errors;
pub mod registry;
pub mod relation;
pub mod value;

// Re-export commonly used types
pub use builder::ParameterBuilder;
pub use config::RecordsPerPageLimit;
pub use crs::{init_output_crs, output_crs, OUTPUT_CRS_CODE};
pub use descriptor::{Bounds, NumericBound, ParameterDescriptor, Prefix, ValueType};
pub use errors::ParameterError;
pub use relation::DateRelation;
pub use value::ParameterValue;

/// Namespace prefixes used in qualified parameter names
pub mod prefixes {
    /// OpenSearch native vocabulary
    pub const OS: &str = "os";
    /// OpenSearch Geo extension
    pub const GEO: &str = "geo";
    /// OpenSearch Time extension
    pub const TIME: &str = "time";
    /// Earth Observation extension
    pub const EO: &str = "eo";
}

/// Metadata keys exposed by [`ParameterDescriptor::metadata`]
pub mod metadata_keys {
    pub const PARAM_PREFIX: &str = "parameterPrefix";
    pub const MIN_INCLUSIVE: &str = "minInclusive";
    pub const MAX_INCLUSIVE: &str = "maxInclusive";
}
