//! Parameter registry error types.

use thiserror::Error;

use oseo_common::CrsParseError;

use crate::descriptor::{Bounds, NumericBound, ValueType};

/// Errors raised while building descriptors or binding values to them.
#[derive(Debug, Error)]
pub enum ParameterError {
    /// Descriptor built with an empty key.
    #[error("Parameter key must not be empty")]
    EmptyKey,

    /// Bounds set on a parameter whose type is not numeric.
    #[error("Parameter '{key}' of type {value_type} cannot carry numeric bounds")]
    BoundsOnNonNumeric { key: String, value_type: ValueType },

    /// A bound that is NaN or infinite.
    #[error("Parameter '{key}' has a non-finite bound: {bound}")]
    InvalidBound { key: String, bound: f64 },

    /// Minimum greater than maximum.
    #[error("Parameter '{key}' has minimum {min} greater than maximum {max}")]
    InvertedBounds {
        key: String,
        min: NumericBound,
        max: NumericBound,
    },

    /// Namespace prefix outside the known set.
    #[error("Unknown parameter prefix: {0}")]
    UnknownPrefix(String),

    /// No descriptor matches the requested wire name.
    #[error("Unknown parameter: {0}")]
    UnknownParameter(String),

    /// Value could not be parsed as the parameter's type.
    #[error("Invalid value for '{param}': {message}")]
    InvalidValue { param: String, message: String },

    /// Numeric value outside the parameter's inclusive range.
    #[error("Value {value} for '{param}' is outside {bounds}")]
    OutOfBounds {
        param: String,
        value: NumericBound,
        bounds: Bounds,
    },

    /// The output CRS could not be resolved.
    #[error("CRS error: {0}")]
    Crs(#[from] CrsParseError),
}

impl ParameterError {
    /// Whether the error stems from a client-supplied value rather than a
    /// malformed descriptor.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ParameterError::UnknownParameter(_)
                | ParameterError::InvalidValue { .. }
                | ParameterError::OutOfBounds { .. }
        )
    }
}
