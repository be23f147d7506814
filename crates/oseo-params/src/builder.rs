//! Fluent construction of [`ParameterDescriptor`] values.

use crate::descriptor::{NumericBound, ParameterDescriptor, Prefix, ValueType};
use crate::errors::ParameterError;

/// Accumulates a parameter's settings and emits an immutable descriptor.
///
/// ```rust
/// use oseo_params::{ParameterBuilder, Prefix, ValueType};
///
/// let lat = ParameterBuilder::new("lat", ValueType::Double)
///     .prefix(Prefix::Geo)
///     .minimum_inclusive(-90.0)
///     .maximum_inclusive(90.0)
///     .build()
///     .unwrap();
/// assert_eq!(lat.qualified_name(), "geo:lat");
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct ParameterBuilder {
    key: String,
    value_type: ValueType,
    prefix: Option<Prefix>,
    min_inclusive: Option<NumericBound>,
    max_inclusive: Option<NumericBound>,
}

impl ParameterBuilder {
    /// Start a builder; key and type are fixed from here on.
    pub fn new(key: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            key: key.into(),
            value_type,
            prefix: None,
            min_inclusive: None,
            max_inclusive: None,
        }
    }

    /// Set the namespace prefix.
    pub fn prefix(mut self, prefix: Prefix) -> Self {
        self.prefix = Some(prefix);
        self
    }

    /// Set the inclusive lower bound.
    pub fn minimum_inclusive(mut self, min: impl Into<NumericBound>) -> Self {
        self.min_inclusive = Some(min.into());
        self
    }

    /// Set the inclusive upper bound.
    pub fn maximum_inclusive(mut self, max: impl Into<NumericBound>) -> Self {
        self.max_inclusive = Some(max.into());
        self
    }

    /// Validate and emit the descriptor.
    pub fn build(self) -> Result<ParameterDescriptor, ParameterError> {
        self.validate()?;
        Ok(self.into_descriptor())
    }

    /// Emit a descriptor whose settings are known to be valid.
    ///
    /// Used for the fixed catalogs and the `count` parameter, whose bounds
    /// cannot be inverted.
    pub(crate) fn build_trusted(self) -> ParameterDescriptor {
        debug_assert!(self.validate().is_ok(), "invalid built-in parameter {}", self.key);
        self.into_descriptor()
    }

    fn validate(&self) -> Result<(), ParameterError> {
        if self.key.is_empty() {
            return Err(ParameterError::EmptyKey);
        }

        let bounds = [self.min_inclusive, self.max_inclusive];
        if !self.value_type.is_numeric() && bounds.iter().any(Option::is_some) {
            return Err(ParameterError::BoundsOnNonNumeric {
                key: self.key.clone(),
                value_type: self.value_type,
            });
        }

        for bound in bounds.into_iter().flatten() {
            if let NumericBound::Double(v) = bound {
                if !v.is_finite() {
                    return Err(ParameterError::InvalidBound {
                        key: self.key.clone(),
                        bound: v,
                    });
                }
            }
        }

        if let (Some(min), Some(max)) = (self.min_inclusive, self.max_inclusive) {
            if min.compare(&max) == Some(std::cmp::Ordering::Greater) {
                return Err(ParameterError::InvertedBounds {
                    key: self.key.clone(),
                    min,
                    max,
                });
            }
        }

        Ok(())
    }

    fn into_descriptor(self) -> ParameterDescriptor {
        ParameterDescriptor {
            key: self.key,
            value_type: self.value_type,
            prefix: self.prefix,
            min_inclusive: self.min_inclusive,
            max_inclusive: self.max_inclusive,
        }
    }
}
