//! Geographic envelope used by the `geo:box` search parameter.

use serde::{Deserialize, Serialize};

/// A geographic bounding box in EPSG:4326 degrees, longitude first.
///
/// `min_x` may be greater than `max_x`, in which case the box crosses the
/// antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// The whole world.
    pub fn world() -> Self {
        Self::new(-180.0, -90.0, 180.0, 90.0)
    }

    /// Parse a `geo:box` value: "west,south,east,north".
    pub fn from_geo_box(s: &str) -> Result<Self, BboxParseError> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(BboxParseError::InvalidFormat(s.to_string()));
        }

        let mut values = [0.0f64; 4];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part
                .parse()
                .map_err(|_| BboxParseError::InvalidNumber(part.to_string()))?;
            if !slot.is_finite() {
                return Err(BboxParseError::InvalidNumber(part.to_string()));
            }
        }
        let [west, south, east, north] = values;

        for lon in [west, east] {
            if !(-180.0..=180.0).contains(&lon) {
                return Err(BboxParseError::OutOfRange(format!(
                    "longitude {} outside [-180, 180]",
                    lon
                )));
            }
        }
        for lat in [south, north] {
            if !(-90.0..=90.0).contains(&lat) {
                return Err(BboxParseError::OutOfRange(format!(
                    "latitude {} outside [-90, 90]",
                    lat
                )));
            }
        }
        if south > north {
            return Err(BboxParseError::OutOfRange(format!(
                "south {} is above north {}",
                south, north
            )));
        }

        Ok(Self::new(west, south, east, north))
    }

    /// Whether the box wraps across the antimeridian.
    pub fn crosses_dateline(&self) -> bool {
        self.min_x > self.max_x
    }

    /// Width in degrees, accounting for antimeridian wrapping.
    pub fn width(&self) -> f64 {
        if self.crosses_dateline() {
            360.0 - (self.min_x - self.max_x)
        } else {
            self.max_x - self.min_x
        }
    }

    /// Height in degrees.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Check if a point is contained within this bbox.
    pub fn contains_point(&self, lon: f64, lat: f64) -> bool {
        let in_lat = lat >= self.min_y && lat <= self.max_y;
        let in_lon = if self.crosses_dateline() {
            lon >= self.min_x || lon <= self.max_x
        } else {
            lon >= self.min_x && lon <= self.max_x
        };
        in_lat && in_lon
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BboxParseError {
    #[error("Invalid box format: {0}. Expected 'west,south,east,north'")]
    InvalidFormat(String),

    #[error("Invalid number in box: {0}")]
    InvalidNumber(String),

    #[error("Box out of range: {0}")]
    OutOfRange(String),
}
