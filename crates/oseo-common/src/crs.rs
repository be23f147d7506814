//! Coordinate Reference System lookup by code.
//!
//! Only identification is handled here: a code string is resolved to a
//! known CRS and its axis order. No transformation math lives in this crate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Well-known CRS codes recognized by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrsCode {
    /// WGS84 Geographic (lat/lon in degrees)
    Epsg4326,
    /// Web Mercator (meters)
    Epsg3857,
    /// NAD83 Geographic
    Epsg4269,
    /// Polar Stereographic North
    Epsg3413,
    /// Polar Stereographic South
    Epsg3031,
}

impl CrsCode {
    /// Look up a CRS by its numeric EPSG code.
    pub fn from_epsg(code: u32) -> Option<Self> {
        match code {
            4326 => Some(CrsCode::Epsg4326),
            3857 | 900913 => Some(CrsCode::Epsg3857),
            4269 => Some(CrsCode::Epsg4269),
            3413 => Some(CrsCode::Epsg3413),
            3031 => Some(CrsCode::Epsg3031),
            _ => None,
        }
    }

    /// Numeric EPSG code.
    pub fn epsg(&self) -> u32 {
        match self {
            CrsCode::Epsg4326 => 4326,
            CrsCode::Epsg3857 => 3857,
            CrsCode::Epsg4269 => 4269,
            CrsCode::Epsg3413 => 3413,
            CrsCode::Epsg3031 => 3031,
        }
    }

    /// Check if this is a geographic (lat/lon) CRS.
    pub fn is_geographic(&self) -> bool {
        matches!(self, CrsCode::Epsg4326 | CrsCode::Epsg4269)
    }
}

impl fmt::Display for CrsCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EPSG:{}", self.epsg())
    }
}

/// Axis order for coordinate interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisOrder {
    /// X (longitude/easting), Y (latitude/northing)
    XY,
    /// Y (latitude/northing), X (longitude/easting)
    LatLon,
}

/// A resolved coordinate reference system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crs {
    pub code: CrsCode,
    pub axis_order: AxisOrder,
    /// The identifier the CRS was decoded from.
    pub identifier: String,
}

impl Crs {
    /// Decode a CRS identifier.
    ///
    /// Accepts formats like:
    /// - "EPSG:4326"
    /// - "urn:ogc:def:crs:EPSG:4326" and "urn:ogc:def:crs:EPSG::4326"
    /// - "http://www.opengis.net/def/crs/EPSG/0/4326"
    /// - "http://www.opengis.net/gml/srs/epsg.xml#4326"
    /// - "CRS:84" and its URN/URI forms (always longitude first)
    ///
    /// Geographic codes keep the authority's lat/lon axis order unless
    /// `longitude_first` is set.
    pub fn decode(code: &str, longitude_first: bool) -> Result<Self, CrsParseError> {
        let normalized = code.trim().to_uppercase();

        if is_crs84(&normalized) {
            return Ok(Self {
                code: CrsCode::Epsg4326,
                axis_order: AxisOrder::XY,
                identifier: code.to_string(),
            });
        }

        let number = epsg_number(&normalized)
            .ok_or_else(|| CrsParseError::InvalidCode(code.to_string()))?;
        let crs_code = CrsCode::from_epsg(number)
            .ok_or_else(|| CrsParseError::UnsupportedCrs(code.to_string()))?;

        let axis_order = if crs_code.is_geographic() && !longitude_first {
            AxisOrder::LatLon
        } else {
            AxisOrder::XY
        };

        Ok(Self {
            code: crs_code,
            axis_order,
            identifier: code.to_string(),
        })
    }

    /// OGC URN form of this CRS, e.g. "urn:ogc:def:crs:EPSG::4326".
    pub fn urn(&self) -> String {
        format!("urn:ogc:def:crs:EPSG::{}", self.code.epsg())
    }
}

fn is_crs84(normalized: &str) -> bool {
    matches!(
        normalized,
        "CRS:84"
            | "CRS84"
            | "URN:OGC:DEF:CRS:OGC:1.3:CRS84"
            | "URN:OGC:DEF:CRS:OGC::CRS84"
            | "HTTP://WWW.OPENGIS.NET/DEF/CRS/OGC/1.3/CRS84"
    )
}

/// Extract the numeric EPSG code from any of the supported identifier forms.
fn epsg_number(normalized: &str) -> Option<u32> {
    let digits = if let Some(rest) = normalized.strip_prefix("URN:OGC:DEF:CRS:EPSG:") {
        // Optional version segment: "EPSG::4326" or "EPSG:6.6:4326"
        rest.rsplit(':').next()?
    } else if let Some(rest) = normalized.strip_prefix("URN:X-OGC:DEF:CRS:EPSG:") {
        rest.rsplit(':').next()?
    } else if let Some(rest) = normalized.strip_prefix("HTTP://WWW.OPENGIS.NET/DEF/CRS/EPSG/") {
        rest.rsplit('/').next()?
    } else if let Some(rest) = normalized.strip_prefix("HTTP://WWW.OPENGIS.NET/GML/SRS/EPSG.XML#") {
        rest
    } else if let Some(rest) = normalized.strip_prefix("EPSG:") {
        rest
    } else {
        return None;
    };

    digits.parse().ok()
}

#[derive(Debug, thiserror::Error)]
pub enum CrsParseError {
    #[error("Unsupported CRS: {0}")]
    UnsupportedCrs(String),

    #[error("Invalid CRS identifier: {0}")]
    InvalidCode(String),
}
