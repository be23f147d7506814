//! Common geospatial types shared by the OpenSearch EO parameter crates.

pub mod bbox;
pub mod crs;
pub mod time;

pub use bbox::{BboxParseError, BoundingBox};
pub use crs::{AxisOrder, Crs, CrsCode, CrsParseError};
pub use time::{parse_iso8601, TimeParseError};
