//! Output coordinate reference system shared by query builders.

use once_cell::sync::OnceCell;
use oseo_common::{Crs, CrsParseError};
use tracing::info;

/// WGS84, in the authority's lat/lon axis order.
pub const OUTPUT_CRS_CODE: &str = "urn:ogc:def:crs:EPSG:4326";

static OUTPUT_CRS: OnceCell<Crs> = OnceCell::new();

/// Resolve the output CRS once.
///
/// Call at startup so a failed lookup can be reported before serving.
/// Later calls return the cached value.
pub fn init_output_crs() -> Result<&'static Crs, CrsParseError> {
    OUTPUT_CRS.get_or_try_init(|| {
        let crs = Crs::decode(OUTPUT_CRS_CODE, false)?;
        info!(crs = %crs.code, axis_order = ?crs.axis_order, "Resolved output CRS");
        Ok(crs)
    })
}

/// The output CRS.
///
/// # Panics
///
/// Panics if the CRS cannot be resolved; the process must not continue
/// without it.
pub fn output_crs() -> &'static Crs {
    match init_output_crs() {
        Ok(crs) => crs,
        Err(e) => panic!("Unexpected error decoding WGS84 in lat/lon order: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oseo_common::{AxisOrder, CrsCode};

    #[test]
    fn test_output_crs_is_wgs84_lat_lon() {
        let crs = output_crs();
        assert_eq!(crs.code, CrsCode::Epsg4326);
        assert_eq!(crs.axis_order, AxisOrder::LatLon);
        assert_eq!(crs.identifier, OUTPUT_CRS_CODE);
    }

    #[test]
    fn test_output_crs_is_cached() {
        let a = init_output_crs().unwrap();
        let b = init_output_crs().unwrap();
        assert!(std::ptr::eq(a, b));
    }
}
