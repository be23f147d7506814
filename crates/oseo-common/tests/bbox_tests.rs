//! Tests for `geo:box` envelope parsing and geometry helpers.

use oseo_common::bbox::{BboxParseError, BoundingBox};

// ============================================================================
// from_geo_box tests
// ============================================================================

#[test]
fn test_parse_geo_box_integer() {
    let bbox = BoundingBox::from_geo_box("0,0,10,10").unwrap();
    assert_eq!(bbox, BoundingBox::new(0.0, 0.0, 10.0, 10.0));
}

#[test]
fn test_parse_geo_box_floating() {
    let bbox = BoundingBox::from_geo_box("-125.5,24.75,-66.25,50.125").unwrap();
    assert_eq!(bbox.min_x, -125.5);
    assert_eq!(bbox.min_y, 24.75);
    assert_eq!(bbox.max_x, -66.25);
    assert_eq!(bbox.max_y, 50.125);
}

#[test]
fn test_parse_geo_box_whitespace() {
    let bbox = BoundingBox::from_geo_box(" -10 , -5 , 10 , 5 ").unwrap();
    assert_eq!(bbox, BoundingBox::new(-10.0, -5.0, 10.0, 5.0));
}

#[test]
fn test_parse_geo_box_world() {
    let bbox = BoundingBox::from_geo_box("-180,-90,180,90").unwrap();
    assert_eq!(bbox, BoundingBox::world());
    assert_eq!(bbox.width(), 360.0);
    assert_eq!(bbox.height(), 180.0);
}

#[test]
fn test_parse_geo_box_too_few() {
    let result = BoundingBox::from_geo_box("0,0,10");
    assert!(matches!(result, Err(BboxParseError::InvalidFormat(_))));
}

#[test]
fn test_parse_geo_box_too_many() {
    let result = BoundingBox::from_geo_box("0,0,10,10,20");
    assert!(matches!(result, Err(BboxParseError::InvalidFormat(_))));
}

#[test]
fn test_parse_geo_box_empty_string() {
    let result = BoundingBox::from_geo_box("");
    assert!(matches!(result, Err(BboxParseError::InvalidFormat(_))));
}

#[test]
fn test_parse_geo_box_invalid_number() {
    let result = BoundingBox::from_geo_box("0,abc,10,10");
    assert!(matches!(result, Err(BboxParseError::InvalidNumber(ref s)) if s == "abc"));
}

#[test]
fn test_parse_geo_box_rejects_nan() {
    let result = BoundingBox::from_geo_box("NaN,0,10,10");
    assert!(matches!(result, Err(BboxParseError::InvalidNumber(_))));
}

#[test]
fn test_parse_geo_box_longitude_out_of_range() {
    let result = BoundingBox::from_geo_box("-190,0,10,10");
    assert!(matches!(result, Err(BboxParseError::OutOfRange(_))));
}

#[test]
fn test_parse_geo_box_latitude_out_of_range() {
    let result = BoundingBox::from_geo_box("0,-91,10,10");
    assert!(matches!(result, Err(BboxParseError::OutOfRange(_))));
}

#[test]
fn test_parse_geo_box_south_above_north() {
    let result = BoundingBox::from_geo_box("0,20,10,10");
    assert!(matches!(result, Err(BboxParseError::OutOfRange(_))));
}

// ============================================================================
// Antimeridian tests
// ============================================================================

#[test]
fn test_dateline_box_accepted() {
    let bbox = BoundingBox::from_geo_box("179,-1,-179,1").unwrap();
    assert!(bbox.crosses_dateline());
    assert_eq!(bbox.width(), 2.0);
}

#[test]
fn test_dateline_contains() {
    let bbox = BoundingBox::new(170.0, -10.0, -170.0, 10.0);
    assert!(bbox.contains_point(180.0, 0.0));
    assert!(bbox.contains_point(-180.0, 0.0));
    assert!(!bbox.contains_point(-169.0, 0.0));
    assert!(!bbox.contains_point(175.0, 11.0));
}

// ============================================================================
// contains_point tests
// ============================================================================

#[test]
fn test_contains_point_on_edge() {
    let bbox = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
    assert!(bbox.contains_point(0.0, 5.0));
    assert!(bbox.contains_point(10.0, 10.0));
    assert!(!bbox.contains_point(10.1, 5.0));
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_bbox_serializes_fields() {
    let bbox = BoundingBox::new(-10.0, -5.0, 10.0, 5.0);
    let json = serde_json::to_value(bbox).unwrap();
    assert_eq!(json["min_x"], -10.0);
    assert_eq!(json["max_y"], 5.0);
}
