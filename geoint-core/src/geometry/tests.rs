//! Unit coverage for geometry construction and the engine JSON codec.
#![expect(
    clippy::expect_used,
    reason = "tests use expect for readable failures"
)]

use geo::Coord;
use rstest::rstest;
use serde_json::json;

use super::*;

#[rstest]
fn point_is_never_empty() {
    let point = Geometry::point(0.0, 0.0, SpatialReference::WGS84);
    assert!(!point.is_empty());
    assert_eq!(point.vertex_count(), 1);
}

#[rstest]
fn polyline_with_only_empty_paths_is_empty() {
    let polyline = Geometry::new(
        Shape::Polyline(MultiLineString::new(vec![
            LineString::new(Vec::new()),
            LineString::new(Vec::new()),
        ])),
        SpatialReference::WGS84,
    );
    assert!(polyline.is_empty());
}

#[rstest]
fn polygon_without_rings_is_empty() {
    let polygon = Geometry::polygon(Vec::new(), SpatialReference::WGS84);
    assert!(polygon.is_empty());
    assert_eq!(polygon.kind(), GeometryKind::Polygon);
}

#[rstest]
fn polygon_counts_vertices_across_rings() {
    let ring = vec![
        Coord { x: 0.0, y: 0.0 },
        Coord { x: 1.0, y: 0.0 },
        Coord { x: 1.0, y: 1.0 },
        Coord { x: 0.0, y: 0.0 },
    ];
    let polygon = Geometry::polygon(vec![ring.clone(), ring], SpatialReference::WGS84);
    assert_eq!(polygon.vertex_count(), 8);
}

#[rstest]
fn point_encodes_ordinates_and_reference() {
    let point = Geometry::point(7.5, 51.25, SpatialReference::WGS84);
    assert_eq!(
        point.to_json_value(),
        json!({"x": 7.5, "y": 51.25, "spatialReference": {"wkid": 4326}})
    );
}

#[rstest]
fn polyline_encodes_paths() {
    let polyline = Geometry::polyline(
        vec![Coord { x: 0.0, y: 1.0 }, Coord { x: 2.0, y: 3.0 }],
        SpatialReference::WEB_MERCATOR,
    );
    assert_eq!(
        polyline.to_json_value(),
        json!({"paths": [[[0.0, 1.0], [2.0, 3.0]]], "spatialReference": {"wkid": 3857}})
    );
}

#[rstest]
#[case(r#"{"x": 1, "y": 2}"#, GeometryKind::Point)]
#[case(r#"{"points": [[1, 2], [3, 4]]}"#, GeometryKind::Multipoint)]
#[case(r#"{"paths": [[[1, 2], [3, 4]]]}"#, GeometryKind::Polyline)]
#[case(r#"{"rings": [[[0, 0], [1, 0], [1, 1], [0, 0]]]}"#, GeometryKind::Polygon)]
fn decodes_each_shape(#[case] text: &str, #[case] expected: GeometryKind) {
    let geometry = Geometry::from_json(text).expect("decode geometry");
    assert_eq!(geometry.kind(), expected);
    assert_eq!(geometry.spatial_reference(), SpatialReference::WGS84);
}

#[rstest]
fn decodes_explicit_spatial_reference() {
    let geometry = Geometry::from_json(r#"{"x": 1, "y": 2, "spatialReference": {"wkid": 3857}}"#)
        .expect("decode geometry");
    assert_eq!(geometry.spatial_reference(), SpatialReference::WEB_MERCATOR);
}

#[rstest]
fn drops_third_ordinate() {
    let geometry =
        Geometry::from_json(r#"{"points": [[1, 2, 99]]}"#).expect("decode multipoint");
    match geometry.shape() {
        Shape::Multipoint(points) => {
            let first = points.0.first().expect("one point");
            assert_eq!((first.x(), first.y()), (1.0, 2.0));
        }
        other => panic!("expected multipoint, got {other:?}"),
    }
}

#[rstest]
fn rejects_malformed_text() {
    let err = Geometry::from_json("{not json").expect_err("malformed text");
    assert!(matches!(err, GeometryJsonError::Parse { .. }));
}

#[rstest]
#[case(r#"{"type": "Point", "coordinates": [1, 2]}"#)]
#[case(r#"[1, 2]"#)]
#[case(r#"{"x": "east", "y": 2}"#)]
fn rejects_unknown_shapes(#[case] text: &str) {
    let err = Geometry::from_json(text).expect_err("unknown shape");
    assert!(matches!(err, GeometryJsonError::UnrecognizedShape { .. }));
}

#[rstest]
fn rejects_short_positions() {
    let err = Geometry::from_json(r#"{"paths": [[[1, 2], [3]]]}"#).expect_err("short position");
    match err {
        GeometryJsonError::ShortPosition {
            position,
            ordinates,
        } => {
            assert_eq!(position, 1);
            assert_eq!(ordinates, 1);
        }
        other => panic!("expected short position, got {other:?}"),
    }
}
