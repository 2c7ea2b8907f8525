//! Geometry classification: GeoJSON type to bucket, coordinates to shapes.

use std::fmt;
use std::str::FromStr;

use geo::{Coord, LineString, MultiLineString, MultiPoint, Point};
use geoint_core::{Geometry, Shape, SpatialReference};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// The three output collections a feature can land in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    /// Points and multipoints.
    Points,
    /// Lines and multi-lines.
    Lines,
    /// Polygons and multi-polygons.
    Areas,
}

impl Bucket {
    /// Every bucket, in attach order.
    pub const ALL: [Self; 3] = [Self::Points, Self::Lines, Self::Areas];

    /// Map a GeoJSON geometry type to its bucket.
    ///
    /// Returns `None` for `GeometryCollection` and unknown types.
    ///
    /// # Examples
    /// ```
    /// use geoint_data::geojson::Bucket;
    ///
    /// assert_eq!(Bucket::for_geometry_type("MultiLineString"), Some(Bucket::Lines));
    /// assert_eq!(Bucket::for_geometry_type("GeometryCollection"), None);
    /// ```
    #[must_use]
    pub fn for_geometry_type(geometry_type: &str) -> Option<Self> {
        match geometry_type {
            "Point" | "MultiPoint" => Some(Self::Points),
            "LineString" | "MultiLineString" => Some(Self::Lines),
            "Polygon" | "MultiPolygon" => Some(Self::Areas),
            _ => None,
        }
    }

    /// Lower-case name of the bucket.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Points => "points",
            Self::Lines => "lines",
            Self::Areas => "areas",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Bucket`] name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown bucket {0:?}, expected points, lines or areas")]
pub struct BucketParseError(pub String);

impl FromStr for Bucket {
    type Err = BucketParseError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "points" => Ok(Self::Points),
            "lines" => Ok(Self::Lines),
            "areas" => Ok(Self::Areas),
            other => Err(BucketParseError(other.to_owned())),
        }
    }
}

/// Feature-level failures. The feature is skipped; the load carries on.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FeatureError {
    /// The geometry type was missing or is not drawable.
    #[error("{}", describe_unrecognized(.type_name.as_deref()))]
    UnrecognizedGeometryType {
        /// The rejected type, when one was present.
        type_name: Option<String>,
    },
    /// The geometry had no coordinates.
    #[error("{type_name} geometry has no coordinates")]
    EmptyGeometry {
        /// The GeoJSON type of the geometry.
        type_name: String,
    },
    /// The coordinates could not be decoded.
    #[error("{type_name} geometry is malformed: {reason}")]
    MalformedGeometry {
        /// The GeoJSON type of the geometry.
        type_name: String,
        /// Why decoding failed.
        reason: String,
    },
}

fn describe_unrecognized(type_name: Option<&str>) -> String {
    type_name.map_or_else(
        || "feature has no geometry type".to_owned(),
        |name| format!("geometry type {name:?} is not supported"),
    )
}

/// Read a feature's geometry type and decide its bucket.
///
/// # Errors
/// Returns [`FeatureError::UnrecognizedGeometryType`] when the feature has no
/// `geometry.type` string or the type has no bucket.
pub fn classify_feature(feature: &Value) -> Result<Bucket, FeatureError> {
    let type_name = feature
        .get("geometry")
        .and_then(|geometry| geometry.get("type"))
        .and_then(Value::as_str)
        .ok_or(FeatureError::UnrecognizedGeometryType { type_name: None })?;
    Bucket::for_geometry_type(type_name).ok_or_else(|| FeatureError::UnrecognizedGeometryType {
        type_name: Some(type_name.to_owned()),
    })
}

/// Convert a GeoJSON geometry object into an engine geometry.
///
/// Points and multipoints keep their kind; lines become single-path
/// polylines; multi-lines keep one path per line; polygons keep their rings
/// and multi-polygons contribute all rings of all members in order. Empty
/// positions and parts are dropped before decoding; if nothing is left the
/// geometry is reported empty.
///
/// # Errors
/// Returns [`FeatureError`] for unknown types, empty coordinates, or
/// coordinates that are not arrays of numbers.
pub fn convert_geometry(
    geometry: &Value,
    spatial_reference: SpatialReference,
) -> Result<Geometry, FeatureError> {
    let type_name = geometry
        .get("type")
        .and_then(Value::as_str)
        .ok_or(FeatureError::UnrecognizedGeometryType { type_name: None })?;
    if Bucket::for_geometry_type(type_name).is_none() {
        return Err(FeatureError::UnrecognizedGeometryType {
            type_name: Some(type_name.to_owned()),
        });
    }
    let mut pruned = geometry.clone();
    if let Some(coordinates) = pruned.get_mut("coordinates") {
        drop_empty_parts(coordinates);
        if matches!(coordinates, Value::Array(items) if items.is_empty()) {
            return Err(empty(type_name));
        }
    }

    let decoded = geojson::Geometry::from_json_value(pruned)
        .map_err(|err| malformed(type_name, err.to_string()))?;
    let shape = shape_from_geojson(type_name, decoded.value)?;
    let converted = Geometry::new(shape, spatial_reference);
    if converted.is_empty() {
        return Err(empty(type_name));
    }
    Ok(converted)
}

/// Remove empty positions and parts, innermost first.
fn drop_empty_parts(coordinates: &mut Value) {
    if let Value::Array(items) = coordinates {
        for item in items.iter_mut() {
            drop_empty_parts(item);
        }
        items.retain(|item| !matches!(item, Value::Array(inner) if inner.is_empty()));
    }
}

fn shape_from_geojson(type_name: &str, value: geojson::Value) -> Result<Shape, FeatureError> {
    match value {
        geojson::Value::Point(position) => {
            let coord = to_coord(type_name, &position)?;
            Ok(Shape::Point(Point::from(coord)))
        }
        geojson::Value::MultiPoint(positions) => {
            let coords = to_coords(type_name, &positions)?;
            Ok(Shape::Multipoint(MultiPoint::new(
                coords.into_iter().map(Point::from).collect(),
            )))
        }
        geojson::Value::LineString(positions) => {
            let path = to_line(type_name, &positions)?;
            Ok(Shape::Polyline(MultiLineString::new(vec![path])))
        }
        geojson::Value::MultiLineString(lines) => {
            let paths = to_parts(type_name, lines.iter())?;
            Ok(Shape::Polyline(MultiLineString::new(paths)))
        }
        geojson::Value::Polygon(rings) => Ok(Shape::Polygon(to_parts(type_name, rings.iter())?)),
        geojson::Value::MultiPolygon(polygons) => Ok(Shape::Polygon(to_parts(
            type_name,
            polygons.iter().flatten(),
        )?)),
        geojson::Value::GeometryCollection(_) => Err(FeatureError::UnrecognizedGeometryType {
            type_name: Some(type_name.to_owned()),
        }),
    }
}

/// Convert each part, dropping the empty ones.
fn to_parts<'a>(
    type_name: &str,
    parts: impl Iterator<Item = &'a Vec<Vec<f64>>>,
) -> Result<Vec<LineString<f64>>, FeatureError> {
    let mut lines = Vec::new();
    for part in parts {
        let line = to_line(type_name, part)?;
        if !line.0.is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

fn to_line(type_name: &str, positions: &[Vec<f64>]) -> Result<LineString<f64>, FeatureError> {
    to_coords(type_name, positions).map(LineString::new)
}

fn to_coords(type_name: &str, positions: &[Vec<f64>]) -> Result<Vec<Coord<f64>>, FeatureError> {
    positions
        .iter()
        .map(|position| to_coord(type_name, position))
        .collect()
}

fn to_coord(type_name: &str, position: &[f64]) -> Result<Coord<f64>, FeatureError> {
    match position {
        [x, y, ..] if x.is_finite() && y.is_finite() => Ok(Coord { x: *x, y: *y }),
        [_, _, ..] => Err(malformed(type_name, "position is not finite".to_owned())),
        _ => Err(malformed(
            type_name,
            "position has fewer than two ordinates".to_owned(),
        )),
    }
}

fn empty(type_name: &str) -> FeatureError {
    FeatureError::EmptyGeometry {
        type_name: type_name.to_owned(),
    }
}

fn malformed(type_name: &str, reason: String) -> FeatureError {
    FeatureError::MalformedGeometry {
        type_name: type_name.to_owned(),
        reason,
    }
}
