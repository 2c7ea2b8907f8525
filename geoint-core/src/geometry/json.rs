//! Engine JSON codec for [`Geometry`].
//!
//! The dialect is the rendering engine's own:
//! `{"x":..,"y":..}` for points, `{"points":[..]}` for multipoints,
//! `{"paths":[..]}` for polylines and `{"rings":[..]}` for polygons, each with
//! a `spatialReference` member.

use geo::{Coord, LineString, MultiLineString, MultiPoint, Point};
use serde::Deserialize;
use serde_json::{Value, json};
use thiserror::Error;

use super::{Geometry, Shape};
use crate::SpatialReference;

/// Errors returned when decoding engine geometry JSON.
#[derive(Debug, Error)]
pub enum GeometryJsonError {
    /// The text was not JSON at all.
    #[error("geometry JSON is not well-formed: {source}")]
    Parse {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The JSON did not match any of the four geometry shapes.
    #[error("JSON value is not a point, multipoint, polyline or polygon: {source}")]
    UnrecognizedShape {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// A position carried fewer than two ordinates.
    #[error("position {position} has {ordinates} ordinate(s), expected at least two")]
    ShortPosition {
        /// Index of the offending position within its part.
        position: usize,
        /// Number of ordinates found.
        ordinates: usize,
    },
}

type Position = Vec<f64>;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GeometryJson {
    Point {
        x: f64,
        y: f64,
        #[serde(rename = "spatialReference", default)]
        spatial_reference: Option<SpatialReference>,
    },
    Multipoint {
        points: Vec<Position>,
        #[serde(rename = "spatialReference", default)]
        spatial_reference: Option<SpatialReference>,
    },
    Polyline {
        paths: Vec<Vec<Position>>,
        #[serde(rename = "spatialReference", default)]
        spatial_reference: Option<SpatialReference>,
    },
    Polygon {
        rings: Vec<Vec<Position>>,
        #[serde(rename = "spatialReference", default)]
        spatial_reference: Option<SpatialReference>,
    },
}

impl Geometry {
    /// Decode a geometry from engine JSON text.
    ///
    /// A missing `spatialReference` defaults to WGS84. Ordinates beyond the
    /// second are ignored.
    ///
    /// # Errors
    /// Returns [`GeometryJsonError`] when the text is not JSON, does not match
    /// a known shape, or holds a position with fewer than two ordinates.
    ///
    /// # Examples
    /// ```
    /// use geoint_core::{Geometry, GeometryKind};
    ///
    /// # fn main() -> Result<(), geoint_core::GeometryJsonError> {
    /// let geometry = Geometry::from_json(r#"{"paths":[[[0,0],[1,1]]]}"#)?;
    /// assert_eq!(geometry.kind(), GeometryKind::Polyline);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_json(text: &str) -> Result<Self, GeometryJsonError> {
        let value: Value =
            serde_json::from_str(text).map_err(|source| GeometryJsonError::Parse { source })?;
        Self::from_json_value(value)
    }

    /// Decode a geometry from an already parsed JSON value.
    ///
    /// # Errors
    /// See [`Geometry::from_json`].
    pub fn from_json_value(value: Value) -> Result<Self, GeometryJsonError> {
        let decoded: GeometryJson = serde_json::from_value(value)
            .map_err(|source| GeometryJsonError::UnrecognizedShape { source })?;
        match decoded {
            GeometryJson::Point {
                x,
                y,
                spatial_reference,
            } => Ok(Self::new(
                Shape::Point(Point::new(x, y)),
                spatial_reference.unwrap_or_default(),
            )),
            GeometryJson::Multipoint {
                points,
                spatial_reference,
            } => {
                let coords = positions_to_coords(&points)?;
                Ok(Self::new(
                    Shape::Multipoint(MultiPoint::new(
                        coords.into_iter().map(Point::from).collect(),
                    )),
                    spatial_reference.unwrap_or_default(),
                ))
            }
            GeometryJson::Polyline {
                paths,
                spatial_reference,
            } => Ok(Self::new(
                Shape::Polyline(MultiLineString::new(parts_to_lines(&paths)?)),
                spatial_reference.unwrap_or_default(),
            )),
            GeometryJson::Polygon {
                rings,
                spatial_reference,
            } => Ok(Self::new(
                Shape::Polygon(parts_to_lines(&rings)?),
                spatial_reference.unwrap_or_default(),
            )),
        }
    }

    /// Encode the geometry as an engine JSON value.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        let spatial_reference = json!({ "wkid": self.spatial_reference.wkid });
        match &self.shape {
            Shape::Point(point) => json!({
                "x": point.x(),
                "y": point.y(),
                "spatialReference": spatial_reference,
            }),
            Shape::Multipoint(points) => json!({
                "points": points.iter().map(|point| [point.x(), point.y()]).collect::<Vec<_>>(),
                "spatialReference": spatial_reference,
            }),
            Shape::Polyline(paths) => json!({
                "paths": paths.iter().map(line_positions).collect::<Vec<_>>(),
                "spatialReference": spatial_reference,
            }),
            Shape::Polygon(rings) => json!({
                "rings": rings.iter().map(line_positions).collect::<Vec<_>>(),
                "spatialReference": spatial_reference,
            }),
        }
    }

    /// Encode the geometry as compact engine JSON text.
    ///
    /// # Examples
    /// ```
    /// use geoint_core::{Geometry, SpatialReference};
    ///
    /// let point = Geometry::point(1.0, 2.0, SpatialReference::WGS84);
    /// let json = point.to_json();
    /// assert!(json.contains(r#""spatialReference":{"wkid":4326}"#));
    /// assert_eq!(Geometry::from_json(&json).ok(), Some(point));
    /// ```
    #[must_use]
    pub fn to_json(&self) -> String {
        self.to_json_value().to_string()
    }
}

fn line_positions(line: &LineString<f64>) -> Vec<[f64; 2]> {
    line.coords().map(|coord| [coord.x, coord.y]).collect()
}

fn parts_to_lines(parts: &[Vec<Position>]) -> Result<Vec<LineString<f64>>, GeometryJsonError> {
    parts
        .iter()
        .map(|part| positions_to_coords(part).map(LineString::new))
        .collect()
}

fn positions_to_coords(positions: &[Position]) -> Result<Vec<Coord<f64>>, GeometryJsonError> {
    positions
        .iter()
        .enumerate()
        .map(|(index, position)| match position.as_slice() {
            [x, y, ..] => Ok(Coord { x: *x, y: *y }),
            short => Err(GeometryJsonError::ShortPosition {
                position: index,
                ordinates: short.len(),
            }),
        })
        .collect()
}
