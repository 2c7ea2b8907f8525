//! Engine-native geometries.
//!
//! The rendering engine understands four shapes. GeoJSON's seven geometry
//! types collapse onto them: lines and multi-lines both become polylines made
//! of paths, polygons and multi-polygons both become a flat list of rings.
//!
//! Coordinates are stored with `x = longitude` and `y = latitude` when the
//! spatial reference is geographic.

use geo::{Coord, LineString, MultiLineString, MultiPoint, Point};

use crate::SpatialReference;

mod json;

pub use json::GeometryJsonError;

/// The four geometry kinds the engine can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    /// A single location.
    Point,
    /// An unordered set of locations.
    Multipoint,
    /// One or more paths.
    Polyline,
    /// One or more rings.
    Polygon,
}

impl GeometryKind {
    /// Engine name of the kind, as used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Point => "point",
            Self::Multipoint => "multipoint",
            Self::Polyline => "polyline",
            Self::Polygon => "polygon",
        }
    }
}

/// Coordinate payload of a [`Geometry`].
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A single location.
    Point(Point<f64>),
    /// Several locations drawn with one symbol.
    Multipoint(MultiPoint<f64>),
    /// Paths; each path is drawn as a connected line.
    Polyline(MultiLineString<f64>),
    /// Rings; exterior and interior rings share one list as the engine
    /// expects them.
    Polygon(Vec<LineString<f64>>),
}

/// A shape bound to the spatial reference its coordinates are expressed in.
///
/// # Examples
/// ```
/// use geoint_core::{Geometry, GeometryKind, SpatialReference};
///
/// let point = Geometry::point(13.4, 52.5, SpatialReference::WGS84);
/// assert_eq!(point.kind(), GeometryKind::Point);
/// assert!(!point.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    shape: Shape,
    spatial_reference: SpatialReference,
}

impl Geometry {
    /// Bind a shape to a spatial reference.
    #[must_use]
    pub const fn new(shape: Shape, spatial_reference: SpatialReference) -> Self {
        Self {
            shape,
            spatial_reference,
        }
    }

    /// Build a point geometry from raw ordinates.
    #[must_use]
    pub fn point(x: f64, y: f64, spatial_reference: SpatialReference) -> Self {
        Self::new(Shape::Point(Point::new(x, y)), spatial_reference)
    }

    /// Build a polyline with a single path.
    #[must_use]
    pub fn polyline(path: Vec<Coord<f64>>, spatial_reference: SpatialReference) -> Self {
        Self::new(
            Shape::Polyline(MultiLineString::new(vec![LineString::new(path)])),
            spatial_reference,
        )
    }

    /// Build a polygon from its rings.
    #[must_use]
    pub fn polygon(rings: Vec<Vec<Coord<f64>>>, spatial_reference: SpatialReference) -> Self {
        Self::new(
            Shape::Polygon(rings.into_iter().map(LineString::new).collect()),
            spatial_reference,
        )
    }

    /// The coordinate payload.
    #[must_use]
    pub const fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Consume the geometry, returning its coordinate payload.
    #[must_use]
    pub fn into_shape(self) -> Shape {
        self.shape
    }

    /// The reference the coordinates are expressed in.
    #[must_use]
    pub const fn spatial_reference(&self) -> SpatialReference {
        self.spatial_reference
    }

    /// Which of the four engine kinds this geometry is.
    #[must_use]
    pub const fn kind(&self) -> GeometryKind {
        match self.shape {
            Shape::Point(_) => GeometryKind::Point,
            Shape::Multipoint(_) => GeometryKind::Multipoint,
            Shape::Polyline(_) => GeometryKind::Polyline,
            Shape::Polygon(_) => GeometryKind::Polygon,
        }
    }

    /// Report whether the geometry has nothing to draw.
    ///
    /// A point is never empty. Multi-part shapes are empty when they have no
    /// parts or when every part has no coordinates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match &self.shape {
            Shape::Point(_) => false,
            Shape::Multipoint(points) => points.0.is_empty(),
            Shape::Polyline(paths) => paths.iter().all(|path| path.0.is_empty()),
            Shape::Polygon(rings) => rings.iter().all(|ring| ring.0.is_empty()),
        }
    }

    /// Number of vertices across all parts.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        match &self.shape {
            Shape::Point(_) => 1,
            Shape::Multipoint(points) => points.0.len(),
            Shape::Polyline(paths) => paths.iter().map(|path| path.0.len()).sum(),
            Shape::Polygon(rings) => rings.iter().map(|ring| ring.0.len()).sum(),
        }
    }
}

#[cfg(test)]
mod tests;
