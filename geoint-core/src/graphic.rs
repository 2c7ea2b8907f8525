//! Graphics: a geometry with its attribute map.

use serde_json::{Map, Value};

use crate::Geometry;

/// Attribute map of a graphic. Values pass through untouched.
pub type Attributes = Map<String, Value>;

/// Flattened view of one graphic handed to scripting hosts.
pub type Record = Map<String, Value>;

/// Record key carrying the geometry's engine JSON.
pub const GEOMETRY_ATTRIBUTE: &str = "geometry";

/// A drawable geometry plus its attributes.
///
/// # Examples
/// ```
/// use geoint_core::{Attributes, Geometry, Graphic, SpatialReference};
/// use serde_json::json;
///
/// let mut attributes = Attributes::new();
/// attributes.insert("name".into(), json!("Brandenburg Gate"));
/// let graphic = Graphic::with_attributes(
///     Geometry::point(13.377, 52.516, SpatialReference::WGS84),
///     attributes,
/// );
/// let record = graphic.to_record();
/// assert_eq!(record.get("name"), Some(&json!("Brandenburg Gate")));
/// assert!(record.contains_key("geometry"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Graphic {
    geometry: Geometry,
    attributes: Attributes,
}

impl Graphic {
    /// A graphic without attributes.
    #[must_use]
    pub fn new(geometry: Geometry) -> Self {
        Self::with_attributes(geometry, Attributes::new())
    }

    /// A graphic carrying the given attributes.
    #[must_use]
    pub const fn with_attributes(geometry: Geometry, attributes: Attributes) -> Self {
        Self {
            geometry,
            attributes,
        }
    }

    /// The graphic's geometry.
    #[must_use]
    pub const fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// The graphic's attributes.
    #[must_use]
    pub const fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Mutable access to the attributes.
    pub const fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// Flatten the graphic into a single record.
    ///
    /// The geometry's engine JSON is stored as a string under
    /// [`GEOMETRY_ATTRIBUTE`], alongside the attributes. An attribute already
    /// named `geometry` is replaced.
    #[must_use]
    pub fn to_record(&self) -> Record {
        let mut record = self.attributes.clone();
        record.insert(
            GEOMETRY_ATTRIBUTE.to_owned(),
            Value::String(self.geometry.to_json()),
        );
        record
    }
}
