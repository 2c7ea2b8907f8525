//! Turn GeoJSON features into classified graphics.

use geoint_core::{Attributes, Graphic, SpatialReference};
use serde::Serialize;
use serde_json::Value;

use super::classify::{Bucket, FeatureError, classify_feature, convert_geometry};
use crate::diagnostics::{Diagnostic, DiagnosticSink};

/// Graphics produced per bucket by one pass over a feature list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BucketCounts {
    /// Graphics routed to the points overlay.
    pub points: usize,
    /// Graphics routed to the lines overlay.
    pub lines: usize,
    /// Graphics routed to the areas overlay.
    pub areas: usize,
}

impl BucketCounts {
    /// Count for one bucket.
    #[must_use]
    pub const fn get(&self, bucket: Bucket) -> usize {
        match bucket {
            Bucket::Points => self.points,
            Bucket::Lines => self.lines,
            Bucket::Areas => self.areas,
        }
    }

    /// Sum over all buckets.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.points + self.lines + self.areas
    }

    const fn increment(&mut self, bucket: Bucket) {
        match bucket {
            Bucket::Points => self.points += 1,
            Bucket::Lines => self.lines += 1,
            Bucket::Areas => self.areas += 1,
        }
    }
}

/// Builds graphics in a fixed spatial reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphicsFactory {
    spatial_reference: SpatialReference,
}

impl GraphicsFactory {
    /// A factory tagging every geometry with `spatial_reference`.
    #[must_use]
    pub const fn new(spatial_reference: SpatialReference) -> Self {
        Self { spatial_reference }
    }

    /// The spatial reference applied to produced geometries.
    #[must_use]
    pub const fn spatial_reference(&self) -> SpatialReference {
        self.spatial_reference
    }

    /// Build one graphic and decide where it goes.
    ///
    /// Properties are copied into the attributes when they are an object;
    /// any other value, including `null`, yields no attributes.
    ///
    /// # Errors
    /// Returns [`FeatureError`] when the feature cannot be drawn.
    ///
    /// # Examples
    /// ```
    /// use geoint_core::SpatialReference;
    /// use geoint_data::geojson::{Bucket, GraphicsFactory};
    /// use serde_json::json;
    ///
    /// let factory = GraphicsFactory::new(SpatialReference::WGS84);
    /// let feature = json!({
    ///     "type": "Feature",
    ///     "geometry": {"type": "Point", "coordinates": [8.5, 47.3]},
    ///     "properties": {"name": "Zurich"}
    /// });
    /// let (bucket, graphic) = factory.create_graphic(&feature).expect("drawable");
    /// assert_eq!(bucket, Bucket::Points);
    /// assert_eq!(graphic.attributes().get("name"), Some(&json!("Zurich")));
    /// ```
    pub fn create_graphic(&self, feature: &Value) -> Result<(Bucket, Graphic), FeatureError> {
        let bucket = classify_feature(feature)?;
        let geometry = feature
            .get("geometry")
            .ok_or(FeatureError::UnrecognizedGeometryType { type_name: None })?;
        let converted = convert_geometry(geometry, self.spatial_reference)?;
        let attributes = match feature.get("properties") {
            Some(Value::Object(properties)) => properties.clone(),
            _ => Attributes::new(),
        };
        Ok((bucket, Graphic::with_attributes(converted, attributes)))
    }

    /// Build graphics for every feature in order.
    ///
    /// Each graphic is handed to `dispatch` together with its bucket.
    /// Rejected features are reported to `sink` and skipped.
    pub fn create_graphics<F>(
        &self,
        features: &[Value],
        mut dispatch: F,
        sink: &mut dyn DiagnosticSink,
    ) -> BucketCounts
    where
        F: FnMut(Bucket, Graphic),
    {
        let mut counts = BucketCounts::default();
        for (index, feature) in features.iter().enumerate() {
            match self.create_graphic(feature) {
                Ok((bucket, graphic)) => {
                    counts.increment(bucket);
                    dispatch(bucket, graphic);
                }
                Err(err) => sink.report(Diagnostic::feature(index, &err)),
            }
        }
        counts
    }
}
