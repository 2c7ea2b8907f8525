//! The GeoJSON layer: three styled overlays filled from one document.

use geoint_core::{GraphicsOverlay, Renderer, SpatialReference};
use log::debug;

use super::classify::Bucket;
use super::document::validate_document;
use super::factory::{BucketCounts, GraphicsFactory};
use super::style::default_overlay;
use crate::diagnostics::{Diagnostic, DiagnosticSink, LogSink};

/// Points, lines and areas decoded from GeoJSON, each in its own overlay.
///
/// Successive loads append; nothing is deduplicated. Renderers can be
/// replaced at any time without reloading.
///
/// # Examples
/// ```
/// use geoint_data::geojson::{Bucket, GeoJsonLayer};
///
/// let mut layer = GeoJsonLayer::new();
/// let added = layer.load(
///     r#"{"type": "FeatureCollection", "features": [
///         {"type": "Feature", "geometry": {"type": "Point", "coordinates": [7.6, 51.9]}}
///     ]}"#,
/// );
/// assert!(added);
/// assert_eq!(layer.overlay(Bucket::Points).len(), 1);
/// assert!(layer.lines().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeoJsonLayer {
    factory: GraphicsFactory,
    points: GraphicsOverlay,
    lines: GraphicsOverlay,
    areas: GraphicsOverlay,
}

impl Default for GeoJsonLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl GeoJsonLayer {
    /// An empty layer producing WGS84 geometries.
    #[must_use]
    pub fn new() -> Self {
        Self {
            factory: GraphicsFactory::default(),
            points: default_overlay(Bucket::Points),
            lines: default_overlay(Bucket::Lines),
            areas: default_overlay(Bucket::Areas),
        }
    }

    /// Tag geometries from later loads with `spatial_reference`.
    #[must_use]
    pub const fn with_spatial_reference(mut self, spatial_reference: SpatialReference) -> Self {
        self.factory = GraphicsFactory::new(spatial_reference);
        self
    }

    /// The spatial reference applied to loaded geometries.
    #[must_use]
    pub const fn spatial_reference(&self) -> SpatialReference {
        self.factory.spatial_reference()
    }

    /// Load a document, logging diagnostics through the `log` facade.
    ///
    /// Returns whether at least one graphic was added.
    pub fn load(&mut self, text: &str) -> bool {
        self.load_with(text, &mut LogSink)
    }

    /// Load a document, sending diagnostics to `sink`.
    ///
    /// Document-level failures add nothing. Feature-level failures skip the
    /// feature only. A load that adds nothing also reports
    /// [`crate::DiagnosticKind::NoFeaturesAdded`].
    pub fn load_with(&mut self, text: &str, sink: &mut dyn DiagnosticSink) -> bool {
        self.load_counted(text, sink).total() > 0
    }

    /// Load a document and return how many graphics each bucket received.
    pub fn load_counted(&mut self, text: &str, sink: &mut dyn DiagnosticSink) -> BucketCounts {
        let features = match validate_document(text) {
            Ok(features) => features,
            Err(err) => {
                sink.report(Diagnostic::document(&err));
                return BucketCounts::default();
            }
        };

        let factory = self.factory;
        let counts = factory.create_graphics(
            &features,
            |bucket, graphic| self.overlay_mut(bucket).push(graphic),
            sink,
        );
        debug!(
            "loaded {} of {} GeoJSON features ({} points, {} lines, {} areas)",
            counts.total(),
            features.len(),
            counts.points,
            counts.lines,
            counts.areas
        );
        if counts.total() == 0 {
            sink.report(Diagnostic::no_features_added());
        }
        counts
    }

    /// The overlay backing `bucket`.
    #[must_use]
    pub const fn overlay(&self, bucket: Bucket) -> &GraphicsOverlay {
        match bucket {
            Bucket::Points => &self.points,
            Bucket::Lines => &self.lines,
            Bucket::Areas => &self.areas,
        }
    }

    /// Mutable access to the overlay backing `bucket`.
    pub const fn overlay_mut(&mut self, bucket: Bucket) -> &mut GraphicsOverlay {
        match bucket {
            Bucket::Points => &mut self.points,
            Bucket::Lines => &mut self.lines,
            Bucket::Areas => &mut self.areas,
        }
    }

    /// Point and multipoint graphics.
    #[must_use]
    pub const fn points(&self) -> &GraphicsOverlay {
        &self.points
    }

    /// Line and multi-line graphics.
    #[must_use]
    pub const fn lines(&self) -> &GraphicsOverlay {
        &self.lines
    }

    /// Polygon and multi-polygon graphics.
    #[must_use]
    pub const fn areas(&self) -> &GraphicsOverlay {
        &self.areas
    }

    /// Restyle one bucket.
    pub fn set_renderer(&mut self, bucket: Bucket, renderer: Renderer) {
        self.overlay_mut(bucket).set_renderer(renderer);
    }

    /// Total graphics across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len() + self.lines.len() + self.areas.len()
    }

    /// Report whether every bucket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every graphic, keeping the styles.
    pub fn clear(&mut self) {
        for bucket in Bucket::ALL {
            self.overlay_mut(bucket).clear();
        }
    }

    /// Take the overlay of one bucket, leaving a default-styled empty one.
    #[must_use]
    pub fn take_overlay(&mut self, bucket: Bucket) -> GraphicsOverlay {
        std::mem::replace(self.overlay_mut(bucket), default_overlay(bucket))
    }

    /// Consume the layer, yielding its overlays in points, lines, areas order.
    #[must_use]
    pub fn into_overlays(self) -> [(Bucket, GraphicsOverlay); 3] {
        [
            (Bucket::Points, self.points),
            (Bucket::Lines, self.lines),
            (Bucket::Areas, self.areas),
        ]
    }
}
