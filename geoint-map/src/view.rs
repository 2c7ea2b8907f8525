//! The map view: basemap, attached overlays, viewpoint and notifications.

use std::fmt;

use geo::Point;
use geoint_core::{
    Geometry, GeometryJsonError, GeometryKind, Graphic, GraphicsOverlay, Record, Renderer,
    RendererJsonError, SpatialReference,
};
use geoint_data::LogSink;
use geoint_data::geojson::{Bucket, GeoJsonLayer};
use log::{debug, warn};
use serde_json::Value;
use thiserror::Error;

use crate::basemap::BasemapStyle;
use crate::events::{MapEvent, Subscribers, SubscriptionId};

/// Errors raised by [`MapView`] operations that take engine JSON.
#[derive(Debug, Error)]
pub enum MapViewError {
    /// The renderer JSON was rejected.
    #[error("invalid renderer: {source}")]
    Renderer {
        /// Underlying decoding error.
        #[source]
        source: RendererJsonError,
    },
    /// The geometry JSON was rejected.
    #[error("invalid geometry: {source}")]
    Geometry {
        /// Underlying decoding error.
        #[source]
        source: GeometryJsonError,
    },
    /// The view centre must be a point.
    #[error("view centre must be a point, got a {}", .kind.as_str())]
    CenterNotAPoint {
        /// Kind of the rejected geometry.
        kind: GeometryKind,
    },
    /// The geometry list was not valid JSON.
    #[error("geometry list is not valid JSON: {source}")]
    GeometryListParse {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The geometry list was not a JSON array.
    #[error("geometry list must be a JSON array")]
    GeometryListNotArray,
}

/// Where an attached overlay lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OverlaySlot {
    Layer { layer: usize, bucket: Bucket },
    Standalone(usize),
}

/// The stored viewpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Viewpoint {
    /// Visible extent, if known.
    pub extent: Option<Geometry>,
    /// View centre, always a point when set.
    pub center: Option<Geometry>,
}

/// A single-threaded map view.
///
/// The view owns every GeoJSON layer and standalone overlay it created and
/// exposes the attached overlays, in attach order, by shared reference.
///
/// # Examples
/// ```
/// use geoint_map::{BasemapStyle, MapView};
///
/// let mut view = MapView::new();
/// assert!(view.set_basemap_style("ArcGISTopographic"));
/// assert!(!view.set_basemap_style("Parchment"));
/// assert_eq!(view.basemap_style(), BasemapStyle::Topographic);
///
/// let added = view.add_geojson_features(
///     r#"{"features": [{"geometry": {"type": "Point", "coordinates": [2.35, 48.85]},
///         "properties": {"name": "Paris"}}]}"#,
/// );
/// assert!(added);
/// assert_eq!(view.overlay_count(), 3);
/// assert_eq!(view.to_dict(0).len(), 1);
/// assert!(view.to_dict(7).is_empty());
/// ```
pub struct MapView {
    basemap: BasemapStyle,
    spatial_reference: SpatialReference,
    layers: Vec<GeoJsonLayer>,
    standalone: Vec<GraphicsOverlay>,
    attached: Vec<OverlaySlot>,
    viewpoint: Viewpoint,
    subscribers: Subscribers,
}

impl Default for MapView {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MapView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapView")
            .field("basemap", &self.basemap)
            .field("spatial_reference", &self.spatial_reference)
            .field("layers", &self.layers.len())
            .field("standalone", &self.standalone.len())
            .field("attached", &self.attached)
            .field("viewpoint", &self.viewpoint)
            .field("subscribers", &self.subscribers)
            .finish()
    }
}

impl MapView {
    /// An empty view showing the streets basemap in WGS84.
    #[must_use]
    pub fn new() -> Self {
        Self {
            basemap: BasemapStyle::default(),
            spatial_reference: SpatialReference::WGS84,
            layers: Vec::new(),
            standalone: Vec::new(),
            attached: Vec::new(),
            viewpoint: Viewpoint::default(),
            subscribers: Subscribers::default(),
        }
    }

    /// Use `spatial_reference` for GeoJSON layers and click locations.
    #[must_use]
    pub const fn with_spatial_reference(mut self, spatial_reference: SpatialReference) -> Self {
        self.spatial_reference = spatial_reference;
        self
    }

    /// The view's spatial reference.
    #[must_use]
    pub const fn spatial_reference(&self) -> SpatialReference {
        self.spatial_reference
    }

    /// The displayed basemap style.
    #[must_use]
    pub const fn basemap_style(&self) -> BasemapStyle {
        self.basemap
    }

    /// Switch the basemap by name.
    ///
    /// Unknown names log a warning and leave the basemap unchanged.
    pub fn set_basemap_style(&mut self, name: &str) -> bool {
        match name.parse::<BasemapStyle>() {
            Ok(style) => {
                self.set_basemap(style);
                true
            }
            Err(err) => {
                warn!("{err}");
                false
            }
        }
    }

    /// Switch the basemap.
    pub fn set_basemap(&mut self, style: BasemapStyle) {
        self.basemap = style;
        self.subscribers.emit(&MapEvent::BasemapChanged(style));
    }

    /// Load GeoJSON and attach its points, lines and areas overlays.
    ///
    /// Nothing is attached when the document adds no graphics.
    pub fn add_geojson_features(&mut self, json: &str) -> bool {
        self.add_layer(json, &Bucket::ALL)
    }

    /// Load GeoJSON and attach only its points overlay, drawn with the
    /// given renderer.
    ///
    /// Returns `Ok(false)` and attaches nothing when the document holds no
    /// drawable points.
    ///
    /// # Errors
    /// Returns [`MapViewError::Renderer`] before loading when the renderer
    /// JSON is rejected.
    pub fn add_geojson_point_features(
        &mut self,
        json: &str,
        renderer_json: &str,
    ) -> Result<bool, MapViewError> {
        self.add_styled_bucket(json, renderer_json, Bucket::Points)
    }

    /// Load GeoJSON and attach only its lines overlay, drawn with the given
    /// renderer.
    ///
    /// # Errors
    /// See [`MapView::add_geojson_point_features`].
    pub fn add_geojson_line_features(
        &mut self,
        json: &str,
        renderer_json: &str,
    ) -> Result<bool, MapViewError> {
        self.add_styled_bucket(json, renderer_json, Bucket::Lines)
    }

    /// Load GeoJSON and attach only its areas overlay, drawn with the given
    /// renderer.
    ///
    /// # Errors
    /// See [`MapView::add_geojson_point_features`].
    pub fn add_geojson_polygon_features(
        &mut self,
        json: &str,
        renderer_json: &str,
    ) -> Result<bool, MapViewError> {
        self.add_styled_bucket(json, renderer_json, Bucket::Areas)
    }

    fn add_styled_bucket(
        &mut self,
        json: &str,
        renderer_json: &str,
        bucket: Bucket,
    ) -> Result<bool, MapViewError> {
        let renderer = Renderer::from_json(renderer_json)
            .map_err(|source| MapViewError::Renderer { source })?;
        let mut layer = GeoJsonLayer::new().with_spatial_reference(self.spatial_reference);
        layer.set_renderer(bucket, renderer);
        Ok(self.attach_layer(layer, json, &[bucket]))
    }

    fn add_layer(&mut self, json: &str, buckets: &[Bucket]) -> bool {
        let layer = GeoJsonLayer::new().with_spatial_reference(self.spatial_reference);
        self.attach_layer(layer, json, buckets)
    }

    fn attach_layer(&mut self, mut layer: GeoJsonLayer, json: &str, buckets: &[Bucket]) -> bool {
        let counts = layer.load_counted(json, &mut LogSink);
        let attachable: usize = buckets.iter().map(|&bucket| counts.get(bucket)).sum();
        if attachable == 0 {
            debug!("no graphics for the requested buckets, nothing attached");
            return false;
        }
        let index = self.layers.len();
        self.layers.push(layer);
        self.attached.extend(
            buckets
                .iter()
                .map(|&bucket| OverlaySlot::Layer { layer: index, bucket }),
        );
        self.overlays_changed();
        true
    }

    /// Attach one overlay built from a JSON array of engine geometries.
    ///
    /// Elements that are not objects, or not valid geometries, are skipped
    /// with a warning. The overlay is attached even when it ends up empty.
    /// Returns the number of graphics added.
    ///
    /// # Errors
    /// Returns [`MapViewError`] when the renderer is rejected, the list is not
    /// valid JSON, or the list is not an array. Nothing is attached then.
    pub fn add_geometries(&mut self, json: &str, renderer_json: &str) -> Result<usize, MapViewError> {
        let renderer = Renderer::from_json(renderer_json)
            .map_err(|source| MapViewError::Renderer { source })?;
        let list: Value = serde_json::from_str(json)
            .map_err(|source| MapViewError::GeometryListParse { source })?;
        let Value::Array(elements) = list else {
            return Err(MapViewError::GeometryListNotArray);
        };

        let mut overlay = GraphicsOverlay::new(renderer);
        for (index, element) in elements.into_iter().enumerate() {
            if !element.is_object() {
                warn!("geometry {index} is not a JSON object, skipping");
                continue;
            }
            match Geometry::from_json_value(element) {
                Ok(geometry) => overlay.push(Graphic::new(geometry)),
                Err(err) => warn!("geometry {index} skipped: {err}"),
            }
        }
        let added = overlay.len();
        debug!("attaching overlay with {added} geometries");
        let position = self.standalone.len();
        self.standalone.push(overlay);
        self.attached.push(OverlaySlot::Standalone(position));
        self.overlays_changed();
        Ok(added)
    }

    /// Detach every overlay and drop every layer and standalone overlay.
    pub fn clear_graphic_overlays(&mut self) {
        self.attached.clear();
        self.layers.clear();
        self.standalone.clear();
        self.overlays_changed();
    }

    /// Number of attached overlays.
    #[must_use]
    pub fn overlay_count(&self) -> usize {
        self.attached.len()
    }

    /// The attached overlay at `index`, in attach order.
    #[must_use]
    pub fn overlay(&self, index: usize) -> Option<&GraphicsOverlay> {
        match *self.attached.get(index)? {
            OverlaySlot::Layer { layer, bucket } => {
                self.layers.get(layer).map(|found| found.overlay(bucket))
            }
            OverlaySlot::Standalone(position) => self.standalone.get(position),
        }
    }

    /// Mutable access to the attached overlay at `index`.
    pub fn overlay_mut(&mut self, index: usize) -> Option<&mut GraphicsOverlay> {
        match *self.attached.get(index)? {
            OverlaySlot::Layer { layer, bucket } => self
                .layers
                .get_mut(layer)
                .map(|found| found.overlay_mut(bucket)),
            OverlaySlot::Standalone(position) => self.standalone.get_mut(position),
        }
    }

    /// Attached overlays in attach order.
    pub fn overlays(&self) -> impl Iterator<Item = &GraphicsOverlay> {
        (0..self.attached.len()).filter_map(|index| self.overlay(index))
    }

    /// GeoJSON layers owned by the view, in creation order.
    #[must_use]
    pub fn layers(&self) -> &[GeoJsonLayer] {
        &self.layers
    }

    /// Records of the attached overlay at `index`.
    ///
    /// An out-of-range index yields an empty list.
    #[must_use]
    pub fn to_dict(&self, index: usize) -> Vec<Record> {
        self.overlay(index)
            .map(GraphicsOverlay::records)
            .unwrap_or_default()
    }

    /// The stored viewpoint.
    #[must_use]
    pub const fn viewpoint(&self) -> &Viewpoint {
        &self.viewpoint
    }

    /// Store any geometry as the visible extent.
    ///
    /// # Errors
    /// Returns [`MapViewError::Geometry`] when the JSON is not an engine
    /// geometry.
    pub fn set_extent(&mut self, json: &str) -> Result<(), MapViewError> {
        let extent =
            Geometry::from_json(json).map_err(|source| MapViewError::Geometry { source })?;
        self.store_extent(extent);
        Ok(())
    }

    /// Store a point as the view centre.
    ///
    /// # Errors
    /// Returns [`MapViewError::Geometry`] for invalid JSON and
    /// [`MapViewError::CenterNotAPoint`] for any other geometry kind.
    pub fn set_center(&mut self, json: &str) -> Result<(), MapViewError> {
        let center =
            Geometry::from_json(json).map_err(|source| MapViewError::Geometry { source })?;
        if center.kind() != GeometryKind::Point {
            return Err(MapViewError::CenterNotAPoint {
                kind: center.kind(),
            });
        }
        self.store_center(center);
        Ok(())
    }

    /// Engine JSON of the extent, or an empty string when unset.
    #[must_use]
    pub fn extent_json(&self) -> String {
        self.viewpoint
            .extent
            .as_ref()
            .map(Geometry::to_json)
            .unwrap_or_default()
    }

    /// Engine JSON of the centre, or an empty string when unset.
    #[must_use]
    pub fn center_json(&self) -> String {
        self.viewpoint
            .center
            .as_ref()
            .map(Geometry::to_json)
            .unwrap_or_default()
    }

    /// Register a callback for every [`MapEvent`].
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&MapEvent) + 'static,
    {
        self.subscribers.subscribe(Box::new(callback))
    }

    /// Remove a callback. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Forward a click at `location`, given in the view's spatial reference.
    pub fn notify_clicked(&mut self, location: Point<f64>) {
        let event = MapEvent::Clicked {
            location: Geometry::point(location.x(), location.y(), self.spatial_reference),
        };
        self.subscribers.emit(&event);
    }

    /// Replace the viewpoint after the view moved.
    ///
    /// Emits [`MapEvent::ExtentChanged`] and [`MapEvent::CenterChanged`] for
    /// each part that is set and differs from the stored one. A centre that
    /// is not a point is ignored with a warning.
    pub fn notify_viewpoint_changed(&mut self, viewpoint: Viewpoint) {
        let Viewpoint { extent, center } = viewpoint;
        if let Some(new_extent) = extent
            && self.viewpoint.extent.as_ref() != Some(&new_extent)
        {
            self.store_extent(new_extent);
        }
        match center {
            Some(new_center) if new_center.kind() != GeometryKind::Point => {
                warn!("ignoring view centre of kind {}", new_center.kind().as_str());
            }
            Some(new_center) if self.viewpoint.center.as_ref() != Some(&new_center) => {
                self.store_center(new_center);
            }
            _ => {}
        }
    }

    fn store_extent(&mut self, extent: Geometry) {
        let event = MapEvent::ExtentChanged {
            extent: extent.clone(),
        };
        self.viewpoint.extent = Some(extent);
        self.subscribers.emit(&event);
    }

    fn store_center(&mut self, center: Geometry) {
        let event = MapEvent::CenterChanged {
            center: center.clone(),
        };
        self.viewpoint.center = Some(center);
        self.subscribers.emit(&event);
    }

    fn overlays_changed(&mut self) {
        let event = MapEvent::OverlaysChanged {
            count: self.attached.len(),
        };
        self.subscribers.emit(&event);
    }
}
