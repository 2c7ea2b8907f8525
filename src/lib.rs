//! Facade crate for the geoint mapping adapter.
//!
//! This crate re-exports the domain types and the GeoJSON layer, and exposes
//! the map view behind the `map-view` feature.

#![forbid(unsafe_code)]

pub use geoint_core::{
    Attributes, Color, Geometry, GeometryJsonError, GeometryKind, Graphic, GraphicsOverlay,
    Record, Renderer, RendererJsonError, Shape, SimpleFillStyle, SimpleFillSymbol,
    SimpleLineStyle, SimpleLineSymbol, SimpleMarkerStyle, SimpleMarkerSymbol, SpatialReference,
    Symbol,
};

pub use geoint_data::geojson::{BucketCounts, DocumentError, FeatureError, GraphicsFactory};
pub use geoint_data::{Bucket, Diagnostic, DiagnosticKind, DiagnosticSink, GeoJsonLayer, LogSink};

#[cfg(feature = "map-view")]
pub use geoint_map::{BasemapStyle, MapEvent, MapView, MapViewError, SubscriptionId, Viewpoint};
