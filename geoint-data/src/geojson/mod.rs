//! GeoJSON loading: document validation, classification into buckets,
//! graphic construction and default styling.

mod classify;
mod document;
mod factory;
mod layer;
mod style;

pub use classify::{Bucket, BucketParseError, FeatureError, classify_feature, convert_geometry};
pub use document::{DocumentError, validate_document, validate_value};
pub use factory::{BucketCounts, GraphicsFactory};
pub use layer::GeoJsonLayer;
pub use style::{
    DEFAULT_FILL_COLOR, DEFAULT_LINE_WIDTH, DEFAULT_MARKER_SIZE, DEFAULT_OUTLINE_WIDTH,
    TRANSLUCENT_OPACITY, default_opacity, default_overlay, default_renderer,
};
