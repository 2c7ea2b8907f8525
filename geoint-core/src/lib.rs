//! Core domain types for the geoint mapping adapter.
//!
//! These types model what the rendering engine consumes: geometries bound to
//! a spatial reference, simple symbols and renderers, graphics carrying
//! attribute maps, and overlays that own ordered graphics. Everything here is
//! plain data with JSON codecs; drawing happens elsewhere.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod geometry;
pub mod graphic;
pub mod overlay;
pub mod renderer;
mod spatial_reference;
pub mod symbol;

pub use geometry::{Geometry, GeometryJsonError, GeometryKind, Shape};
pub use graphic::{Attributes, GEOMETRY_ATTRIBUTE, Graphic, Record};
pub use overlay::GraphicsOverlay;
pub use renderer::{Renderer, RendererJsonError, SIMPLE_RENDERER_TYPE};
pub use spatial_reference::SpatialReference;
pub use symbol::{
    Color, ColorError, SimpleFillStyle, SimpleFillSymbol, SimpleLineStyle, SimpleLineSymbol,
    SimpleMarkerStyle, SimpleMarkerSymbol, Symbol,
};
