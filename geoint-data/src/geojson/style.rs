//! Default symbology for freshly loaded GeoJSON overlays.

use geoint_core::{
    Color, GraphicsOverlay, Renderer, SimpleFillStyle, SimpleFillSymbol, SimpleLineStyle,
    SimpleLineSymbol, SimpleMarkerStyle, SimpleMarkerSymbol,
};

use super::classify::Bucket;

/// Sand tone used to fill areas and point markers.
pub const DEFAULT_FILL_COLOR: Color = Color::rgb(0xd3, 0xc2, 0xa6);
/// Outline width of areas and point markers.
pub const DEFAULT_OUTLINE_WIDTH: f32 = 4.0;
/// Width of line symbols.
pub const DEFAULT_LINE_WIDTH: f32 = 5.0;
/// Size of point markers.
pub const DEFAULT_MARKER_SIZE: f32 = 12.0;
/// Opacity of the areas and lines overlays.
pub const TRANSLUCENT_OPACITY: f32 = 0.35;

const fn outline(width: f32) -> SimpleLineSymbol {
    SimpleLineSymbol::new(SimpleLineStyle::Solid, Color::BLACK, width)
}

/// Renderer a bucket starts with.
///
/// # Examples
/// ```
/// use geoint_core::Symbol;
/// use geoint_data::geojson::{Bucket, default_renderer};
///
/// assert!(matches!(default_renderer(Bucket::Areas).symbol, Symbol::Fill(_)));
/// ```
#[must_use]
pub fn default_renderer(bucket: Bucket) -> Renderer {
    match bucket {
        Bucket::Points => Renderer::new(
            SimpleMarkerSymbol::new(
                SimpleMarkerStyle::Circle,
                DEFAULT_FILL_COLOR,
                DEFAULT_MARKER_SIZE,
            )
            .with_outline(outline(DEFAULT_OUTLINE_WIDTH)),
        ),
        Bucket::Lines => Renderer::new(outline(DEFAULT_LINE_WIDTH)),
        Bucket::Areas => Renderer::new(
            SimpleFillSymbol::new(SimpleFillStyle::Solid, DEFAULT_FILL_COLOR)
                .with_outline(outline(DEFAULT_OUTLINE_WIDTH)),
        ),
    }
}

/// Opacity a bucket's overlay starts with.
#[must_use]
pub const fn default_opacity(bucket: Bucket) -> f32 {
    match bucket {
        Bucket::Points => 1.0,
        Bucket::Lines | Bucket::Areas => TRANSLUCENT_OPACITY,
    }
}

/// An empty overlay carrying the bucket's default style.
#[must_use]
pub fn default_overlay(bucket: Bucket) -> GraphicsOverlay {
    GraphicsOverlay::new(default_renderer(bucket)).with_opacity(default_opacity(bucket))
}
