//! Graphics overlays: ordered graphics sharing one renderer.

use crate::graphic::{Graphic, Record};
use crate::renderer::Renderer;

/// An ordered, renderable collection of graphics.
///
/// The overlay owns its graphics. Opacity is kept within `0.0..=1.0`.
///
/// # Examples
/// ```
/// use geoint_core::{
///     Color, Geometry, Graphic, GraphicsOverlay, Renderer, SimpleMarkerStyle,
///     SimpleMarkerSymbol, SpatialReference,
/// };
///
/// let renderer = Renderer::new(SimpleMarkerSymbol::new(
///     SimpleMarkerStyle::Circle,
///     Color::BLACK,
///     8.0,
/// ));
/// let mut overlay = GraphicsOverlay::new(renderer).with_opacity(2.0);
/// overlay.push(Graphic::new(Geometry::point(0.0, 0.0, SpatialReference::WGS84)));
/// assert_eq!(overlay.len(), 1);
/// assert_eq!(overlay.opacity(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GraphicsOverlay {
    graphics: Vec<Graphic>,
    renderer: Renderer,
    opacity: f32,
}

impl GraphicsOverlay {
    /// An empty, fully opaque overlay drawn with `renderer`.
    #[must_use]
    pub const fn new(renderer: Renderer) -> Self {
        Self {
            graphics: Vec::new(),
            renderer,
            opacity: 1.0,
        }
    }

    /// Set the opacity while building.
    #[must_use]
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.set_opacity(opacity);
        self
    }

    /// Append a graphic after the existing ones.
    pub fn push(&mut self, graphic: Graphic) {
        self.graphics.push(graphic);
    }

    /// The graphics in insertion order.
    #[must_use]
    pub fn graphics(&self) -> &[Graphic] {
        &self.graphics
    }

    /// Number of graphics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.graphics.len()
    }

    /// Report whether the overlay holds no graphics.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graphics.is_empty()
    }

    /// Drop every graphic, keeping renderer and opacity.
    pub fn clear(&mut self) {
        self.graphics.clear();
    }

    /// The renderer applied to every graphic.
    #[must_use]
    pub const fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Replace the renderer. Graphics are untouched.
    pub fn set_renderer(&mut self, renderer: Renderer) {
        self.renderer = renderer;
    }

    /// Current opacity in `0.0..=1.0`.
    #[must_use]
    pub const fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Set the opacity, clamped to `0.0..=1.0`. `NaN` resets to opaque.
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = if opacity.is_nan() {
            1.0
        } else {
            opacity.clamp(0.0, 1.0)
        };
    }

    /// Flatten every graphic into a record, in insertion order.
    #[must_use]
    pub fn records(&self) -> Vec<Record> {
        self.graphics.iter().map(Graphic::to_record).collect()
    }
}

impl Extend<Graphic> for GraphicsOverlay {
    fn extend<T: IntoIterator<Item = Graphic>>(&mut self, iter: T) {
        self.graphics.extend(iter);
    }
}
