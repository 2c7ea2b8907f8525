//! Spatial reference identifiers attached to every geometry.

use serde::{Deserialize, Serialize};

/// A coordinate system identified by its well-known id.
///
/// The engine never reprojects on behalf of this crate: the reference only
/// travels with the geometry so the renderer can interpret `x`/`y`.
///
/// # Examples
/// ```
/// use geoint_core::SpatialReference;
///
/// assert_eq!(SpatialReference::default(), SpatialReference::WGS84);
/// assert_eq!(SpatialReference::new(3857).wkid, 3857);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpatialReference {
    /// Well-known id, e.g. `4326` for WGS84.
    pub wkid: u32,
}

impl SpatialReference {
    /// Geographic WGS84, the reference GeoJSON coordinates are defined in.
    pub const WGS84: Self = Self { wkid: 4326 };

    /// Spherical web mercator.
    pub const WEB_MERCATOR: Self = Self { wkid: 3857 };

    /// Construct a reference from a well-known id.
    #[must_use]
    pub const fn new(wkid: u32) -> Self {
        Self { wkid }
    }
}

impl Default for SpatialReference {
    fn default() -> Self {
        Self::WGS84
    }
}
