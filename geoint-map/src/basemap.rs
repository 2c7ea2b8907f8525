//! Basemap styles the view can display.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Named vector basemap styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BasemapStyle {
    /// Satellite imagery.
    Imagery,
    /// Light grey canvas.
    LightGray,
    /// Dark grey canvas.
    DarkGray,
    /// Navigation map.
    Navigation,
    /// Street map.
    #[default]
    Streets,
    /// Topographic map.
    Topographic,
    /// Ocean map.
    Oceans,
    /// Terrain with labels.
    Terrain,
    /// Community map.
    Community,
    /// OpenStreetMap standard style.
    OsmStandard,
}

impl BasemapStyle {
    /// Every supported style.
    pub const ALL: [Self; 10] = [
        Self::Imagery,
        Self::LightGray,
        Self::DarkGray,
        Self::Navigation,
        Self::Streets,
        Self::Topographic,
        Self::Oceans,
        Self::Terrain,
        Self::Community,
        Self::OsmStandard,
    ];

    /// The style's public name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Imagery => "ArcGISImagery",
            Self::LightGray => "ArcGISLightGray",
            Self::DarkGray => "ArcGISDarkGray",
            Self::Navigation => "ArcGISNavigation",
            Self::Streets => "ArcGISStreets",
            Self::Topographic => "ArcGISTopographic",
            Self::Oceans => "ArcGISOceans",
            Self::Terrain => "ArcGISTerrain",
            Self::Community => "ArcGISCommunity",
            Self::OsmStandard => "OsmStandard",
        }
    }
}

impl fmt::Display for BasemapStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned for a style name that is not supported.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("basemap style {0:?} is not supported")]
pub struct UnknownBasemapStyle(pub String);

impl FromStr for BasemapStyle {
    type Err = UnknownBasemapStyle;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.name() == name)
            .ok_or_else(|| UnknownBasemapStyle(name.to_owned()))
    }
}
