//! Map view adapter for the geoint mapping tools.
//!
//! Responsibilities:
//! - Own GeoJSON layers and standalone overlays and attach them to a view.
//! - Track the basemap style and the viewpoint.
//! - Re-dispatch view notifications to registered callbacks.
//!
//! Boundaries:
//! - Do not parse GeoJSON (lives in `geoint-data`).
//! - Single-threaded; callers serialise access through `&mut`.

#![forbid(unsafe_code)]

mod basemap;
mod events;
mod view;

pub use basemap::{BasemapStyle, UnknownBasemapStyle};
pub use events::{Callback, MapEvent, SubscriptionId};
pub use view::{MapView, MapViewError, Viewpoint};
