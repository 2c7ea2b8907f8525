//! GeoJSON ingestion for the geoint mapping adapter.
//!
//! Responsibilities:
//! - Validate GeoJSON documents and extract their features.
//! - Classify features into points, lines and areas and build graphics.
//! - Provide the default styling of each bucket.
//!
//! Boundaries:
//! - Do not render or own a map (lives in `geoint-map`).
//! - Never fail a load loudly; report through a [`DiagnosticSink`].
//!
//! Invariants:
//! - Feature order is preserved within each bucket.
//! - A rejected feature never leaves a partial graphic behind.

#![forbid(unsafe_code)]

mod diagnostics;
pub mod geojson;

pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, LogSink};
pub use geojson::{Bucket, GeoJsonLayer};
