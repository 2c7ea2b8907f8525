//! Out-of-band diagnostics emitted while loading GeoJSON.
//!
//! A load never fails loudly. Every rejected document or feature produces a
//! [`Diagnostic`] delivered to a [`DiagnosticSink`]; the default sink writes
//! to the `log` facade.

use std::fmt;

use log::{debug, warn};
use serde::Serialize;

use crate::geojson::{DocumentError, FeatureError};

/// Category of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The document text did not parse as JSON.
    InvalidJson,
    /// The document parsed but its top level was not an object.
    NotAnObject,
    /// A feature's geometry type was missing or not supported.
    UnrecognizedGeometryType,
    /// A feature's geometry had no coordinates to draw.
    EmptyGeometry,
    /// A feature's coordinates could not be decoded.
    MalformedGeometry,
    /// A load finished without adding a single graphic.
    NoFeaturesAdded,
}

impl DiagnosticKind {
    /// Report whether the diagnostic aborted the whole load.
    #[must_use]
    pub const fn is_document_level(self) -> bool {
        matches!(self, Self::InvalidJson | Self::NotAnObject)
    }
}

/// A single diagnostic record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// What went wrong.
    pub kind: DiagnosticKind,
    /// Index into the `features` array, for feature-level diagnostics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_index: Option<usize>,
    /// Human-readable detail.
    pub message: String,
}

impl Diagnostic {
    /// Diagnostic for a rejected document.
    #[must_use]
    pub fn document(error: &DocumentError) -> Self {
        let kind = match error {
            DocumentError::InvalidJson { .. } => DiagnosticKind::InvalidJson,
            DocumentError::NotAnObject { .. } => DiagnosticKind::NotAnObject,
        };
        Self {
            kind,
            feature_index: None,
            message: error.to_string(),
        }
    }

    /// Diagnostic for a skipped feature.
    #[must_use]
    pub fn feature(index: usize, error: &FeatureError) -> Self {
        let kind = match error {
            FeatureError::UnrecognizedGeometryType { .. } => {
                DiagnosticKind::UnrecognizedGeometryType
            }
            FeatureError::EmptyGeometry { .. } => DiagnosticKind::EmptyGeometry,
            FeatureError::MalformedGeometry { .. } => DiagnosticKind::MalformedGeometry,
        };
        Self {
            kind,
            feature_index: Some(index),
            message: error.to_string(),
        }
    }

    /// Diagnostic for a load that added nothing.
    #[must_use]
    pub fn no_features_added() -> Self {
        Self {
            kind: DiagnosticKind::NoFeaturesAdded,
            feature_index: None,
            message: "no GeoJSON feature was added".to_owned(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.feature_index {
            Some(index) => write!(f, "feature {index}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Receives diagnostics as a load progresses.
pub trait DiagnosticSink {
    /// Accept one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        match diagnostic.kind {
            DiagnosticKind::NoFeaturesAdded => debug!("{diagnostic}"),
            _ => warn!("{diagnostic}"),
        }
    }
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
