//! Resolving and loading the GeoJSON input shared by every subcommand.

use camino::{Utf8Path, Utf8PathBuf};
use geoint_core::SpatialReference;
use geoint_data::geojson::BucketCounts;
use geoint_data::{Diagnostic, DiagnosticSink, GeoJsonLayer, LogSink};
use log::info;

use crate::{ARG_PATH, CliError};

/// A validated input file plus the spatial reference to load it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SourceConfig {
    /// Path to the GeoJSON document.
    pub(crate) path: Utf8PathBuf,
    /// Spatial reference applied to decoded geometries.
    pub(crate) spatial_reference: SpatialReference,
}

impl SourceConfig {
    pub(crate) fn new(
        path: Option<Utf8PathBuf>,
        wkid: Option<u32>,
        env: &'static str,
    ) -> Result<Self, CliError> {
        let resolved = path.ok_or(CliError::MissingArgument {
            field: ARG_PATH,
            env,
        })?;
        Ok(Self {
            path: resolved,
            spatial_reference: wkid.map_or_else(SpatialReference::default, SpatialReference::new),
        })
    }

    pub(crate) fn validate_source(&self) -> Result<(), CliError> {
        require_existing(&self.path, ARG_PATH)
    }

    /// Read and load the document, collecting diagnostics as they are logged.
    pub(crate) fn load(&self) -> Result<LoadedSource, CliError> {
        let text = geoint_fs::read_utf8_file(&self.path).map_err(|source| CliError::ReadInput {
            path: self.path.clone(),
            source,
        })?;
        let mut layer = GeoJsonLayer::new().with_spatial_reference(self.spatial_reference);
        let mut sink = TeeSink::default();
        let counts = layer.load_counted(&text, &mut sink);
        info!(
            "{}: {} graphics, {} diagnostics",
            self.path,
            counts.total(),
            sink.collected.len()
        );
        Ok(LoadedSource {
            layer,
            counts,
            diagnostics: sink.collected,
        })
    }
}

pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match geoint_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Outcome of loading one input file.
#[derive(Debug)]
pub(crate) struct LoadedSource {
    pub(crate) layer: GeoJsonLayer,
    pub(crate) counts: BucketCounts,
    pub(crate) diagnostics: Vec<Diagnostic>,
}

impl LoadedSource {
    /// The first diagnostic that rejected the whole document, if any.
    pub(crate) fn document_error(&self) -> Option<&Diagnostic> {
        self.diagnostics
            .iter()
            .find(|diagnostic| diagnostic.kind.is_document_level())
    }
}

/// Logs every diagnostic and keeps a copy for the report.
#[derive(Debug, Default)]
struct TeeSink {
    collected: Vec<Diagnostic>,
}

impl DiagnosticSink for TeeSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        LogSink.report(diagnostic.clone());
        self.collected.push(diagnostic);
    }
}
