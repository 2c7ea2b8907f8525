//! `inspect` command: summarise how a GeoJSON file loads.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use geoint_core::SpatialReference;
use geoint_data::Diagnostic;
use geoint_data::geojson::BucketCounts;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::source::SourceConfig;
use crate::{ARG_WKID, CliError, ENV_INSPECT_PATH, write_json};

/// CLI arguments for the `inspect` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "inspect",
    long_about = "Load a GeoJSON file the way the map adapter does and report \
                 how many graphics each bucket received, together with every \
                 diagnostic raised while loading.",
    about = "Summarise how a GeoJSON file loads"
)]
#[ortho_config(prefix = "GEOINT")]
pub(crate) struct InspectArgs {
    /// Path to the GeoJSON file.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) path: Option<Utf8PathBuf>,
    /// Well-known id of the spatial reference (default 4326).
    #[arg(long = ARG_WKID, value_name = "wkid")]
    #[serde(default)]
    pub(crate) wkid: Option<u32>,
}

impl InspectArgs {
    pub(crate) fn into_config(self) -> Result<SourceConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SourceConfig::try_from(merged)
    }
}

impl TryFrom<InspectArgs> for SourceConfig {
    type Error = CliError;

    fn try_from(args: InspectArgs) -> Result<Self, Self::Error> {
        Self::new(args.path, args.wkid, ENV_INSPECT_PATH)
    }
}

/// Report printed by `inspect`.
#[derive(Debug, Serialize)]
pub(crate) struct InspectReport {
    pub(crate) path: Utf8PathBuf,
    pub(crate) spatial_reference: SpatialReference,
    pub(crate) graphics: BucketCounts,
    pub(crate) total: usize,
    pub(crate) diagnostics: Vec<Diagnostic>,
}

pub(crate) fn run_inspect(args: InspectArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_source()?;
    let report = inspect(&config)?;
    write_json(writer, &report)
}

pub(crate) fn inspect(config: &SourceConfig) -> Result<InspectReport, CliError> {
    let loaded = config.load()?;
    Ok(InspectReport {
        path: config.path.clone(),
        spatial_reference: config.spatial_reference,
        graphics: loaded.counts,
        total: loaded.counts.total(),
        diagnostics: loaded.diagnostics,
    })
}
