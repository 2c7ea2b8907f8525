//! `records` command: print the flattened records of loaded graphics.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use geoint_core::Record;
use geoint_data::Bucket;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::source::SourceConfig;
use crate::{ARG_BUCKET, ARG_WKID, CliError, ENV_RECORDS_PATH, write_json};

/// CLI arguments for the `records` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "records",
    long_about = "Load a GeoJSON file and print each graphic as a flat record: \
                 its properties plus the engine geometry JSON under \
                 `geometry`. Without --bucket, points, lines and areas are \
                 printed in that order.",
    about = "Print the records of a GeoJSON file"
)]
#[ortho_config(prefix = "GEOINT")]
pub(crate) struct RecordsArgs {
    /// Path to the GeoJSON file.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) path: Option<Utf8PathBuf>,
    /// Well-known id of the spatial reference (default 4326).
    #[arg(long = ARG_WKID, value_name = "wkid")]
    #[serde(default)]
    pub(crate) wkid: Option<u32>,
    /// Only print one bucket: points, lines or areas.
    #[arg(long = ARG_BUCKET, value_name = "bucket")]
    #[serde(default)]
    pub(crate) bucket: Option<Bucket>,
}

/// Resolved `records` configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecordsConfig {
    pub(crate) source: SourceConfig,
    pub(crate) bucket: Option<Bucket>,
}

impl RecordsArgs {
    pub(crate) fn into_config(self) -> Result<RecordsConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecordsConfig::try_from(merged)
    }
}

impl TryFrom<RecordsArgs> for RecordsConfig {
    type Error = CliError;

    fn try_from(args: RecordsArgs) -> Result<Self, Self::Error> {
        Ok(Self {
            source: SourceConfig::new(args.path, args.wkid, ENV_RECORDS_PATH)?,
            bucket: args.bucket,
        })
    }
}

pub(crate) fn run_records(args: RecordsArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.source.validate_source()?;
    let records = collect_records(&config)?;
    write_json(writer, &records)
}

/// Load the file and flatten the selected buckets.
///
/// A document rejected as a whole is an error; skipped features are only
/// logged.
pub(crate) fn collect_records(config: &RecordsConfig) -> Result<Vec<Record>, CliError> {
    let loaded = config.source.load()?;
    if let Some(rejection) = loaded.document_error() {
        return Err(CliError::InvalidDocument {
            path: config.source.path.clone(),
            reason: rejection.message.clone(),
        });
    }
    let buckets = config
        .bucket
        .map_or_else(|| Bucket::ALL.to_vec(), |bucket| vec![bucket]);
    Ok(buckets
        .into_iter()
        .flat_map(|bucket| loaded.layer.overlay(bucket).records())
        .collect())
}
