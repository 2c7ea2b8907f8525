//! Focused unit tests covering CLI configuration and command output.

use super::helpers::{MIXED_COLLECTION, Workspace};
use super::*;
use crate::inspect::{InspectArgs, inspect};
use crate::records::{RecordsArgs, RecordsConfig, collect_records};
use crate::source::{SourceConfig, require_existing};
use camino::Utf8PathBuf;
use geoint_core::SpatialReference;
use geoint_data::{Bucket, DiagnosticKind};
use rstest::{fixture, rstest};
use serde_json::Value;

#[fixture]
fn workspace() -> Workspace {
    Workspace::new()
}

#[rstest]
fn converting_without_path_errors() {
    let err = SourceConfig::try_from(InspectArgs::default()).expect_err("missing path");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_PATH);
            assert_eq!(env, ENV_INSPECT_PATH);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
#[case(None, SpatialReference::WGS84)]
#[case(Some(3857), SpatialReference::WEB_MERCATOR)]
fn wkid_selects_spatial_reference(
    #[case] wkid: Option<u32>,
    #[case] expected: SpatialReference,
) {
    let args = RecordsArgs {
        path: Some(Utf8PathBuf::from("cities.geojson")),
        wkid,
        bucket: Some(Bucket::Lines),
    };
    let config = RecordsConfig::try_from(args).expect("config should build");
    assert_eq!(config.source.spatial_reference, expected);
    assert_eq!(config.bucket, Some(Bucket::Lines));
}

#[rstest]
fn require_existing_distinguishes_missing_and_directories(workspace: Workspace) {
    match require_existing(&workspace.root().join("absent.geojson"), ARG_PATH) {
        Err(CliError::MissingSourceFile { field, .. }) => assert_eq!(field, ARG_PATH),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
    match require_existing(workspace.root(), ARG_PATH) {
        Err(CliError::SourcePathNotFile { .. }) => {}
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn inspect_counts_buckets_and_reports_skips(workspace: Workspace) {
    let path = workspace.write("mixed.geojson", MIXED_COLLECTION);
    let config = SourceConfig::new(Some(path), None, ENV_INSPECT_PATH).expect("config");
    let report = inspect(&config).expect("inspect should succeed");
    assert_eq!(
        (report.graphics.points, report.graphics.lines, report.graphics.areas),
        (1, 1, 1)
    );
    assert_eq!(report.total, 3);
    let kinds: Vec<DiagnosticKind> = report.diagnostics.iter().map(|d| d.kind).collect();
    assert_eq!(kinds, vec![DiagnosticKind::UnrecognizedGeometryType]);
}

#[rstest]
fn records_follow_bucket_order(workspace: Workspace) {
    let path = workspace.write("mixed.geojson", MIXED_COLLECTION);
    let config = RecordsConfig {
        source: SourceConfig::new(Some(path), None, ENV_RECORDS_PATH).expect("config"),
        bucket: None,
    };
    let names: Vec<String> = collect_records(&config)
        .expect("records")
        .iter()
        .filter_map(|record| record.get("name").and_then(Value::as_str).map(str::to_owned))
        .collect();
    assert_eq!(names, vec!["Munich", "A9", "Upper Bavaria"]);
}

#[rstest]
fn records_reject_invalid_documents(workspace: Workspace) {
    let path = workspace.write("broken.geojson", "{not json");
    let config = RecordsConfig {
        source: SourceConfig::new(Some(path), None, ENV_RECORDS_PATH).expect("config"),
        bucket: Some(Bucket::Points),
    };
    match collect_records(&config) {
        Err(CliError::InvalidDocument { reason, .. }) => assert!(reason.contains("JSON")),
        other => panic!("expected InvalidDocument, found {other:?}"),
    }
}

#[rstest]
fn write_json_appends_newline() {
    let mut buffer = Vec::new();
    write_json(&mut buffer, &serde_json::json!({"total": 1})).expect("write");
    let text = String::from_utf8(buffer).expect("utf-8");
    assert!(text.ends_with("}\n"));
}
