//! Test helpers for writing GeoJSON inputs to a scratch directory.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

pub(super) const MIXED_COLLECTION: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {"type": "Feature", "geometry": {"type": "Point", "coordinates": [11.57, 48.14]}, "properties": {"name": "Munich"}},
        {"type": "Feature", "geometry": {"type": "LineString", "coordinates": [[11.57, 48.14], [13.40, 52.52]]}, "properties": {"name": "A9"}},
        {"type": "Feature", "geometry": {"type": "Polygon", "coordinates": [[[11.0, 48.0], [12.0, 48.0], [12.0, 49.0], [11.0, 48.0]]]}, "properties": {"name": "Upper Bavaria"}},
        {"type": "Feature", "geometry": {"type": "GeometryCollection", "geometries": []}, "properties": {}}
    ]
}"#;

/// Scratch directory holding input files for one test.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.root.join(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write fixture file");
}
