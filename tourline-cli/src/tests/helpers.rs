//! Scratch-directory helpers shared by the CLI unit tests.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

/// Temporary directory addressed through UTF-8 paths.
pub(super) struct Scratch {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Scratch {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Write `contents` to `name` under the scratch root and return its path.
    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.root.join(name);
        fs::write(&path, contents).expect("write scratch file");
        path
    }
}

pub(super) const THREE_STOPS: &str = r#"[
    { "id": "depot", "name": "Depot", "lat": 52.52, "lon": 13.40 },
    { "id": "museum", "name": "Museum", "lat": 52.52, "lon": 13.41 },
    { "id": "park", "lat": 52.53, "lon": 13.42 }
]"#;

pub(super) const SMALL_NETWORK: &str = r#"{
    "elements": [
        { "type": "node", "id": 1, "lat": 52.52, "lon": 13.40 },
        { "type": "node", "id": 2, "lat": 52.52, "lon": 13.41 },
        { "type": "node", "id": 3, "lat": 52.53, "lon": 13.41 },
        { "type": "way", "id": 10, "nodes": [1, 2, 3] }
    ]
}"#;

pub(super) fn output_json(buffer: &[u8]) -> serde_json::Value {
    serde_json::from_slice(buffer).expect("output should be JSON")
}
