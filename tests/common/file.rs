use derive_new::new;
use std::path::{Path, PathBuf};

/// A snapshot file to materialize inside a test directory.
#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct SnapshotSpec {
    pub name: String,
    pub content: String,
}

impl SnapshotSpec {
    pub fn named(name: &str, content: &str) -> Self {
        SnapshotSpec::new(name.to_string(), content.to_string())
    }
}

pub fn write_snapshot(dir: &Path, spec: &SnapshotSpec) -> PathBuf {
    let path = dir.join(&spec.name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create snapshot directory");
    }
    std::fs::write(&path, &spec.content).expect("Failed to write snapshot");
    path
}

/// Writes both sides of a comparison and returns nothing; the caller
/// addresses them by name through the command's working directory.
pub fn write_snapshot_pair(dir: &Path, old: &str, new: &str) {
    write_snapshot(dir, &SnapshotSpec::named("old.json", old));
    write_snapshot(dir, &SnapshotSpec::named("new.json", new));
}
