//! Build index (`*.cbuild-idx.yml`) parsing.
//!
//! The index lists the build descriptors produced by the most recent builds,
//! newest first.

use crate::LocateError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Root of a build index document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildIndex {
    #[serde(rename = "build-idx")]
    build_idx: BuildIdx,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BuildIdx {
    cbuilds: Vec<CbuildRef>,
}

/// A single build record: a reference to its build descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CbuildRef {
    /// Path to the build descriptor, as written in the index.
    pub cbuild: PathBuf,
}

impl BuildIndex {
    /// Load a build index from a YAML file.
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| LocateError::ReadIndex {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| LocateError::ParseIndex {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a build index from a YAML string.
    pub fn from_str(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// All build records, newest first.
    pub fn cbuilds(&self) -> &[CbuildRef] {
        &self.build_idx.cbuilds
    }

    /// The most recent build record.
    pub fn latest(&self) -> Option<&CbuildRef> {
        self.build_idx.cbuilds.first()
    }
}

/// Read the index at `index_path` and return the descriptor path of the
/// most recent build.
///
/// The returned path is used as written; a relative path is relative to the
/// current directory, not to the index file.
pub fn latest_cbuild(index_path: &Path) -> crate::Result<PathBuf> {
    let index = BuildIndex::from_file(index_path)?;
    let latest = index
        .latest()
        .ok_or_else(|| LocateError::EmptyIndex(index_path.to_path_buf()))?;

    debug!(
        index = %index_path.display(),
        builds = index.cbuilds().len(),
        cbuild = %latest.cbuild.display(),
        "selected latest build"
    );

    Ok(latest.cbuild.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_index() {
        let yaml = r#"
build-idx:
  generated-by: csolution version 2.4.0
  csolution: object-detection.csolution.yml
  cbuilds:
    - cbuild: out/object-detection/AppKit-E7-U55/Release/object-detection.Release+AppKit-E7-U55.cbuild.yml
      project: object-detection
      configuration: .Release+AppKit-E7-U55
    - cbuild: out/object-detection/AppKit-E7-U55/Debug/object-detection.Debug+AppKit-E7-U55.cbuild.yml
"#;

        let index = BuildIndex::from_str(yaml).unwrap();

        assert_eq!(index.cbuilds().len(), 2);
        let latest = index.latest().unwrap();
        assert!(latest.cbuild.ends_with("object-detection.Release+AppKit-E7-U55.cbuild.yml"));
    }

    #[test]
    fn test_missing_cbuilds_key() {
        let err = BuildIndex::from_str("build-idx:\n  csolution: x.yml\n").unwrap_err();
        assert!(err.to_string().contains("cbuilds"));
    }

    #[test]
    fn test_latest_cbuild_from_file() {
        let dir = TempDir::new().unwrap();
        let idx = dir.path().join("idx.yaml");
        fs::write(&idx, "build-idx: {cbuilds: [{cbuild: b/desc.yaml}, {cbuild: c/old.yaml}]}\n").unwrap();

        assert_eq!(latest_cbuild(&idx).unwrap(), PathBuf::from("b/desc.yaml"));
    }

    #[test]
    fn test_empty_index() {
        let dir = TempDir::new().unwrap();
        let idx = dir.path().join("idx.yaml");
        fs::write(&idx, "build-idx: {cbuilds: []}\n").unwrap();

        let err = latest_cbuild(&idx).unwrap_err();
        assert!(matches!(err, LocateError::EmptyIndex(ref p) if p == &idx));
    }

    #[test]
    fn test_unreadable_index() {
        let dir = TempDir::new().unwrap();
        let err = latest_cbuild(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, LocateError::ReadIndex { .. }));
    }

    #[test]
    fn test_not_yaml_mapping() {
        let dir = TempDir::new().unwrap();
        let idx = dir.path().join("idx.yaml");
        fs::write(&idx, "- just\n- a list\n").unwrap();

        let err = latest_cbuild(&idx).unwrap_err();
        assert!(matches!(err, LocateError::ParseIndex { .. }));
    }
}
