//! Build descriptor (`*.cbuild.yml`) parsing.

use crate::{Artifact, LocateError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Root of a build descriptor document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildDescriptor {
    pub build: Build,
}

/// The `build` section of a descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Build {
    /// Output directories.
    #[serde(rename = "output-dirs")]
    pub output_dirs: OutputDirs,

    /// Produced files, tagged by type.
    pub output: Vec<OutputFile>,

    /// Build context, e.g. `object-detection.Release+AppKit-E7-U55`.
    pub context: String,
}

/// Output directories of a build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputDirs {
    /// Directory holding the produced files, relative to the descriptor.
    pub outdir: PathBuf,
}

/// A produced file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputFile {
    /// Type label (`bin`, `elf`, `hex`, `map`, ...).
    #[serde(rename = "type")]
    pub kind: String,

    /// File name relative to the output directory.
    pub file: String,
}

impl BuildDescriptor {
    /// Load a build descriptor from a YAML file.
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|source| LocateError::ReadDescriptor {
                path: path.to_path_buf(),
                source,
            })?;
        serde_yaml::from_str(&content).map_err(|source| LocateError::ParseDescriptor {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a build descriptor from a YAML string.
    pub fn from_str(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Map from type label to file name.
    ///
    /// When a label appears more than once the later entry wins.
    pub fn outputs(&self) -> BTreeMap<&str, &str> {
        let mut outputs = BTreeMap::new();

        for out in &self.build.output {
            if let Some(shadowed) = outputs.insert(out.kind.as_str(), out.file.as_str()) {
                warn!(
                    kind = %out.kind,
                    shadowed,
                    file = %out.file,
                    "duplicate output type, using the later entry"
                );
            }
        }

        outputs
    }

    /// File name of the output with type label `kind`.
    pub fn artifact_file(&self, kind: &str) -> crate::Result<&str> {
        self.outputs()
            .get(kind)
            .copied()
            .ok_or_else(|| LocateError::MissingArtifact {
                kind: kind.to_string(),
            })
    }

    /// Name of the build target encoded in the context string.
    pub fn target(&self) -> crate::Result<&str> {
        target_from_context(&self.build.context)
            .ok_or_else(|| LocateError::MalformedContext(self.build.context.clone()))
    }

    /// Absolute output directory, with `base` being the descriptor's directory.
    pub fn output_dir(&self, base: &Path) -> crate::Result<PathBuf> {
        let mut dir = base.join(&self.build.output_dirs.outdir);
        if dir.as_os_str().is_empty() {
            dir = PathBuf::from(".");
        }

        std::path::absolute(&dir).map_err(|source| LocateError::ResolvePath { path: dir, source })
    }
}

/// Extract the target name from a `+`-delimited context string.
///
/// The target is the second segment, trimmed: `"proj+ my-target +debug"`
/// yields `"my-target"`. Returns `None` when the string contains no `+`.
pub fn target_from_context(context: &str) -> Option<&str> {
    context.split('+').nth(1).map(str::trim)
}

/// Read the descriptor at `path` and resolve the artifact of type `kind`.
pub fn parse_cbuild(path: &Path, kind: &str) -> crate::Result<Artifact> {
    let base = path.parent().unwrap_or(Path::new(""));
    let descriptor = BuildDescriptor::from_file(path)?;

    let output_dir = descriptor.output_dir(base)?;
    let file = descriptor.artifact_file(kind)?;
    let target = descriptor.target()?;

    debug!(
        cbuild = %path.display(),
        outdir = %output_dir.display(),
        file,
        target,
        "resolved build descriptor"
    );

    Ok(Artifact {
        path: output_dir.join(file),
        target: target.to_string(),
    })
}
