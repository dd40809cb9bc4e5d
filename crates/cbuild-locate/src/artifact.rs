//! The resolved build artifact.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A produced file together with the target that built it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// Absolute path to the file.
    pub path: PathBuf,

    /// Build target name, e.g. `AppKit-E7-U55`.
    pub target: String,
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.path.display(), self.target)
    }
}
