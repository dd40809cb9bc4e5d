//! Error types for cbuild-locate.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for cbuild-locate operations.
pub type Result<T> = std::result::Result<T, LocateError>;

/// Errors that can occur while resolving the latest build artifact.
///
/// The CLI renders every variant the same way (`Error: <message>`, exit 1);
/// the variants exist so library callers and verbose logs can tell them apart.
#[derive(Error, Debug, Diagnostic)]
pub enum LocateError {
    /// Failed to read the build index file.
    #[error("Failed to read build index {}: {source}", .path.display())]
    #[diagnostic(code(cbuild_locate::read_index))]
    ReadIndex {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The build index is not YAML or lacks `build-idx.cbuilds[].cbuild`.
    #[error("Failed to parse build index {}: {source}", .path.display())]
    #[diagnostic(
        code(cbuild_locate::parse_index),
        help("expected `build-idx: {{cbuilds: [{{cbuild: <path>}}]}}`")
    )]
    ParseIndex {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// The build index lists no builds.
    #[error("Build index {} lists no builds", .0.display())]
    #[diagnostic(
        code(cbuild_locate::empty_index),
        help("run the build at least once before locating its output")
    )]
    EmptyIndex(PathBuf),

    /// Failed to read the build descriptor file.
    #[error("Failed to read build descriptor {}: {source}", .path.display())]
    #[diagnostic(
        code(cbuild_locate::read_descriptor),
        help("relative `cbuild` entries are opened from the current directory")
    )]
    ReadDescriptor {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The build descriptor is not YAML or lacks a required key.
    #[error("Failed to parse build descriptor {}: {source}", .path.display())]
    #[diagnostic(
        code(cbuild_locate::parse_descriptor),
        help("expected `build` with `output-dirs.outdir`, `output` and `context`")
    )]
    ParseDescriptor {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// No output entry carries the requested type label.
    #[error("No output of type '{kind}' in build descriptor")]
    #[diagnostic(code(cbuild_locate::missing_artifact))]
    MissingArtifact { kind: String },

    /// The context string has no `+`-delimited target segment.
    #[error("Malformed build context '{0}': expected '<project>+<target>[+...]'")]
    #[diagnostic(code(cbuild_locate::malformed_context))]
    MalformedContext(String),

    /// The output directory could not be made absolute.
    #[error("Failed to resolve output directory {}: {source}", .path.display())]
    #[diagnostic(code(cbuild_locate::resolve_path))]
    ResolvePath {
        path: PathBuf,
        source: std::io::Error,
    },
}
