//! Locate the artifact of the most recent CMSIS build.
//!
//! This crate provides:
//! - Build index parsing (`*.cbuild-idx.yml`)
//! - Build descriptor parsing (`*.cbuild.yml`)
//! - Resolution of the latest build's artifact path and target name
//!
//! # Example
//!
//! ```yaml
//! # idx.yaml
//! build-idx:
//!   cbuilds:
//!     - cbuild: b/desc.yaml
//! ```
//!
//! ```yaml
//! # b/desc.yaml
//! build:
//!   context: proj+MyTarget+Debug
//!   output-dirs:
//!     outdir: out
//!   output:
//!     - type: bin
//!       file: app.elf
//! ```
//!
//! `locate("idx.yaml", "bin")` yields `<cwd>/b/out/app.elf` built by `MyTarget`.

mod artifact;
mod descriptor;
mod error;
mod index;

pub use artifact::Artifact;
pub use descriptor::{
    parse_cbuild, target_from_context, Build, BuildDescriptor, OutputDirs, OutputFile,
};
pub use error::{LocateError, Result};
pub use index::{latest_cbuild, BuildIndex, CbuildRef};

use std::path::Path;

/// Type label of the artifact looked up by default.
pub const DEFAULT_ARTIFACT_KIND: &str = "bin";

/// Resolve the artifact of type `kind` produced by the most recent build
/// listed in the index at `index_path`.
pub fn locate(index_path: impl AsRef<Path>, kind: &str) -> Result<Artifact> {
    let cbuild = latest_cbuild(index_path.as_ref())?;
    parse_cbuild(&cbuild, kind)
}
