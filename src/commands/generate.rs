//! Generate a source file descriptor and print it to stdout.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use crate::context::ServiceContext;
use crate::error::SrcfileError;
use crate::manifest::builder::build_manifest;
use crate::manifest::paths::normalize_lexically;
use crate::manifest::Manifest;

/// Builds the manifest for `project` and writes it to stdout.
///
/// Stdout is only touched once the whole document has been rendered.
///
/// # Errors
///
/// Returns any error from [`build_manifest`] or from writing stdout.
pub fn run(ctx: &ServiceContext, project: &str, working_dir: &Path) -> Result<(), SrcfileError> {
    let manifest = build_manifest(ctx, project, working_dir)?;
    emit(&manifest)
}

/// Writes a finished manifest to stdout.
///
/// # Errors
///
/// Returns [`SrcfileError::Serialize`] or [`SrcfileError::Output`].
pub fn emit(manifest: &Manifest) -> Result<(), SrcfileError> {
    manifest.write_to(io::stdout().lock())
}

/// Absolute, lexically normalized working directory.
///
/// `directory` defaults to the process's current directory; a relative one
/// is anchored at it. The directory itself is not checked for existence.
///
/// # Errors
///
/// Returns [`SrcfileError::WorkingDir`] if the current directory is needed
/// but cannot be determined.
pub fn working_dir(directory: Option<&Path>) -> Result<PathBuf, SrcfileError> {
    let dir = match directory {
        Some(dir) => std::path::absolute(dir).map_err(SrcfileError::WorkingDir)?,
        None => env::current_dir().map_err(SrcfileError::WorkingDir)?,
    };
    Ok(normalize_lexically(&dir))
}
