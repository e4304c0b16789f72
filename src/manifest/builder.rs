//! Manifest construction: resolve, scan, relativize, assemble.

use std::path::Path;

use tracing::{debug, info};

use crate::context::ServiceContext;
use crate::error::SrcfileError;
use crate::manifest::paths::relativize;
use crate::manifest::{Manifest, ProjectMarker, SourceUnit};

/// Builds the source file descriptor for `project`.
///
/// Roots come from `ctx.resolver`, files from `ctx.scanner` in the order it
/// returns them, and every file is expressed relative to `working_dir`. The
/// first failure aborts the build; no partial manifest is ever returned.
///
/// # Errors
///
/// Returns [`SrcfileError::Resolve`] for an unknown project,
/// [`SrcfileError::Scan`] if scanning fails, and
/// [`SrcfileError::PathMismatch`] / [`SrcfileError::NonUtf8Path`] if a
/// scanned file cannot be expressed relative to `working_dir`.
pub fn build_manifest(
    ctx: &ServiceContext,
    project: &str,
    working_dir: &Path,
) -> Result<Manifest, SrcfileError> {
    let marker = ProjectMarker::for_project(project, ctx.resolver.root_project());

    let roots = ctx.resolver.resolve_roots(project)?;
    debug!(project, roots = ?roots, "resolved source roots");

    let scanned = ctx.scanner.scan(&roots)?;

    let files = scanned
        .iter()
        .map(|path| relativize(path, working_dir))
        .collect::<Result<Vec<_>, _>>()?;

    info!(project, marker = ?marker, files = files.len(), "built source unit");
    Ok(Manifest::single(SourceUnit::java(project, files, marker)))
}
