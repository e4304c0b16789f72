//! Project resolver port: project identifier to source roots.

use std::path::PathBuf;

use crate::error::ResolveError;

/// Maps a project identifier to the directories that hold its sources.
///
/// Abstracting the lookup keeps the builder free of any global project
/// table and lets tests hand in a fixed set of roots.
pub trait ProjectResolver: Send + Sync {
    /// Returns the ordered list of source roots for `project`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NotFound`] if `project` is not recognized.
    fn resolve_roots(&self, project: &str) -> Result<Vec<PathBuf>, ResolveError>;

    /// Identifier of the JDK root project (usually `jdk`).
    fn root_project(&self) -> &str;
}
