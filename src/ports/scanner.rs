//! Source scanner port: source roots to a flat file list.

use std::path::PathBuf;

use crate::error::ScanError;

/// Enumerates every file below a set of source roots.
///
/// Implementations must be deterministic for an unchanged filesystem. The
/// builder keeps whatever order is returned here.
pub trait SourceScanner: Send + Sync {
    /// Walks each root recursively, in the order given, and returns the
    /// paths of the files found.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError`] if a root is missing or cannot be read.
    fn scan(&self, roots: &[PathBuf]) -> Result<Vec<PathBuf>, ScanError>;
}
