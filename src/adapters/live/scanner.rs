//! Live scanner adapter using `walkdir`.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::ScanError;
use crate::ports::scanner::SourceScanner;

/// Walks source roots on disk.
///
/// Entries are visited sorted by file name so repeated runs over the same
/// tree list files in the same order. Symlinks are not followed.
#[derive(Debug, Clone, Default)]
pub struct WalkdirScanner {
    extensions: Vec<String>,
}

impl WalkdirScanner {
    /// Scanner that lists every regular file.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scanner that only lists files whose extension is one of `extensions`
    /// (compared case-sensitively, without the leading dot). An empty list
    /// disables filtering.
    #[must_use]
    pub fn with_extensions(extensions: Vec<String>) -> Self {
        Self { extensions }
    }

    fn accepts(&self, path: &Path) -> bool {
        self.extensions.is_empty()
            || path
                .extension()
                .and_then(OsStr::to_str)
                .is_some_and(|ext| self.extensions.iter().any(|wanted| wanted == ext))
    }

    fn scan_root(&self, root: &Path, files: &mut Vec<PathBuf>) -> Result<(), ScanError> {
        let before = files.len();
        for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
            let entry = entry.map_err(|err| ScanError::Io {
                path: err.path().unwrap_or(root).to_path_buf(),
                source: err.into(),
            })?;
            if entry.file_type().is_file() && self.accepts(entry.path()) {
                files.push(entry.into_path());
            }
        }
        debug!(root = %root.display(), files = files.len() - before, "scanned source root");
        Ok(())
    }
}

impl SourceScanner for WalkdirScanner {
    fn scan(&self, roots: &[PathBuf]) -> Result<Vec<PathBuf>, ScanError> {
        let mut files = Vec::new();
        for root in roots {
            self.scan_root(root, &mut files)?;
        }
        Ok(files)
    }
}
