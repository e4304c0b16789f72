//! Error types for source file descriptor generation.

use std::path::PathBuf;

/// Failure raised by a [`ProjectResolver`](crate::ports::ProjectResolver).
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The project identifier is not present in the project table.
    #[error("unknown project '{project}'. Known projects: [{known}]")]
    NotFound {
        /// The identifier that was looked up.
        project: String,
        /// Comma separated list of the identifiers the table does know.
        known: String,
    },
}

/// Failure raised by a [`SourceScanner`](crate::ports::SourceScanner).
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// A source root (or something below it) could not be read.
    #[error("failed to scan {}: {source}", path.display())]
    Io {
        /// The path that could not be read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A replayed scan carried a recorded failure or an unreadable payload.
    #[error("replayed scan failed: {0}")]
    Replayed(String),
}

/// Top-level error for a single generator invocation.
///
/// Every variant is fatal. Nothing is written to stdout once one of these
/// has been produced.
#[derive(Debug, thiserror::Error)]
pub enum SrcfileError {
    /// Command line could not be parsed; holds the rendered usage message.
    #[error("{0}")]
    Usage(String),

    /// The project could not be resolved to source roots.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Scanning the source roots failed.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// A scanned file does not live under the working directory.
    #[error("{} is not under the working directory {}", path.display(), working_dir.display())]
    PathMismatch {
        /// The scanned path.
        path: PathBuf,
        /// The working directory paths are made relative to.
        working_dir: PathBuf,
    },

    /// A scanned file path cannot be written as UTF-8 text.
    #[error("path is not valid UTF-8: {}", path.display())]
    NonUtf8Path {
        /// The offending path.
        path: PathBuf,
    },

    /// The project table is unreadable, malformed or inconsistent.
    #[error("invalid project table ({origin}): {reason}")]
    Config {
        /// Where the table came from (a file path or "built-in").
        origin: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The working directory could not be determined.
    #[error("failed to determine working directory: {0}")]
    WorkingDir(#[source] std::io::Error),

    /// The manifest could not be rendered as JSON.
    #[error("failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing the manifest (or help text) to stdout failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// A scan cassette could not be read or written.
    #[error("cassette error: {0}")]
    Cassette(String),
}
