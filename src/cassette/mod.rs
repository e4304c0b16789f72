//! Cassettes: recorded scanner interactions for record/replay runs.

pub mod format;
pub mod recorder;
pub mod replayer;

use std::path::Path;

use crate::error::SrcfileError;
use format::Cassette;

/// Reads a cassette file from disk.
///
/// # Errors
///
/// Returns [`SrcfileError::Cassette`] if the file cannot be read or parsed.
pub fn load(path: &Path) -> Result<Cassette, SrcfileError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        SrcfileError::Cassette(format!("failed to read {}: {e}", path.display()))
    })?;
    serde_yaml::from_str(&content)
        .map_err(|e| SrcfileError::Cassette(format!("failed to parse {}: {e}", path.display())))
}
