//! Accumulates interactions and writes them out as a YAML cassette.

use std::path::PathBuf;

use chrono::Utc;
use serde::Serialize;

use super::format::{Cassette, Interaction};
use crate::error::SrcfileError;

/// Records interactions in memory until [`CassetteRecorder::finish`].
#[derive(Debug)]
pub struct CassetteRecorder {
    path: PathBuf,
    name: String,
    interactions: Vec<Interaction>,
}

impl CassetteRecorder {
    /// Creates a recorder that will write to `path`.
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self { path: path.into(), name: name.into(), interactions: Vec::new() }
    }

    /// Appends an interaction; `seq` is assigned from the current count.
    pub fn record(
        &mut self,
        port: &str,
        method: &str,
        input: serde_json::Value,
        output: serde_json::Value,
    ) {
        let seq = self.interactions.len() as u64;
        self.interactions.push(Interaction {
            seq,
            port: port.to_string(),
            method: method.to_string(),
            input,
            output,
        });
    }

    /// Appends a `Result` using the `{"ok": ..}` / `{"err": ".."}` convention.
    ///
    /// A value that cannot be converted to JSON is recorded as an error
    /// entry so that replay fails loudly instead of returning bad data.
    pub fn record_result<I, T, E>(
        &mut self,
        port: &str,
        method: &str,
        input: &I,
        result: &Result<T, E>,
    ) where
        I: Serialize,
        T: Serialize,
        E: std::fmt::Display,
    {
        let input = serde_json::to_value(input)
            .unwrap_or_else(|e| serde_json::json!({ "unserializable": e.to_string() }));
        let output = match result {
            Ok(value) => match serde_json::to_value(value) {
                Ok(value) => serde_json::json!({ "ok": value }),
                Err(e) => serde_json::json!({ "err": format!("unserializable result: {e}") }),
            },
            Err(e) => serde_json::json!({ "err": e.to_string() }),
        };
        self.record(port, method, input, output);
    }

    /// Number of interactions recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.interactions.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.interactions.is_empty()
    }

    /// Writes the cassette and returns the path it was written to.
    ///
    /// # Errors
    ///
    /// Returns [`SrcfileError::Cassette`] if serialization or the write fails.
    pub fn finish(self) -> Result<PathBuf, SrcfileError> {
        let cassette =
            Cassette { name: self.name, recorded_at: Utc::now(), interactions: self.interactions };
        let yaml = serde_yaml::to_string(&cassette)
            .map_err(|e| SrcfileError::Cassette(format!("failed to serialize cassette: {e}")))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                SrcfileError::Cassette(format!("failed to create {}: {e}", parent.display()))
            })?;
        }
        std::fs::write(&self.path, yaml).map_err(|e| {
            SrcfileError::Cassette(format!("failed to write {}: {e}", self.path.display()))
        })?;
        Ok(self.path)
    }
}
