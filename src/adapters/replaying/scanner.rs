//! Replaying adapter for the `SourceScanner` port.

use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use crate::adapters::recording::scanner::PORT;
use crate::cassette::replayer::CassetteReplayer;
use crate::error::ScanError;
use crate::ports::SourceScanner;

/// Answers scans from a cassette instead of the filesystem.
///
/// The roots passed in are ignored; calls are matched purely by order.
pub struct ReplayingScanner {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingScanner {
    /// Creates a scanner serving interactions from `replayer`.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl SourceScanner for ReplayingScanner {
    fn scan(&self, _roots: &[PathBuf]) -> Result<Vec<PathBuf>, ScanError> {
        let output = self
            .replayer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .next_interaction(PORT, "scan")
            .output;

        if let Some(err) = output.get("err") {
            return Err(ScanError::Replayed(err.as_str().unwrap_or("unknown error").to_string()));
        }
        let value = output.get("ok").cloned().unwrap_or(output);
        serde_json::from_value(value)
            .map_err(|e| ScanError::Replayed(format!("unreadable scan result: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    fn scanner(outputs: Vec<serde_json::Value>) -> ReplayingScanner {
        let interactions = outputs
            .into_iter()
            .zip(0..)
            .map(|(output, seq)| Interaction {
                seq,
                port: "scanner".into(),
                method: "scan".into(),
                input: json!({"roots": ["/src/jdk"]}),
                output,
            })
            .collect();
        let cassette = Cassette { name: "test".into(), recorded_at: Utc::now(), interactions };
        ReplayingScanner::new(CassetteReplayer::new(&cassette))
    }

    #[test]
    fn replays_recorded_files() {
        let scanner = scanner(vec![json!({"ok": ["/src/jdk/A.java", "/src/jdk/pkg/B.java"]})]);
        let files = scanner.scan(&[]).unwrap();
        assert_eq!(
            files,
            vec![PathBuf::from("/src/jdk/A.java"), PathBuf::from("/src/jdk/pkg/B.java")]
        );
    }

    #[test]
    fn replays_recorded_failure() {
        let scanner = scanner(vec![json!({"err": "failed to scan /src/jdk: denied"})]);
        let err = scanner.scan(&[]).unwrap_err();
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn malformed_payload_is_an_error() {
        let scanner = scanner(vec![json!({"ok": 42})]);
        assert!(matches!(scanner.scan(&[]), Err(ScanError::Replayed(_))));
    }
}
