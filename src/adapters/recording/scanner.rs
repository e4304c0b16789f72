//! Recording adapter for the `SourceScanner` port.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;
use crate::error::ScanError;
use crate::ports::SourceScanner;

/// Port name used in cassettes for scanner interactions.
pub(crate) const PORT: &str = "scanner";

/// Delegates to an inner scanner and records every call and its result.
pub struct RecordingScanner {
    inner: Box<dyn SourceScanner>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingScanner {
    /// Wraps `inner`, writing interactions into `recorder`.
    pub fn new(inner: Box<dyn SourceScanner>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct ScanInput<'a> {
    roots: &'a [PathBuf],
}

impl SourceScanner for RecordingScanner {
    fn scan(&self, roots: &[PathBuf]) -> Result<Vec<PathBuf>, ScanError> {
        let result = self.inner.scan(roots);
        self.recorder.lock().unwrap_or_else(PoisonError::into_inner).record_result(
            PORT,
            "scan",
            &ScanInput { roots },
            &result,
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::WalkdirScanner;
    use serde_json::json;

    #[test]
    fn records_successful_and_failed_scans() {
        let dir = std::env::temp_dir().join("jdk_srcfile_rec_scanner");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(dir.join("src")).unwrap();
        std::fs::write(dir.join("src/A.java"), "").unwrap();
        let cassette_path = dir.join("scan.cassette.yaml");

        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&cassette_path, "test")));
        {
            let scanner =
                RecordingScanner::new(Box::new(WalkdirScanner::new()), Arc::clone(&recorder));
            assert_eq!(scanner.scan(&[dir.join("src")]).unwrap(), vec![dir.join("src/A.java")]);
            assert!(scanner.scan(&[dir.join("missing")]).is_err());
        }

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();

        let cassette = crate::cassette::load(&cassette_path).unwrap();
        assert_eq!(cassette.interactions.len(), 2);
        assert_eq!(cassette.interactions[0].port, "scanner");
        assert_eq!(cassette.interactions[0].method, "scan");
        assert_eq!(
            cassette.interactions[0].output,
            json!({"ok": [dir.join("src/A.java").display().to_string()]})
        );
        assert!(cassette.interactions[1].output.get("err").is_some());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
