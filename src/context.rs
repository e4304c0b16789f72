//! Service context bundling the port trait objects.

use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::adapters::live::{TableResolver, WalkdirScanner};
use crate::adapters::recording::RecordingScanner;
use crate::adapters::replaying::ReplayingScanner;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::replayer::CassetteReplayer;
use crate::error::SrcfileError;
use crate::ports::{ProjectResolver, SourceScanner};
use crate::projects::ProjectTable;

/// Bundles the ports the manifest builder talks to.
///
/// Constructors wire up live, recording or replaying adapters; tests can
/// also assemble one from arbitrary implementations with [`ServiceContext::new`].
pub struct ServiceContext {
    /// Project identifier to source roots.
    pub resolver: Box<dyn ProjectResolver>,
    /// Source roots to file list.
    pub scanner: Box<dyn SourceScanner>,
}

impl ServiceContext {
    /// Assembles a context from explicit port implementations.
    #[must_use]
    pub fn new(resolver: Box<dyn ProjectResolver>, scanner: Box<dyn SourceScanner>) -> Self {
        Self { resolver, scanner }
    }

    /// Live context: `table` anchored at `working_dir`, scanning the disk.
    #[must_use]
    pub fn live(table: ProjectTable, working_dir: &Path, extensions: Vec<String>) -> Self {
        Self {
            resolver: Box::new(TableResolver::new(table, working_dir)),
            scanner: Box::new(WalkdirScanner::with_extensions(extensions)),
        }
    }

    /// Live context whose scanner results are also captured into `recorder`.
    ///
    /// Drop the context before finishing the recorder so the shared handle
    /// can be unwrapped.
    #[must_use]
    pub fn recording(
        table: ProjectTable,
        working_dir: &Path,
        extensions: Vec<String>,
        recorder: Arc<Mutex<CassetteRecorder>>,
    ) -> Self {
        let live = WalkdirScanner::with_extensions(extensions);
        Self {
            resolver: Box::new(TableResolver::new(table, working_dir)),
            scanner: Box::new(RecordingScanner::new(Box::new(live), recorder)),
        }
    }

    /// Context whose scanner replays the cassette at `path`.
    ///
    /// The resolver still uses `table`, so unknown projects fail the same way
    /// they do live.
    ///
    /// # Errors
    ///
    /// Returns [`SrcfileError::Cassette`] if the cassette cannot be loaded.
    pub fn replaying(
        path: &Path,
        table: ProjectTable,
        working_dir: &Path,
    ) -> Result<Self, SrcfileError> {
        let cassette = crate::cassette::load(path)?;
        Ok(Self {
            resolver: Box::new(TableResolver::new(table, working_dir)),
            scanner: Box::new(ReplayingScanner::new(CassetteReplayer::new(&cassette))),
        })
    }
}
