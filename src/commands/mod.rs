//! Command handlers.

pub mod generate;

use std::env;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing::{info, warn};

use crate::cassette::recorder::CassetteRecorder;
use crate::cli::Cli;
use crate::context::ServiceContext;
use crate::error::SrcfileError;
use crate::manifest::builder::build_manifest;
use crate::projects::ProjectTable;

/// Environment variable naming a cassette file to record scans into.
pub const RECORD_ENV: &str = "JDK_SRCFILE_RECORD";

/// Sets up the service context for `cli` and runs generation.
///
/// When `JDK_SRCFILE_RECORD` is set to a file path, the scanner's results
/// are recorded to a cassette at that path. The cassette is saved before the
/// manifest reaches stdout, and is still attempted when generation fails.
///
/// # Errors
///
/// Returns the first error from loading the project table, determining the
/// working directory, or generating the manifest. A generation error is
/// returned unchanged even if the cassette could not be saved as well. A
/// cassette failure after a successful build is returned before anything is
/// written to stdout.
pub fn dispatch(cli: &Cli) -> Result<(), SrcfileError> {
    let working_dir = generate::working_dir(cli.directory.as_deref())?;
    let table = match &cli.projects {
        Some(path) => ProjectTable::load(path)?,
        None => ProjectTable::openjdk_default(),
    };
    let extensions = cli.extensions.clone();

    let Ok(record_path) = env::var(RECORD_ENV) else {
        let ctx = ServiceContext::live(table, &working_dir, extensions);
        return generate::run(&ctx, &cli.project, &working_dir);
    };

    let recorder =
        Arc::new(Mutex::new(CassetteRecorder::new(PathBuf::from(record_path), &cli.project)));
    let ctx =
        ServiceContext::recording(table, &working_dir, extensions, Arc::clone(&recorder));
    let built = build_manifest(&ctx, &cli.project, &working_dir);

    // Release the context's handle on the recorder before unwrapping it.
    drop(ctx);
    let saved = finish_recording(recorder);

    let manifest = match built {
        Ok(manifest) => manifest,
        Err(err) => {
            if let Err(cassette_err) = saved {
                warn!(error = %cassette_err, "recording not saved");
            }
            return Err(err);
        }
    };
    saved?;
    generate::emit(&manifest)
}

/// Writes the recorded cassette to disk.
fn finish_recording(recorder: Arc<Mutex<CassetteRecorder>>) -> Result<(), SrcfileError> {
    let recorder = Arc::try_unwrap(recorder)
        .map_err(|_| SrcfileError::Cassette("recorder is still in use".into()))?
        .into_inner()
        .map_err(|e| SrcfileError::Cassette(format!("recorder lock poisoned: {e}")))?;
    let interactions = recorder.len();
    let path = recorder.finish()?;
    info!(path = %path.display(), interactions, "recording saved");
    Ok(())
}
