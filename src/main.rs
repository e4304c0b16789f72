//! Binary entrypoint for `jdk-srcfile`.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use jdk_srcfile::SrcfileError;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "JDK_SRCFILE_LOG";

fn main() -> ExitCode {
    // A missing .env is fine; a broken one is reported and skipped.
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            eprintln!("jdk-srcfile: ignoring .env: {err}");
        }
    }

    // Logs go to stderr; stdout carries only the manifest.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    match jdk_srcfile::run(std::env::args_os()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(SrcfileError::Usage(usage)) => {
            eprint!("{usage}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("jdk-srcfile: {err}");
            ExitCode::FAILURE
        }
    }
}
