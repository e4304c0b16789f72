//! Source file descriptor generator for OpenJDK projects.
//!
//! Resolves a project to its source roots, scans them, and emits one srclib
//! Srcfile JSON document listing every file relative to a working
//! directory. The unit carries a marker telling downstream tools whether it
//! is the JDK itself or a project built on it, and the scanner list is
//! empty so the file list is taken as final.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod context;
pub mod error;
pub mod manifest;
pub mod ports;
pub mod projects;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

pub use error::SrcfileError;

/// Run the CLI with the provided arguments.
///
/// `--help` and `--version` print to stdout and succeed. With no arguments
/// at all the help text is the usage error, whatever the environment
/// supplies for optional flags.
///
/// # Errors
///
/// Returns [`SrcfileError::Usage`] when argument parsing fails, otherwise
/// whatever generation fails with.
pub fn run<I, T>(args: I) -> Result<(), SrcfileError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let args: Vec<std::ffi::OsString> = args.into_iter().map(Into::into).collect();
    if args.len() <= 1 {
        return Err(SrcfileError::Usage(cli::Cli::command().render_help().to_string()));
    }

    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            return Ok(());
        }
        Err(err) => return Err(SrcfileError::Usage(err.render().to_string())),
    };
    commands::dispatch(&cli)
}
