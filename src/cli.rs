//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Command line of `jdk-srcfile`.
#[derive(Debug, Parser)]
#[command(
    name = "jdk-srcfile",
    version,
    about = "Generate a source file descriptor for an OpenJDK project",
    arg_required_else_help = true,
    after_help = "PROJECT may be jdk, langtools, nashorn (or any id listed in --projects)"
)]
pub struct Cli {
    /// Project to describe.
    #[arg(value_name = "PROJECT")]
    pub project: String,

    /// Directory file paths are made relative to (defaults to the current directory).
    #[arg(value_name = "DIRECTORY")]
    pub directory: Option<PathBuf>,

    /// YAML project table replacing the built-in OpenJDK layout.
    #[arg(long, value_name = "FILE", env = "JDK_SRCFILE_PROJECTS")]
    pub projects: Option<PathBuf>,

    /// Only list files with this extension (repeatable, without the dot).
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::error::ErrorKind;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn parses_project_only() {
        let cli = Cli::try_parse_from(["jdk-srcfile", "jdk"]).unwrap();
        assert_eq!(cli.project, "jdk");
        assert!(cli.directory.is_none());
        assert!(cli.extensions.is_empty());
    }

    #[test]
    fn parses_project_and_directory() {
        let cli = Cli::try_parse_from(["jdk-srcfile", "langtools", "/src"]).unwrap();
        assert_eq!(cli.project, "langtools");
        assert_eq!(cli.directory, Some(PathBuf::from("/src")));
    }

    #[test]
    fn parses_repeated_extensions() {
        let cli =
            Cli::try_parse_from(["jdk-srcfile", "--ext", "java", "--ext", "properties", "nashorn"])
                .unwrap();
        assert_eq!(cli.extensions, vec!["java", "properties"]);
    }

    #[test]
    fn no_arguments_is_a_usage_error() {
        let err = Cli::try_parse_from(["jdk-srcfile"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand);
    }

    #[test]
    fn rejects_extra_positionals() {
        assert!(Cli::try_parse_from(["jdk-srcfile", "jdk", "/src", "extra"]).is_err());
    }
}
