//! CLI argument definitions
//!
//! Clap derive structs for `elmdocs` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use elmdocs_markdown::OperatorStyle;

use crate::observability::LogFormat;

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "DOCS.md";

/// Default compiler program.
pub const DEFAULT_COMPILER: &str = "elm-make";

// ============================================================================
// Root CLI
// ============================================================================

/// Generate a Markdown API reference for an Elm package.
///
/// Runs the compiler in docs mode inside the project directory and writes
/// every exposed module's documentation into one Markdown file.
#[derive(Parser, Debug)]
#[command(name = "elmdocs", author, version, about)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Print version.
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Output file, relative to the project directory.
    #[arg(short, long, default_value = DEFAULT_OUTPUT, value_name = "FILE")]
    pub output: PathBuf,

    /// Read an existing docs JSON file instead of running the compiler.
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Project directory containing `elm-package.json`.
    #[arg(short = 'C', long = "project", default_value = ".", value_name = "DIR")]
    pub project_dir: PathBuf,

    /// Compiler program to invoke.
    #[arg(long, default_value = DEFAULT_COMPILER, value_name = "PROGRAM")]
    pub compiler: String,

    /// How operator names are displayed.
    #[arg(long, default_value = "bare")]
    pub operator_style: OperatorStyle,

    /// Increase log verbosity (--verbose info, twice debug, three times trace).
    #[arg(long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long, default_value = "human")]
    pub log_format: LogFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["elmdocs"]).unwrap();
        assert_eq!(cli.output, PathBuf::from("DOCS.md"));
        assert_eq!(cli.project_dir, PathBuf::from("."));
        assert_eq!(cli.compiler, "elm-make");
        assert_eq!(cli.operator_style, OperatorStyle::Bare);
        assert!(cli.input.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
        assert_eq!(cli.color, ColorChoice::Auto);
        assert_eq!(cli.log_format, LogFormat::Human);
    }

    #[test]
    fn test_output_short_and_long() {
        let short = Cli::try_parse_from(["elmdocs", "-o", "API.md"]).unwrap();
        assert_eq!(short.output, PathBuf::from("API.md"));
        let long = Cli::try_parse_from(["elmdocs", "--output", "API.md"]).unwrap();
        assert_eq!(long.output, PathBuf::from("API.md"));
    }

    #[test]
    fn test_help_output() {
        for flag in ["-h", "--help"] {
            let err = Cli::try_parse_from(["elmdocs", flag]).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        }
    }

    #[test]
    fn test_version_output() {
        for flag in ["-v", "--version"] {
            let err = Cli::try_parse_from(["elmdocs", flag]).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
        }
    }

    #[test]
    fn test_input_and_project() {
        let cli =
            Cli::try_parse_from(["elmdocs", "-i", "docs.json", "-C", "pkg", "--compiler", "elm"])
                .unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("docs.json")));
        assert_eq!(cli.project_dir, PathBuf::from("pkg"));
        assert_eq!(cli.compiler, "elm");
    }

    #[test]
    fn test_operator_styles_parse() {
        let cli = Cli::try_parse_from(["elmdocs", "--operator-style", "decorated"]).unwrap();
        assert_eq!(cli.operator_style, OperatorStyle::Decorated);
        assert!(Cli::try_parse_from(["elmdocs", "--operator-style", "fancy"]).is_err());
    }

    #[test]
    fn test_verbose_count() {
        let cli = Cli::try_parse_from(["elmdocs", "--verbose", "--verbose", "--verbose"]).unwrap();
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_color_choices_parse() {
        for variant in ["auto", "always", "never"] {
            let cli = Cli::try_parse_from(["elmdocs", "--color", variant]);
            assert!(cli.is_ok(), "Failed to parse color={variant}");
        }
    }

    #[test]
    fn test_log_format_json() {
        let cli = Cli::try_parse_from(["elmdocs", "--log-format", "json", "--quiet"]).unwrap();
        assert_eq!(cli.log_format, LogFormat::Json);
        assert!(cli.quiet);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let err = Cli::try_parse_from(["elmdocs", "--bogus"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }
}
