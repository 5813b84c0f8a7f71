//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;

/// kompat - publish Kubernetes compatibility matrices from a YAML source of truth
///
/// Reads one or more compatibility documents (local files or URLs), validates
/// every version field, and renders the support matrix as a table, Markdown,
/// JSON, or YAML.
#[derive(Parser, Debug)]
#[command(
    name = "kompat",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "KOMPAT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (config file default applies when omitted)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch, validate, and render compatibility documents
    Get(GetArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the get command
#[derive(Parser, Debug)]
pub struct GetArgs {
    /// File paths or URLs of compatibility documents
    #[arg(value_name = "SOURCE")]
    pub sources: Vec<String>,

    /// Show only the newest N Kubernetes version columns
    #[arg(long, value_name = "N")]
    pub last: Option<usize>,

    /// Show only the column for this Kubernetes version
    #[arg(long, value_name = "VERSION")]
    pub k8s_version: Option<String>,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Borderless table of the parsed entries
    Table,
    /// Table with additional wide-only columns
    Wide,
    /// Markdown support matrix
    Markdown,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_get_parsing() {
        let cli = Cli::parse_from([
            "kompat",
            "-o",
            "markdown",
            "get",
            "compatibility.yaml",
            "--last",
            "3",
        ]);
        assert_eq!(cli.output, Some(OutputFormat::Markdown));
        match cli.command {
            Commands::Get(args) => {
                assert_eq!(args.sources, vec!["compatibility.yaml"]);
                assert_eq!(args.last, Some(3));
                assert_eq!(args.k8s_version, None);
            }
            other => panic!("expected get command, got {other:?}"),
        }
    }

    #[test]
    fn test_verbosity_level() {
        let cli = Cli::parse_from(["kompat", "-vv", "get"]);
        assert_eq!(cli.verbosity_level(), 2);

        let quiet = Cli::parse_from(["kompat", "--quiet", "get"]);
        assert_eq!(quiet.verbosity_level(), 0);
    }
}
