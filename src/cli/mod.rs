//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - plan: Plan command arguments
//! - list: List command arguments
//! - script: Script command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod list;
pub mod plan;
pub mod script;

pub use completions::CompletionsArgs;
pub use list::ListArgs;
pub use plan::PlanArgs;
pub use script::ScriptArgs;

/// remok - old kernel removal planner
///
/// Find installed kernel versions and write a script purging the old ones.
#[derive(Parser, Debug)]
#[command(
    name = "remok",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Plan the removal of old Linux kernel packages",
    long_about = "remok groups installed linux-headers, linux-image, linux-modules and \
                  linux-modules-extra packages by kernel version, keeps the most recent \
                  versions, and writes an 'apt purge' script for complete older versions. \
                  It never removes anything itself.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  remok plan                            \x1b[90m# Show what would be kept and removed\x1b[0m\n   \
                  remok list --detailed                 \x1b[90m# Show every kernel and its packages\x1b[0m\n   \
                  remok script                          \x1b[90m# Write the removal script\x1b[0m\n   \
                  remok script -o /tmp/kernel_remove    \x1b[90m# Write the script elsewhere\x1b[0m\n   \
                  remok --listing pkgs.txt plan         \x1b[90m# Plan from a saved package listing\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Configuration file (defaults to <config dir>/remok/config.yaml)
    #[arg(long, short = 'c', global = true, env = "REMOK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Read package names from a file instead of querying dpkg
    #[arg(long, short = 'l', global = true, env = "REMOK_LISTING")]
    pub listing: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show which kernels are kept and which are removed
    Plan(PlanArgs),

    /// List installed kernels with their completeness
    List(ListArgs),

    /// Write the removal script
    Script(ScriptArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_plan() {
        let cli = Cli::try_parse_from(["remok", "plan"]).unwrap();
        assert!(matches!(cli.command, Commands::Plan(_)));
    }

    #[test]
    fn test_cli_parsing_list_json() {
        let cli = Cli::try_parse_from(["remok", "list", "--json"]).unwrap();
        match cli.command {
            Commands::List(args) => {
                assert!(args.json);
                assert!(!args.detailed);
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_parsing_script_output() {
        let cli = Cli::try_parse_from(["remok", "script", "-o", "/tmp/kernel_remove"]).unwrap();
        match cli.command {
            Commands::Script(args) => {
                assert_eq!(args.output, Some(PathBuf::from("/tmp/kernel_remove")));
            }
            _ => panic!("Expected Script command"),
        }
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["remok", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_global_options() {
        let cli = Cli::try_parse_from([
            "remok",
            "-v",
            "--listing",
            "/tmp/listing.txt",
            "-c",
            "/tmp/config.yaml",
            "plan",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.listing, Some(PathBuf::from("/tmp/listing.txt")));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/config.yaml")));
    }

    #[test]
    fn test_cli_global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["remok", "plan", "-v", "-l", "/tmp/listing.txt"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.listing, Some(PathBuf::from("/tmp/listing.txt")));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["remok"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
