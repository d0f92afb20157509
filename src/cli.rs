//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "stylecheck",
    version,
    about = "Recursive source-tree style linter",
    long_about = "stylecheck — walk a directory tree and flag style violations (tabs, trailing whitespace, spacing conventions) by pattern matching raw file text.\n\nInvoked with no arguments it checks the current working directory.\n\nConfiguration precedence: CLI > stylecheck.toml > defaults.",
    after_help = "Examples:\n  stylecheck\n  stylecheck check --root ../engine --output json\n  stylecheck rules"
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,
}

#[derive(Subcommand)]
/// Supported subcommands. Omitting the subcommand runs `check`.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current stylecheck version.")]
    Version,
    /// Scan a tree for style violations
    #[command(
        about = "Run the style scan",
        long_about = "Walk every regular file under the root, skip ignored paths, and run the pattern rules. Exits 1 when violations were found.",
        after_help = "Examples:\n  stylecheck check\n  stylecheck check --root src --output json"
    )]
    Check {
        #[arg(long, help = "Scan root (default: current dir)")]
        root: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// Print the effective rule tables
    #[command(
        about = "Show effective rules",
        long_about = "Print the rule tiers, ignore list, and source extension set after applying configuration."
    )]
    Rules {
        #[arg(long, help = "Scan root (default: current dir)")]
        root: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}
