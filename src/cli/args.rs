//! CLI argument parsing using clap

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "bumpctl",
    about = "Check the working tree and drive an external version bump tool",
    version,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub operation: Operation,

    #[arg(short, long, global = true, help = "Custom configuration file path")]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Log debug details to stderr")]
    pub verbose: bool,
}

/// Options shared by the bump operations
#[derive(Args, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BumpArgs {
    /// Check the tree and print the tool command without running it
    #[arg(long)]
    pub dry_run: bool,
}

/// Available operations
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Show available operations
    Help,

    /// Fail if the working tree has uncommitted or untracked changes
    CheckClean,

    /// Show the current version and the possible next versions
    ShowBump,

    /// Print the current version
    Version,

    /// Bump the patch version (requires a clean working tree)
    BumpPatch(BumpArgs),

    /// Bump the minor version (requires a clean working tree)
    BumpMinor(BumpArgs),

    /// Bump the major version (requires a clean working tree)
    BumpMajor(BumpArgs),
}

/// Operation names with their one-line descriptions, in declaration order.
pub fn operations() -> Vec<(String, String)> {
    Cli::command()
        .get_subcommands()
        .map(|sub| {
            let about = sub.get_about().map(|a| a.to_string()).unwrap_or_default();
            (sub.get_name().to_string(), about)
        })
        .collect()
}
