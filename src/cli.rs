//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// addjars - local jar dependency synchronizer
#[derive(Parser, Debug)]
#[command(
    name = "addjars",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Add local jar files to a project's dependency set",
    long_about = "addjars scans configured directories for jar files, installs each one \
                  as a synthetic artifact into the local repository, and regenerates the \
                  project manifest so the build sees them as ordinary dependencies.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  addjars sync\n    \
                  addjars sync --dry-run\n    \
                  addjars list --paths\n    \
                  addjars completions zsh"
)]
pub struct Cli {
    /// Project directory (defaults to searching upward from the current directory)
    #[arg(long, short = 'p', global = true)]
    pub project: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Synchronize configured jar directories into the dependency set
    Sync(SyncArgs),

    /// List configured resources and the jars they match
    List(ListArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the sync command
#[derive(Parser, Debug)]
pub struct SyncArgs {
    /// Discover and report without installing or rewriting the manifest
    #[arg(long)]
    pub dry_run: bool,

    /// Local repository directory (overrides ADDJARS_REPOSITORY_DIR and the
    /// platform default)
    #[arg(long)]
    pub repository: Option<PathBuf>,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Show full canonical paths for matched jars
    #[arg(long)]
    pub paths: bool,
}

/// Arguments for the completions command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
