//! addjars - local jar dependency synchronizer
//!
//! Scans directories configured in the project manifest for jar files,
//! installs each one as a synthetic artifact into the local repository,
//! and regenerates the manifest so downstream build phases see the added
//! dependencies.

use clap::Parser;

mod artifact;
mod cli;
mod commands;
mod error;
mod manifest;
mod progress;
mod project;
mod repository;
mod resource;
mod scanner;
mod stamp;
mod sync;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Sync(args) => commands::sync::run(cli.project, args, cli.verbose),
        Commands::List(args) => commands::list::run(cli.project, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
