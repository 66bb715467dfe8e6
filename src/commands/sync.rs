//! Sync command implementation
//!
//! Loads the project, runs the synchronizer against the local repository
//! and prints a summary. On success the project's effective manifest is
//! the generated one under the build directory.

use std::path::PathBuf;

use console::style;

use crate::cli::SyncArgs;
use crate::error::{AddJarsError, Result};
use crate::project::Project;
use crate::repository::LocalRepository;
use crate::sync::Synchronizer;

/// Run the sync command
pub fn run(project_dir: Option<PathBuf>, args: SyncArgs, verbose: bool) -> Result<()> {
    let mut project = Project::locate(project_dir)?;

    if project.manifest.resources.is_empty() {
        return Err(AddJarsError::ConfigInvalid {
            message: "No jar resources configured in the project manifest".to_string(),
        });
    }

    let repository = match args.repository {
        Some(root) => LocalRepository::new(root),
        None => LocalRepository::open_default()?,
    };

    let synchronizer = Synchronizer::with_dry_run(&repository, args.dry_run);
    let report = synchronizer.run(&mut project)?;

    if report.total() == 0 {
        println!("No jars matched the configured resources");
        if args.dry_run {
            return Ok(());
        }
    }

    if args.dry_run {
        println!(
            "Dry run: {} jar(s) would be installed, {} up to date",
            report.installed.len(),
            report.cached.len()
        );
        for artifact in &report.installed {
            println!("  {} ({})", artifact.coordinates(), artifact.scope);
        }
        return Ok(());
    }

    println!(
        "{} {} artifact(s) installed, {} up to date",
        style("Synchronized:").green().bold(),
        report.installed.len(),
        report.cached.len()
    );
    if verbose {
        println!("Repository: {}", repository.root().display());
        for artifact in &report.installed {
            println!("  + {} ({})", artifact.coordinates(), artifact.scope);
        }
        for artifact in &report.cached {
            println!("  = {} ({})", artifact.coordinates(), artifact.scope);
        }
    }
    println!("Effective manifest: {}", project.file.display());

    Ok(())
}
