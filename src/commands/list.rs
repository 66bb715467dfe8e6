//! List command implementation
//!
//! Read-only view of the configured descriptors and the jars they match,
//! with the artifact coordinates each jar would produce. Nothing is
//! installed and the manifest is not touched.

use std::path::PathBuf;

use console::Style;

use crate::artifact::ArtifactId;
use crate::cli::ListArgs;
use crate::error::Result;
use crate::project::Project;
use crate::scanner;

/// Run the list command
pub fn run(project_dir: Option<PathBuf>, args: ListArgs) -> Result<()> {
    let project = Project::locate(project_dir)?;

    let header = Style::new().green().bold();
    let dim = Style::new().dim();

    println!(
        "{} {} ({} resource(s))",
        header.apply_to("Project:"),
        project.manifest.artifact,
        project.manifest.resources.len()
    );

    for resource in &project.manifest.resources {
        println!();
        println!(
            "{} {} {}",
            header.apply_to("directory:"),
            resource.directory.display(),
            dim.apply_to(format!("(scope: {})", resource.scope))
        );

        let files = scanner::discover(resource, &project.root)?;
        if files.is_empty() {
            println!("  {}", dim.apply_to("no jars matched"));
            continue;
        }

        for jar in &files {
            let artifact = ArtifactId::for_jar(&project.manifest, jar, &resource.scope);
            if args.paths {
                println!("  {} {}", artifact.coordinates(), dim.apply_to(jar.display()));
            } else {
                println!("  {}", artifact.coordinates());
            }
        }
    }

    Ok(())
}
