//! Artifact synchronization pipeline
//!
//! One run performs the whole discovery, install and manifest-rewrite
//! sequence:
//! 1. Ensure the working directory under the build directory exists.
//! 2. For each descriptor, for each discovered jar in scanner order,
//!    derive the synthetic artifact, install it into the repository when
//!    its stamp is out of date, and append a dependency entry.
//! 3. Write the mutated manifest into the working directory and rebind the
//!    project's effective manifest to it.
//!
//! The pipeline is strictly sequential; idempotence across runs comes from
//! the stamp comparison alone.

use std::fs;
use std::path::Path;

use crate::artifact::ArtifactId;
use crate::error::Result;
use crate::manifest::{self, ArtifactDescriptor, Dependency, MANIFEST_FILE};
use crate::progress::ProgressDisplay;
use crate::project::Project;
use crate::repository::ArtifactInstaller;
use crate::scanner;
use crate::stamp::StampStore;

/// Outcome of one synchronization run
#[derive(Debug, Default)]
pub struct SyncReport {
    /// Artifacts installed (or, in a dry run, that would be installed)
    pub installed: Vec<ArtifactId>,

    /// Artifacts whose stamps were already current
    pub cached: Vec<ArtifactId>,
}

impl SyncReport {
    /// Total number of artifacts processed
    pub fn total(&self) -> usize {
        self.installed.len() + self.cached.len()
    }
}

/// The synchronization orchestrator
pub struct Synchronizer<'a> {
    installer: &'a dyn ArtifactInstaller,
    dry_run: bool,
}

impl<'a> Synchronizer<'a> {
    pub fn new(installer: &'a dyn ArtifactInstaller) -> Self {
        Self {
            installer,
            dry_run: false,
        }
    }

    /// A dry run discovers and classifies but neither installs nor writes
    pub fn with_dry_run(installer: &'a dyn ArtifactInstaller, dry_run: bool) -> Self {
        Self { installer, dry_run }
    }

    /// Run the full pipeline against a project
    pub fn run(&self, project: &mut Project) -> Result<SyncReport> {
        let workdir = project.workdir();
        if !self.dry_run {
            fs::create_dir_all(&workdir)?;
        }
        let stamps = StampStore::new(&workdir);

        // Discovery happens up front so the progress bar knows its length;
        // descriptor order and per-descriptor file order are preserved.
        let mut batches = Vec::new();
        for resource in &project.manifest.resources {
            let files = scanner::discover(resource, &project.root)?;
            batches.push((resource.scope.clone(), files));
        }

        let total: u64 = batches.iter().map(|(_, files)| files.len() as u64).sum();
        let progress = if self.dry_run {
            ProgressDisplay::hidden()
        } else {
            ProgressDisplay::new(total)
        };

        let mut report = SyncReport::default();
        for (scope, files) in &batches {
            for jar in files {
                let artifact = ArtifactId::for_jar(&project.manifest, jar, scope);
                progress.update_file(&jar.display().to_string());

                let stale = stamps.is_stale(&artifact.artifact, jar)?;
                if stale && !self.dry_run {
                    self.install(jar, &artifact)?;
                    // Only stamped after a successful install, so a failed
                    // run retries the same jar next time.
                    stamps.record(&artifact.artifact, jar)?;
                }
                if stale {
                    report.installed.push(artifact.clone());
                } else {
                    report.cached.push(artifact.clone());
                }

                // The dependency entry is appended every run, even when the
                // install was skipped by the stamp: the dependency graph is
                // rebuilt from scratch each invocation.
                project.resolved.insert(artifact.clone());
                project.manifest.add_dependency(Dependency::from(&artifact));

                progress.inc();
            }
        }
        progress.finish();

        if !self.dry_run {
            let generated = workdir.join(MANIFEST_FILE);
            manifest::write_manifest(&generated, &project.manifest)?;
            project.file = generated;
        }

        Ok(report)
    }

    /// Install one jar: generate its standalone descriptor into a temp
    /// file, then hand both to the installer.
    fn install(&self, jar: &Path, artifact: &ArtifactId) -> Result<()> {
        let descriptor = ArtifactDescriptor::for_artifact(artifact);
        let temp = tempfile::Builder::new()
            .prefix(&artifact.artifact)
            .suffix(".yaml")
            .tempfile()?;
        manifest::write_manifest(temp.path(), &descriptor)?;
        self.installer.install(jar, artifact, temp.path())
    }
}
