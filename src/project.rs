//! Project state for one build invocation
//!
//! A [`Project`] carries the loaded manifest, the project root, the set of
//! artifacts resolved so far and a pointer to the effective manifest file.
//! The pointer starts at the manifest the project was loaded from and is
//! rebound to the generated manifest after a sync, so downstream consumers
//! see the appended dependencies.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use normpath::PathExt;

use crate::artifact::ArtifactId;
use crate::error::{AddJarsError, Result};
use crate::manifest::{MANIFEST_FILE, ProjectManifest};

/// Subdirectory of the build directory owned by addjars
/// (stamp files and the generated manifest live here)
pub const WORKDIR_NAME: &str = "addjars";

/// A loaded project, mutable for the duration of one invocation
#[derive(Debug)]
pub struct Project {
    /// Project root directory (contains project.yaml)
    pub root: PathBuf,

    /// In-memory manifest model
    pub manifest: ProjectManifest,

    /// Effective manifest file; rebound after a successful sync
    pub file: PathBuf,

    /// Artifacts resolved during this invocation
    pub resolved: HashSet<ArtifactId>,
}

impl Project {
    /// Find a project root by walking upward from `start`
    pub fn find_from(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .find(|dir| dir.join(MANIFEST_FILE).is_file())
            .map(Path::to_path_buf)
    }

    /// Open a project at a known root
    pub fn open(root: &Path) -> Result<Self> {
        let file = root.join(MANIFEST_FILE);
        if !file.is_file() {
            return Err(AddJarsError::ProjectNotFound {
                start: root.display().to_string(),
            });
        }

        let manifest = ProjectManifest::load(&file)?;
        Ok(Self {
            root: root.to_path_buf(),
            manifest,
            file,
            resolved: HashSet::new(),
        })
    }

    /// Locate and open a project: an explicit `--project` directory, or the
    /// nearest manifest above the current directory.
    pub fn locate(explicit: Option<PathBuf>) -> Result<Self> {
        match explicit {
            Some(dir) => {
                let normalized =
                    dir.normalize()
                        .map_err(|e| AddJarsError::ProjectDirInvalid {
                            path: dir.display().to_string(),
                            reason: e.to_string(),
                        })?;
                Self::open(&normalized.into_path_buf())
            }
            None => {
                let current = std::env::current_dir()?;
                let root = Self::find_from(&current).ok_or_else(|| {
                    AddJarsError::ProjectNotFound {
                        start: current.display().to_string(),
                    }
                })?;
                Self::open(&root)
            }
        }
    }

    /// Build output directory, resolved against the project root
    pub fn build_dir(&self) -> PathBuf {
        self.root.join(&self.manifest.build.directory)
    }

    /// Working directory for stamps and the generated manifest
    pub fn workdir(&self) -> PathBuf {
        self.build_dir().join(WORKDIR_NAME)
    }
}
