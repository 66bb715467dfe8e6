//! Project manifest (project.yaml) and generated artifact descriptors
//!
//! The manifest is the project's declarative descriptor: coordinates,
//! build settings, declared dependencies and the jar resource list. The
//! synchronizer appends dependencies to the in-memory model and writes the
//! result under the build directory, where it becomes the project's
//! effective manifest.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::artifact::{ArtifactId, KIND_JAR};
use crate::error::{AddJarsError, Result};
use crate::resource::{DEFAULT_SCOPE, JarResource};

/// File name of the project manifest
pub const MANIFEST_FILE: &str = "project.yaml";

/// Default build output directory
pub const DEFAULT_BUILD_DIR: &str = "target";

fn default_scope() -> String {
    DEFAULT_SCOPE.to_string()
}

fn default_kind() -> String {
    KIND_JAR.to_string()
}

fn default_build_dir() -> PathBuf {
    PathBuf::from(DEFAULT_BUILD_DIR)
}

/// Project manifest (project.yaml)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectManifest {
    /// Project group (e.g. "com.example")
    pub group: String,

    /// Project artifact name
    pub artifact: String,

    /// Project version
    pub version: String,

    /// Project packaging
    #[serde(default = "default_kind")]
    pub packaging: String,

    /// Build settings
    #[serde(default)]
    pub build: BuildSection,

    /// Declared dependencies
    #[serde(default)]
    pub dependencies: Vec<Dependency>,

    /// Jar resource descriptors to synchronize
    #[serde(default)]
    pub resources: Vec<JarResource>,
}

/// Build settings in the manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildSection {
    /// Build output directory, relative to the project root
    #[serde(default = "default_build_dir")]
    pub directory: PathBuf,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            directory: default_build_dir(),
        }
    }
}

/// A declared dependency entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub group: String,
    pub artifact: String,
    pub version: String,
    #[serde(default = "default_scope")]
    pub scope: String,
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
}

impl From<&ArtifactId> for Dependency {
    fn from(artifact: &ArtifactId) -> Self {
        Self {
            group: artifact.group.clone(),
            artifact: artifact.artifact.clone(),
            version: artifact.version.clone(),
            scope: artifact.scope.clone(),
            kind: artifact.kind.clone(),
        }
    }
}

impl ProjectManifest {
    /// Parse a manifest from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let manifest: Self = serde_yaml::from_str(yaml)?;
        Ok(manifest)
    }

    /// Serialize the manifest to YAML
    pub fn to_yaml(&self) -> Result<String> {
        let yaml = serde_yaml::to_string(self)?;
        Ok(yaml)
    }

    /// Load and validate a manifest from a file
    pub fn load(path: &Path) -> Result<Self> {
        let yaml = fs::read_to_string(path).map_err(|e| AddJarsError::FileReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let manifest: Self =
            serde_yaml::from_str(&yaml).map_err(|e| AddJarsError::ManifestParseFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        manifest.validate()?;
        Ok(manifest)
    }

    /// Validate coordinate fields
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("group", &self.group),
            ("artifact", &self.artifact),
            ("version", &self.version),
        ] {
            if value.is_empty() {
                return Err(AddJarsError::ConfigInvalid {
                    message: format!("Manifest field '{field}' cannot be empty"),
                });
            }
        }
        Ok(())
    }

    /// Append a dependency entry
    pub fn add_dependency(&mut self, dependency: Dependency) {
        self.dependencies.push(dependency);
    }
}

/// Minimal standalone descriptor installed next to each artifact
/// (the pom-equivalent: coordinates and packaging only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactDescriptor {
    pub group: String,
    pub artifact: String,
    pub version: String,
    pub packaging: String,
}

impl ArtifactDescriptor {
    pub fn for_artifact(artifact: &ArtifactId) -> Self {
        Self {
            group: artifact.group.clone(),
            artifact: artifact.artifact.clone(),
            version: artifact.version.clone(),
            packaging: artifact.kind.clone(),
        }
    }
}

/// Serialize a manifest model to `path` as YAML, fully overwriting any
/// existing file, flushed before return.
pub fn write_manifest<T: Serialize>(path: &Path, model: &T) -> Result<()> {
    let write_failed = |reason: String| AddJarsError::ManifestWriteFailed {
        path: path.display().to_string(),
        reason,
    };

    let yaml = serde_yaml::to_string(model).map_err(|e| write_failed(e.to_string()))?;

    let mut file = fs::File::create(path).map_err(|e| write_failed(e.to_string()))?;
    file.write_all(yaml.as_bytes())
        .map_err(|e| write_failed(e.to_string()))?;
    file.flush().map_err(|e| write_failed(e.to_string()))?;
    Ok(())
}
