//! Local artifact repository
//!
//! Installed artifacts live under a coordinate-based layout:
//! `<repo>/<group as path>/<artifact>/<version>/<artifact>-<version>.jar`
//! with the YAML descriptor next to the payload. Writes go through a temp
//! file in the target directory followed by a rename, so a failed install
//! never leaves a partially written artifact behind.

use std::fs;
use std::path::{Path, PathBuf};

use crate::artifact::ArtifactId;
use crate::error::{AddJarsError, Result};

/// Default repository directory name under the user's data directory
const REPOSITORY_DIR: &str = "addjars";

/// Environment variable overriding the repository location
pub const REPOSITORY_ENV: &str = "ADDJARS_REPOSITORY_DIR";

/// Get the default local repository directory.
///
/// Uses the platform's standard data location with an `addjars/repository`
/// subdirectory. Can be overridden with the `ADDJARS_REPOSITORY_DIR`
/// environment variable.
pub fn repository_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(REPOSITORY_ENV) {
        return Ok(PathBuf::from(dir));
    }

    let base = dirs::data_dir().ok_or(AddJarsError::RepositoryDirUnavailable)?;
    Ok(base.join(REPOSITORY_DIR).join("repository"))
}

/// Installs a jar plus its descriptor into a store keyed by artifact
/// identity. Implementations must be atomic from the caller's perspective:
/// a failure midway must not look like a completed install.
pub trait ArtifactInstaller {
    fn install(&self, jar: &Path, artifact: &ArtifactId, descriptor: &Path) -> Result<()>;
}

/// On-disk local repository
pub struct LocalRepository {
    root: PathBuf,
}

impl LocalRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Open the repository at the default (or env-overridden) location
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(repository_dir()?))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the installed payload for an artifact
    pub fn artifact_path(&self, artifact: &ArtifactId) -> PathBuf {
        self.root
            .join(artifact.repository_dir())
            .join(artifact.file_name())
    }

    /// Path of the installed descriptor for an artifact
    pub fn descriptor_path(&self, artifact: &ArtifactId) -> PathBuf {
        self.root
            .join(artifact.repository_dir())
            .join(artifact.descriptor_file_name())
    }

    /// Copy `src` to `dst` via a temp file in the destination directory
    fn copy_into(src: &Path, dst: &Path) -> std::io::Result<()> {
        let parent = dst.parent().unwrap_or(Path::new("."));
        fs::create_dir_all(parent)?;

        let temp = tempfile::NamedTempFile::new_in(parent)?;
        let mut reader = fs::File::open(src)?;
        let mut writer = temp.as_file();
        std::io::copy(&mut reader, &mut writer)?;
        temp.persist(dst).map_err(|e| e.error)?;
        Ok(())
    }
}

impl ArtifactInstaller for LocalRepository {
    fn install(&self, jar: &Path, artifact: &ArtifactId, descriptor: &Path) -> Result<()> {
        let install_failed = |reason: String| AddJarsError::InstallFailed {
            artifact: artifact.coordinates(),
            reason,
        };

        Self::copy_into(jar, &self.artifact_path(artifact))
            .map_err(|e| install_failed(e.to_string()))?;
        Self::copy_into(descriptor, &self.descriptor_path(artifact))
            .map_err(|e| install_failed(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::ProjectManifest;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn test_artifact() -> ArtifactId {
        let manifest = ProjectManifest::from_yaml(
            "group: com.example\nartifact: app\nversion: 1.0.0\n",
        )
        .unwrap();
        ArtifactId::for_jar(&manifest, Path::new("/libs/a.jar"), "compile")
    }

    #[test]
    fn test_install_copies_jar_and_descriptor() {
        let temp = TempDir::new().unwrap();
        let repo = LocalRepository::new(temp.path().join("repository"));

        let jar = temp.path().join("a.jar");
        fs::write(&jar, b"jar bytes").unwrap();
        let descriptor = temp.path().join("a.yaml");
        fs::write(&descriptor, "group: com.example\n").unwrap();

        let artifact = test_artifact();
        repo.install(&jar, &artifact, &descriptor).unwrap();

        let installed_jar = repo.artifact_path(&artifact);
        assert_eq!(
            installed_jar,
            temp.path()
                .join("repository/com/example/app-a.jar/1.0.0/app-a.jar-1.0.0.jar")
        );
        assert_eq!(fs::read(&installed_jar).unwrap(), b"jar bytes");

        let installed_descriptor = repo.descriptor_path(&artifact);
        assert!(installed_descriptor.is_file());
        assert_eq!(
            fs::read_to_string(&installed_descriptor).unwrap(),
            "group: com.example\n"
        );
    }

    #[test]
    fn test_install_overwrites_previous_payload() {
        let temp = TempDir::new().unwrap();
        let repo = LocalRepository::new(temp.path().join("repository"));

        let jar = temp.path().join("a.jar");
        let descriptor = temp.path().join("a.yaml");
        fs::write(&descriptor, "group: com.example\n").unwrap();

        let artifact = test_artifact();
        fs::write(&jar, b"first").unwrap();
        repo.install(&jar, &artifact, &descriptor).unwrap();
        fs::write(&jar, b"second").unwrap();
        repo.install(&jar, &artifact, &descriptor).unwrap();

        assert_eq!(fs::read(repo.artifact_path(&artifact)).unwrap(), b"second");
    }

    #[test]
    fn test_install_missing_source_fails() {
        let temp = TempDir::new().unwrap();
        let repo = LocalRepository::new(temp.path().join("repository"));
        let descriptor = temp.path().join("a.yaml");
        fs::write(&descriptor, "group: com.example\n").unwrap();

        let artifact = test_artifact();
        let result = repo.install(&temp.path().join("missing.jar"), &artifact, &descriptor);
        assert!(matches!(
            result.unwrap_err(),
            AddJarsError::InstallFailed { .. }
        ));
    }

    #[test]
    #[serial]
    fn test_repository_dir_env_override() {
        unsafe {
            std::env::set_var(REPOSITORY_ENV, "/custom/repo");
        }
        let dir = repository_dir().unwrap();
        unsafe {
            std::env::remove_var(REPOSITORY_ENV);
        }
        assert_eq!(dir, PathBuf::from("/custom/repo"));
    }

    #[test]
    #[serial]
    fn test_repository_dir_default_under_data_dir() {
        unsafe {
            std::env::remove_var(REPOSITORY_ENV);
        }
        let dir = repository_dir().unwrap();
        assert!(dir.ends_with("addjars/repository"));
    }
}
