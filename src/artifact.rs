//! Synthetic artifact identities
//!
//! Every discovered jar becomes one artifact. The artifact name embeds the
//! jar's file name so that each file in a directory maps to a distinct
//! artifact within the project. Colliding names across descriptors are
//! accepted as-is; the identity scheme is the only uniqueness mechanism.

use std::path::{Path, PathBuf};

use crate::manifest::ProjectManifest;

/// Packaging kind for jar artifacts
pub const KIND_JAR: &str = "jar";

/// Identity of a synthetic artifact derived from a discovered jar
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactId {
    /// Group, inherited from the project
    pub group: String,

    /// Artifact name: `<project artifact>-<jar file name>`
    pub artifact: String,

    /// Version, inherited from the project
    pub version: String,

    /// Dependency scope, inherited from the descriptor
    pub scope: String,

    /// Packaging kind (always "jar")
    pub kind: String,
}

impl ArtifactId {
    /// Derive the synthetic identity for a discovered jar file
    pub fn for_jar(manifest: &ProjectManifest, jar: &Path, scope: &str) -> Self {
        let file_name = jar
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();

        Self {
            group: manifest.group.clone(),
            artifact: format!("{}-{}", manifest.artifact, file_name),
            version: manifest.version.clone(),
            scope: scope.to_string(),
            kind: KIND_JAR.to_string(),
        }
    }

    /// `group:artifact:version` coordinates for display
    pub fn coordinates(&self) -> String {
        format!("{}:{}:{}", self.group, self.artifact, self.version)
    }

    /// Directory of this artifact inside a local repository
    /// (group segments become path segments)
    pub fn repository_dir(&self) -> PathBuf {
        let mut path = PathBuf::new();
        for segment in self.group.split('.') {
            path.push(segment);
        }
        path.push(&self.artifact);
        path.push(&self.version);
        path
    }

    /// File name of the artifact payload inside the repository
    pub fn file_name(&self) -> String {
        format!("{}-{}.{}", self.artifact, self.version, self.kind)
    }

    /// File name of the descriptor installed next to the payload
    pub fn descriptor_file_name(&self) -> String {
        format!("{}-{}.yaml", self.artifact, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_manifest() -> ProjectManifest {
        ProjectManifest::from_yaml(
            "group: com.example\nartifact: app\nversion: 1.0.0\n",
        )
        .unwrap()
    }

    #[test]
    fn test_for_jar_derives_identity() {
        let manifest = test_manifest();
        let artifact = ArtifactId::for_jar(&manifest, Path::new("/libs/a.jar"), "test");

        assert_eq!(artifact.group, "com.example");
        assert_eq!(artifact.artifact, "app-a.jar");
        assert_eq!(artifact.version, "1.0.0");
        assert_eq!(artifact.scope, "test");
        assert_eq!(artifact.kind, "jar");
    }

    #[test]
    fn test_coordinates() {
        let manifest = test_manifest();
        let artifact = ArtifactId::for_jar(&manifest, Path::new("/libs/a.jar"), "compile");
        assert_eq!(artifact.coordinates(), "com.example:app-a.jar:1.0.0");
    }

    #[test]
    fn test_repository_dir_splits_group() {
        let manifest = test_manifest();
        let artifact = ArtifactId::for_jar(&manifest, Path::new("/libs/a.jar"), "compile");
        assert_eq!(
            artifact.repository_dir(),
            PathBuf::from("com/example/app-a.jar/1.0.0")
        );
    }

    #[test]
    fn test_file_names() {
        let manifest = test_manifest();
        let artifact = ArtifactId::for_jar(&manifest, Path::new("/libs/a.jar"), "compile");
        assert_eq!(artifact.file_name(), "app-a.jar-1.0.0.jar");
        assert_eq!(artifact.descriptor_file_name(), "app-a.jar-1.0.0.yaml");
    }

    #[test]
    fn test_same_file_name_in_two_directories_collides() {
        // Accepted behavior: two descriptors matching files with the same
        // name produce identical artifact names.
        let manifest = test_manifest();
        let first = ArtifactId::for_jar(&manifest, Path::new("/libs/util.jar"), "compile");
        let second = ArtifactId::for_jar(&manifest, Path::new("/other/util.jar"), "compile");
        assert_eq!(first.artifact, second.artifact);
    }
}
