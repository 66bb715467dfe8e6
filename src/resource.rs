//! Jar resource descriptors (the `resources:` section of the manifest)
//!
//! A descriptor names a directory to scan, a dependency scope and optional
//! include/exclude glob patterns. Descriptors are pure configuration data:
//! whether the directory actually exists is checked at scan time, not here.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Scope applied when a descriptor does not name one
pub const DEFAULT_SCOPE: &str = "compile";

fn default_scope() -> String {
    DEFAULT_SCOPE.to_string()
}

/// A directory of jar files to add to the project's dependency set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JarResource {
    /// Directory to scan, relative to the project root or absolute
    pub directory: PathBuf,

    /// Dependency scope propagated to every artifact from this descriptor
    #[serde(default = "default_scope")]
    pub scope: String,

    /// Glob patterns for files to include (absent = everything)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub includes: Option<Vec<String>>,

    /// Glob patterns for files to exclude (absent = nothing)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excludes: Option<Vec<String>>,
}

impl JarResource {
    /// Create a descriptor with the default scope and no patterns
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            scope: default_scope(),
            includes: None,
            excludes: None,
        }
    }
}
