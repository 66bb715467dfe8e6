//! Install stamps
//!
//! A stamp is a zero-content marker file named after the artifact, living
//! in the sync working directory. Its modification time records the source
//! jar's mtime at the last successful install: a jar is re-installed iff
//! its mtime is strictly newer than the stamp's (an absent stamp counts as
//! the epoch). Stamps carry the source mtime, not wall-clock time, so the
//! comparison is exact and immune to clock skew between runs.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::Result;

/// Stamp files for one working directory
pub struct StampStore {
    dir: PathBuf,
}

impl StampStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the stamp for an artifact name
    pub fn stamp_path(&self, artifact_name: &str) -> PathBuf {
        self.dir.join(artifact_name)
    }

    /// True when the source jar must be (re-)installed
    pub fn is_stale(&self, artifact_name: &str, source: &Path) -> Result<bool> {
        let source_mtime = fs::metadata(source)?.modified()?;
        let stamp_mtime = match fs::metadata(self.stamp_path(artifact_name)) {
            Ok(meta) => meta.modified()?,
            Err(_) => SystemTime::UNIX_EPOCH,
        };
        Ok(source_mtime > stamp_mtime)
    }

    /// Record a successful install by stamping the source file's mtime
    pub fn record(&self, artifact_name: &str, source: &Path) -> Result<()> {
        let source_mtime = fs::metadata(source)?.modified()?;
        let stamp = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(self.stamp_path(artifact_name))?;
        stamp.set_modified(source_mtime)?;
        Ok(())
    }
}
