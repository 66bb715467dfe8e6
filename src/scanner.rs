//! Directory scanning for jar files
//!
//! Discovery is deliberately forgiving about configuration and strict about
//! its output: a missing directory or a matched non-jar only warns, but the
//! returned paths are always canonical, jar-suffixed and sorted so that
//! processing order is reproducible across runs.

use std::path::{Path, PathBuf};

use console::style;
use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use crate::error::{AddJarsError, Result};
use crate::resource::JarResource;

/// Required extension for discovered artifacts
pub const JAR_EXTENSION: &str = ".jar";

/// Discover jar files matched by a resource descriptor.
///
/// `resource.directory` is resolved against `project_root` when relative.
/// Returns canonical absolute paths in ascending lexicographic order.
pub fn discover(resource: &JarResource, project_root: &Path) -> Result<Vec<PathBuf>> {
    let dir = project_root.join(&resource.directory);
    if !dir.is_dir() {
        warn(&format!("Not a directory: {}", dir.display()));
        return Ok(Vec::new());
    }

    let includes = compile_patterns(resource.includes.as_deref())?;
    let excludes = compile_patterns(resource.excludes.as_deref())?;

    let mut files = Vec::new();
    for entry in WalkDir::new(&dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry.path().strip_prefix(&dir).unwrap_or(entry.path());
        let relative = to_forward_slashes(relative);

        if let Some(patterns) = &includes {
            if !matches_any(patterns, &relative) {
                continue;
            }
        }
        if let Some(patterns) = &excludes {
            if matches_any(patterns, &relative) {
                continue;
            }
        }

        // dunce avoids UNC-prefixed paths on Windows
        let canonical =
            dunce::canonicalize(entry.path()).map_err(|e| AddJarsError::IoError {
                message: format!("{}: {}", entry.path().display(), e),
            })?;

        let is_jar = canonical
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(JAR_EXTENSION));

        if is_jar {
            files.push(canonical);
        } else {
            warn(&format!("Not a jar: {}", canonical.display()));
        }
    }

    files.sort();
    Ok(files)
}

fn compile_patterns(patterns: Option<&[String]>) -> Result<Option<Vec<Glob<'static>>>> {
    let Some(patterns) = patterns else {
        return Ok(None);
    };

    let mut globs = Vec::with_capacity(patterns.len());
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| AddJarsError::InvalidPattern {
            pattern: pattern.clone(),
            reason: e.to_string(),
        })?;
        globs.push(glob.into_owned());
    }
    Ok(Some(globs))
}

fn matches_any(globs: &[Glob<'static>], path: &str) -> bool {
    let candidate = CandidatePath::from(path);
    globs.iter().any(|glob| glob.matched(&candidate).is_some())
}

/// Normalize a relative path to forward slashes for platform-independent
/// glob matching
fn to_forward_slashes(path: &Path) -> String {
    path.components()
        .filter_map(|c| c.as_os_str().to_str())
        .collect::<Vec<_>>()
        .join("/")
}

fn warn(message: &str) {
    eprintln!("{} {}", style("warning:").yellow().bold(), message);
}
