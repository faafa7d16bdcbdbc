use crate::error::{ReviewAgentError, Result};
use std::path::PathBuf;

/// A read-only bind mount of a host file into the review container.
///
/// Files are mounted at the same absolute path they have on the host, so
/// the in-container agent receives paths it can open verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mount {
    pub source: PathBuf,
    pub target: PathBuf,
}

impl Mount {
    pub fn read_only(source: PathBuf) -> Self {
        let target = source.clone();
        Self { source, target }
    }

    /// Render as a docker --volume argument
    pub fn to_volume_arg(&self) -> String {
        format!("{}:{}:ro", self.source.display(), self.target.display())
    }
}

/// Resolve review targets to canonical absolute paths, deduplicated.
///
/// Paths that do not exist or are not regular files are reported and
/// skipped; the review proceeds with the rest. An empty result is an error.
pub fn resolve_review_targets(paths: &[PathBuf]) -> Result<Vec<Mount>> {
    let mut mounts: Vec<Mount> = Vec::new();

    for path in paths {
        let absolute = match path.canonicalize() {
            Ok(absolute) => absolute,
            Err(_) => {
                eprintln!("Warning: {} not found, skipping", path.display());
                continue;
            }
        };

        if !absolute.is_file() {
            eprintln!(
                "Warning: {} is not a regular file, skipping",
                absolute.display()
            );
            continue;
        }

        // Skip duplicate paths (the same file named twice)
        if mounts.iter().any(|m| m.source == absolute) {
            continue;
        }

        mounts.push(Mount::read_only(absolute));
    }

    if mounts.is_empty() {
        return Err(ReviewAgentError::NoReviewableFiles);
    }

    Ok(mounts)
}

/// Container-side paths of the resolved mounts, in mount order.
pub fn container_paths(mounts: &[Mount]) -> Vec<String> {
    mounts
        .iter()
        .map(|m| m.target.display().to_string())
        .collect()
}
