//! Glob pattern resolution for input files

use anyhow::{bail, Context, Result};
use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::error::CliError;

/// Expand input patterns into a sorted, deduplicated list of files
///
/// Patterns without glob metacharacters are treated as literal paths and
/// must name an existing file. Directories matched by a glob are skipped.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files: BTreeSet<PathBuf> = BTreeSet::new();

    for pattern in patterns {
        if !is_glob(pattern) {
            let path = PathBuf::from(pattern);
            if !path.is_file() {
                return Err(CliError::FileNotFound(pattern.clone()).into());
            }
            files.insert(path);
            continue;
        }

        let matches = glob::glob(pattern)
            .map_err(|_| CliError::InvalidPattern(pattern.clone()))?;
        for entry in matches {
            let path = entry.with_context(|| format!("Error resolving pattern: {}", pattern))?;
            if path.is_file() {
                files.insert(path);
            }
        }
    }

    if files.is_empty() {
        bail!("No files found matching the provided patterns");
    }

    Ok(files.into_iter().collect())
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}
