//! Source path patterns
//!
//! Task files list sources as literal paths or glob patterns relative to the
//! task file. A leading `!` removes earlier matches.

use globset::GlobBuilder;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::TaskError;

/// Expand source patterns into an ordered, de-duplicated list of paths.
///
/// Literal paths are kept whether or not they exist, so that a missing
/// source is reported later instead of silently vanishing. Glob matches are
/// sorted by file name at each directory level.
pub fn expand_sources(base: &Path, patterns: &[String]) -> Result<Vec<PathBuf>, TaskError> {
    let mut paths: Vec<PathBuf> = Vec::new();

    for pattern in patterns {
        if let Some(negated) = pattern.strip_prefix('!') {
            let excluded = expand_one(base, negated)?;
            paths.retain(|p| !excluded.contains(p));
            continue;
        }

        for path in expand_one(base, pattern)? {
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }

    Ok(paths)
}

fn is_glob(s: &str) -> bool {
    s.contains(['*', '?', '[', '{'])
}

fn expand_one(base: &Path, pattern: &str) -> Result<Vec<PathBuf>, TaskError> {
    if !is_glob(pattern) {
        return Ok(vec![base.join(pattern)]);
    }

    let (prefix, rest) = split_literal_prefix(pattern);
    let root = if prefix.as_os_str().is_empty() {
        base.to_path_buf()
    } else {
        base.join(prefix)
    };

    let matcher = GlobBuilder::new(&rest)
        .literal_separator(true)
        .build()
        .map_err(|e| TaskError::Pattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?
        .compile_matcher();

    let mut matches = Vec::new();
    for entry in WalkDir::new(&root)
        .follow_links(true)
        .sort_by(|a, b| a.file_name().cmp(b.file_name()))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!("skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(&root) else {
            continue;
        };
        if matcher.is_match(relative) {
            matches.push(entry.path().to_path_buf());
        }
    }

    Ok(matches)
}

/// Split `dir/sub/*.json` into the literal directory `dir/sub` and the glob
/// remainder `*.json`.
fn split_literal_prefix(pattern: &str) -> (PathBuf, String) {
    let parts: Vec<&str> = pattern.split('/').collect();
    let first_glob = parts.iter().position(|p| is_glob(p)).unwrap_or(parts.len());

    let prefix = parts[..first_glob].join("/");
    let rest = parts[first_glob..].join("/");
    (PathBuf::from(prefix), rest)
}
