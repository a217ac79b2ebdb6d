use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::ScenarioSettings;
use crate::error::{Result, ScenarioError};

fn is_scenario_file(path: &Path, settings: &ScenarioSettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Find scenario files under `path`.
///
/// A file is returned as-is regardless of its extension; a directory is
/// walked according to `settings`. Results are sorted by path.
pub fn discover(path: &Path, settings: &ScenarioSettings) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        return Err(ScenarioError::NotFound(path.to_path_buf()));
    }

    let mut walker = WalkDir::new(path).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    let mut found: Vec<PathBuf> = Vec::new();
    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
    {
        let entry = entry.map_err(|err| {
            let at = err.path().unwrap_or(path).to_path_buf();
            ScenarioError::Io {
                path: at,
                source: err.into(),
            }
        })?;
        let p = entry.path();
        if p.is_file() && is_scenario_file(p, settings) {
            found.push(p.to_path_buf());
        }
    }

    found.sort();
    Ok(found)
}
