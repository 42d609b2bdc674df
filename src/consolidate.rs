//! Single-file export of every document.
//!
//! Concatenates all documents under the root into one Markdown file, each
//! preceded by a header naming its source:
//!
//! ```text
//!
//!
//! # File: 05_turning/intro.md
//!
//! ---
//! title: "전법 개요"
//! ---
//! ...
//! ```
//!
//! Directories named in `consolidate.exclude` are pruned, and the output
//! file is never included in itself.

use crate::config::IndexConfig;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ConsolidateError {
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn file_header(relative: &Path) -> String {
    format!("\n\n# File: {}\n\n", relative.display())
}

/// Consolidate every document under `root` into `output`.
///
/// Returns the root-relative paths that were included, in order.
pub fn consolidate(
    root: &Path,
    output: &Path,
    config: &IndexConfig,
) -> Result<Vec<PathBuf>, ConsolidateError> {
    let extension = config.index.extension.as_str();
    let exclude = &config.consolidate.exclude;

    let mut content = String::new();
    let mut included = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            e.depth() == 0
                || !e.file_type().is_dir()
                || !exclude.iter().any(|x| e.file_name() == x.as_str())
        });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable entry: {e}");
                continue;
            }
        };
        let path = entry.path();
        let is_document = entry.file_type().is_file()
            && path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case(extension));
        if !is_document || path == output {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        match fs::read_to_string(path) {
            Ok(text) => {
                content.push_str(&file_header(relative));
                content.push_str(&text);
                log::info!("Processed: {}", relative.display());
                included.push(relative.to_path_buf());
            }
            Err(e) => log::error!("Error reading {}: {e}", path.display()),
        }
    }

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent).map_err(|source| ConsolidateError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(output, content).map_err(|source| ConsolidateError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    Ok(included)
}
