//! Document discovery.
//!
//! Walks the document root and yields every file with the document
//! extension, in a stable order: entries are sorted by file name at every
//! directory level, so repeated runs over the same tree see the same
//! sequence. Subtrees named in the exclude list (`includes/`, `assets/` by
//! default) are pruned without being descended.
//!
//! Unreadable entries are logged and skipped; discovery itself never fails.

use crate::config::IndexSettings;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Whether any component of `relative` is an excluded segment.
pub fn is_excluded(relative: &Path, exclude: &[String]) -> bool {
    relative
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .any(|segment| exclude.iter().any(|e| e == segment))
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}

fn relative<'a>(entry: &'a DirEntry, root: &Path) -> &'a Path {
    entry.path().strip_prefix(root).unwrap_or(entry.path())
}

/// Lazily enumerate document files under `root`.
///
/// The returned iterator is finite and consumed once. A root that doesn't
/// exist yields a single logged warning and no documents.
pub fn discover<'a>(
    root: &'a Path,
    settings: &'a IndexSettings,
) -> impl Iterator<Item = PathBuf> + 'a {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |entry| !is_excluded(relative(entry, root), &settings.exclude))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                let path = e
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "<unknown>".to_string());
                log::warn!("Skipping {path}: {e}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(DirEntry::into_path)
        .filter(move |path| has_extension(path, &settings.extension))
}
