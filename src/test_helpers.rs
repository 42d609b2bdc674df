//! Shared test utilities.
//!
//! Fixture setup, document writers, and lookups over a [`BuildReport`] that
//! panic with the list of what *was* found, so a failing assertion says more
//! than "None".
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let report = collect(tmp.path(), &IndexConfig::default());
//! let entry = find_entry(&report, "/05_turning/intro/");
//! assert_eq!(entry.sort_key.as_str(), "05-00-999");
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::index::BuildReport;
use crate::types::IndexEntry;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/docs/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/docs");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Write a document with a front-matter block, creating parent directories.
pub fn write_doc(root: &Path, rel: &str, front_matter: &str, body: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, format!("---\n{front_matter}\n---\n\n{body}")).unwrap();
}

// =========================================================================
// Report lookups: panic with a clear message on miss
// =========================================================================

/// All entry ids in report order.
pub fn entry_ids(report: &BuildReport) -> Vec<&str> {
    report.entries.iter().map(|e| e.id.as_str()).collect()
}

/// Find an entry by id. Panics if not found.
pub fn find_entry<'a>(report: &'a BuildReport, id: &str) -> &'a IndexEntry {
    report
        .entries
        .iter()
        .find(|e| e.id == id)
        .unwrap_or_else(|| panic!("entry '{id}' not found. Available: {:?}", entry_ids(report)))
}
