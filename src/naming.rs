//! Folder name parsing for the `NN_name` chapter convention.
//!
//! Chapter folders carry their position in the narrative as a numeric
//! prefix followed by an underscore and a human-readable label:
//!
//! - `05_turning` → order 5, name `turning`
//! - `12_dependent_origination` → order 12, name `dependent_origination`
//!
//! Both halves matter: the number drives the sort key, the label is the
//! fallback chapter name when a document doesn't declare one.
//! Folders that don't follow the convention (`sutras`, `chapter1`, `05-x`)
//! simply don't participate in ordering.

/// Result of parsing a chapter folder name like `05_turning`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterFolder {
    /// Numeric prefix (e.g., `5` from `05_turning`).
    pub order: u32,
    /// Everything after the first underscore, unchanged.
    pub name: String,
}

/// Parse a directory name following the `^\d+_.+$` convention.
///
/// - `"05_turning"` → `Some(order=5, name="turning")`
/// - `"01_birth_of_the_buddha"` → `Some(order=1, name="birth_of_the_buddha")`
/// - `"007__x"` → `Some(order=7, name="_x")`
/// - `"05_"` → `None` (empty label)
/// - `"_turning"` → `None` (no digits)
/// - `"5a_turning"` → `None` (prefix isn't all digits)
/// - `"chapter1"` → `None`
///
/// A prefix too large for `u32` is treated as not matching.
pub fn parse_chapter_folder(name: &str) -> Option<ChapterFolder> {
    let (prefix, rest) = name.split_once('_')?;
    if prefix.is_empty() || rest.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let order = prefix.parse::<u32>().ok()?;
    Some(ChapterFolder {
        order,
        name: rest.to_string(),
    })
}
