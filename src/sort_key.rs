//! Composite sort keys of the form `RR-SS-FFF`.
//!
//! Three ordering signals are packed into one zero-padded string so the
//! browse UI can order documents with a plain string comparison:
//!
//! | Field | Source                              | Missing | Width / cap |
//! |-------|-------------------------------------|---------|-------------|
//! | `RR`  | root chapter folder (`05_turning`)  | `99`    | 2 / 99      |
//! | `SS`  | sub chapter folder (`12_dependent`) | `00`    | 2 / 99      |
//! | `FFF` | `order` front-matter field          | `999`   | 3 / 999     |
//!
//! ```text
//! 05_turning/12_dependent/links.md  (order: 1)  →  05-12-001
//! 05_turning/intro.md               (no order)  →  05-00-999
//! misc/loose.md                     (no order)  →  99-00-999
//! ```
//!
//! Values above a field's cap are clamped to the cap, so lexicographic order
//! matches numeric order only within the field widths. A root chapter
//! numbered 150 sorts together with 99.
//!
//! `order` is read leniently: integers, integral floats (`1.0`) and
//! digit-only strings (`"3"`) all count. Anything else (negative,
//! fractional, non-numeric text, null) can't be placed within its chapter
//! and the whole key falls back to [`SortKey::FALLBACK`] with a warning.

use crate::chapter::FolderInfo;
use crate::types::Metadata;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

const ROOT_MISSING: u32 = 99;
const ROOT_CAP: u32 = 99;
const SUB_MISSING: u32 = 0;
const SUB_CAP: u32 = 99;
const FILE_MISSING: u64 = 999;
const FILE_CAP: u64 = 999;

#[derive(Error, Debug, PartialEq)]
pub enum SortKeyError {
    #[error("'order' must be a non-negative integer, got {0}")]
    InvalidOrder(Value),
}

/// A synthesized `RR-SS-FFF` key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SortKey(String);

impl SortKey {
    /// Key used when the file's ordering data can't be interpreted.
    pub const FALLBACK: &'static str = "99-00-999";

    /// Compose a key from raw field values, clamping each to its width.
    pub fn compose(root: u32, sub: u32, file: u64) -> Self {
        SortKey(format!(
            "{:02}-{:02}-{:03}",
            root.min(ROOT_CAP),
            sub.min(SUB_CAP),
            file.min(FILE_CAP)
        ))
    }

    pub fn fallback() -> Self {
        SortKey(Self::FALLBACK.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Interpret an `order` value as a non-negative integer.
fn order_value(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        }),
        Value::String(s) => {
            let s = s.trim();
            if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
                // Longer than u64 still sorts last within the chapter.
                Some(s.parse().unwrap_or(u64::MAX))
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Read the per-file `order` field. Absent means [`FILE_MISSING`].
fn file_order(metadata: &Metadata) -> Result<u64, SortKeyError> {
    match metadata.get("order") {
        None => Ok(FILE_MISSING),
        Some(value) => order_value(value).ok_or_else(|| SortKeyError::InvalidOrder(value.clone())),
    }
}

/// Build the sort key for a document, failing on an unusable `order`.
pub fn try_sort_key(folder: &FolderInfo, metadata: &Metadata) -> Result<SortKey, SortKeyError> {
    let root = folder.root().map(|r| r.order).unwrap_or(ROOT_MISSING);
    let sub = folder.sub_order().unwrap_or(SUB_MISSING);
    let file = file_order(metadata)?;
    Ok(SortKey::compose(root, sub, file))
}

/// Build the sort key for a document, never failing.
///
/// On an unusable `order` the failure is logged against `source` and
/// [`SortKey::FALLBACK`] is returned.
pub fn sort_key(folder: &FolderInfo, metadata: &Metadata, source: &str) -> SortKey {
    try_sort_key(folder, metadata).unwrap_or_else(|e| {
        log::warn!("{source}: {e}; using sort key {}", SortKey::FALLBACK);
        SortKey::fallback()
    })
}
