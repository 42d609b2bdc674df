//! Chapter defaults for document metadata.
//!
//! Every index entry carries `chapter` and `chapter_order`. Documents that
//! declare them keep their values; the rest inherit from their folder:
//!
//! - `chapter_order` ← root chapter folder number (999 outside any chapter)
//! - `chapter` ← root chapter folder label ("Uncategorized" outside any chapter)
//!
//! Articles are expected to name their chapter explicitly, so falling back
//! to the folder label produces a [`MissingChapter`] warning. Section
//! indexes and UI pages (`index.md`, `card_view.md`, ...) are exempt.

use crate::chapter::FolderInfo;
use crate::config::ChapterSettings;
use crate::types::Metadata;
use serde_json::Value;
use std::fmt;

/// A document fell back to its folder's chapter label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingChapter {
    /// Root-relative document path.
    pub source: String,
    /// The label that was filled in.
    pub fallback: String,
}

impl fmt::Display for MissingChapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'chapter' metadata missing in {}. Using folder name \"{}\".",
            self.source, self.fallback
        )
    }
}

/// Fill `chapter_order` and `chapter` from `folder` where absent.
///
/// `source` is the root-relative path used in the warning; `file_name` is
/// checked against the exemption list. Returns the warning, if any, for
/// the caller to report. Existing values are never touched, whatever their
/// type.
pub fn normalize(
    metadata: &mut Metadata,
    folder: &FolderInfo,
    source: &str,
    file_name: &str,
    chapters: &ChapterSettings,
) -> Option<MissingChapter> {
    if !metadata.contains_key("chapter_order") {
        metadata.insert("chapter_order".to_string(), Value::from(folder.root_order()));
    }

    if metadata.contains_key("chapter") {
        return None;
    }
    let fallback = folder.root_name().to_string();
    metadata.insert("chapter".to_string(), Value::String(fallback.clone()));

    if chapters.expects_no_chapter(file_name) {
        None
    } else {
        Some(MissingChapter {
            source: source.to_string(),
            fallback,
        })
    }
}
