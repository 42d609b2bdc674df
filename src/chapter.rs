//! Chapter resolution from a document's ancestor folders.
//!
//! A document's chapter comes from the numbered folders above it:
//!
//! ```text
//! docs/                              # root (never inspected)
//! ├── 05_turning/                    # root chapter: order 5, "turning"
//! │   ├── intro.md                   # RootOnly(5)
//! │   └── 12_dependent/              # sub chapter: order 12
//! │       └── links.md               # RootAndSub(5, 12)
//! └── misc/
//!     └── loose.md                   # NoMatch
//! ```
//!
//! ## Root vs. Sub
//!
//! The root chapter is the numbered folder **closest to the document root**;
//! the sub chapter is the numbered folder **closest to the document**. Folders
//! are collected root-to-leaf and folded, so there is no dependence on walk
//! direction or on which match "overwrites" another.
//!
//! Only two levels are encoded. With three or more numbered folders, the
//! middle ones are dropped: `01_a/02_b/03_c/x.md` resolves to root 1, sub 3.

use crate::naming::{ChapterFolder, parse_chapter_folder};
use std::path::Path;

/// Order reported for documents outside any numbered folder.
pub const UNMATCHED_ORDER: u32 = 999;

/// Chapter name reported for documents outside any numbered folder.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Chapter placement derived from a document's path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderInfo {
    /// No ancestor folder follows the `NN_name` convention.
    NoMatch,
    /// Exactly one numbered ancestor.
    RootOnly(ChapterFolder),
    /// Two or more numbered ancestors: the root-most and the deepest.
    RootAndSub {
        root: ChapterFolder,
        sub: ChapterFolder,
    },
}

impl FolderInfo {
    /// Fold numbered folders, given root-to-leaf, into a placement.
    pub fn from_folders<I>(folders: I) -> Self
    where
        I: IntoIterator<Item = ChapterFolder>,
    {
        folders
            .into_iter()
            .fold(FolderInfo::NoMatch, |acc, folder| match acc {
                FolderInfo::NoMatch => FolderInfo::RootOnly(folder),
                FolderInfo::RootOnly(root) => FolderInfo::RootAndSub { root, sub: folder },
                FolderInfo::RootAndSub { root, .. } => FolderInfo::RootAndSub { root, sub: folder },
            })
    }

    /// The root chapter folder, if any.
    pub fn root(&self) -> Option<&ChapterFolder> {
        match self {
            FolderInfo::NoMatch => None,
            FolderInfo::RootOnly(root) | FolderInfo::RootAndSub { root, .. } => Some(root),
        }
    }

    /// Root chapter order, or [`UNMATCHED_ORDER`].
    pub fn root_order(&self) -> u32 {
        self.root().map(|r| r.order).unwrap_or(UNMATCHED_ORDER)
    }

    /// Root chapter label, or [`UNCATEGORIZED`].
    pub fn root_name(&self) -> &str {
        self.root().map(|r| r.name.as_str()).unwrap_or(UNCATEGORIZED)
    }

    pub fn sub_order(&self) -> Option<u32> {
        match self {
            FolderInfo::RootAndSub { sub, .. } => Some(sub.order),
            _ => None,
        }
    }
}

/// Resolve the chapter placement of `path` relative to `root`.
///
/// Only directories strictly between `root` and the document are inspected;
/// the root's own name and the file name never count. A path that isn't
/// under `root` resolves to [`FolderInfo::NoMatch`].
pub fn extract_folder_info(path: &Path, root: &Path) -> FolderInfo {
    let Ok(relative) = path.strip_prefix(root) else {
        return FolderInfo::NoMatch;
    };
    let Some(parent) = relative.parent() else {
        return FolderInfo::NoMatch;
    };
    let folders = parent
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .filter_map(parse_chapter_folder);
    FolderInfo::from_folders(folders)
}
