//! Types shared between the pipeline stages and serialized into the index.

use crate::sort_key::SortKey;
use serde::Serialize;

/// Front-matter of one document: arbitrary keys in document order.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// One record of `dharma_index.json`.
///
/// The browse UI sorts by `sort_key`; the array order in the file itself
/// follows discovery order and carries no meaning.
#[derive(Debug, Clone, Serialize)]
pub struct IndexEntry {
    /// Site URL of the document, e.g. `/sutras/chapter1/article1/`.
    pub id: String,
    /// `title` front-matter, or the file stem.
    pub title: String,
    pub sort_key: SortKey,
    /// Full front-matter, with `chapter` and `chapter_order` always present.
    pub metadata: Metadata,
    /// Document path relative to the root. Reporting only.
    #[serde(skip)]
    pub source: String,
}
