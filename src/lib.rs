//! # dharma-index
//!
//! Builds the JSON search index behind a Markdown sutra archive published
//! as a static documentation site. The document tree is the data source:
//! numbered folders are chapters, front-matter carries titles and ordering,
//! and a single `dharma_index.json` feeds the client-side browse UI.
//!
//! # Pipeline
//!
//! One synchronous pass, recomputed from scratch on every run:
//!
//! ```text
//! docs/  →  discover  →  front-matter  →  chapter folders  →  defaults + sort key
//!                                                                  ↓
//!                                          docs/assets/dharma_index.json
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`discover`] | Walks the document root in a stable order, pruning excluded subtrees |
//! | [`frontmatter`] | Splits a document into YAML metadata and body |
//! | [`naming`] | `NN_name` chapter folder parser |
//! | [`chapter`] | Resolves root and sub chapter from a document's ancestor folders |
//! | [`sort_key`] | Packs chapter, sub chapter and `order` into an `RR-SS-FFF` key |
//! | [`normalize`] | Fills `chapter` / `chapter_order` defaults and the warning policy |
//! | [`index`] | Assembles entries, isolates per-document failures, writes the index |
//! | [`config`] | Optional `config.toml` merged over stock defaults |
//! | [`types`] | Serialized index types (`IndexEntry`, `Metadata`) |
//! | [`samples`] | Sample sutra articles for trying out the UI |
//! | [`consolidate`] | Concatenates every document into one Markdown file |
//! | [`output`] | CLI output formatting |
//!
//! # Ordering
//!
//! Three signals decide where a document appears:
//!
//! ```text
//! 05_turning/12_dependent/links.md   order: 1
//! ^^ root chapter  ^^ sub chapter    ^ file order   →  "05-12-001"
//! ```
//!
//! The root chapter is the numbered folder nearest the document root, the
//! sub chapter the numbered folder nearest the document. Missing signals
//! default to `99`, `00` and `999`, so unplaced material sorts last.
//!
//! # Failure Isolation
//!
//! A malformed document is logged and left out of the index; it never stops
//! the run. Only failing to write the index file ends a build with an error.

pub mod chapter;
pub mod config;
pub mod consolidate;
pub mod discover;
pub mod frontmatter;
pub mod index;
pub mod naming;
pub mod normalize;
pub mod output;
pub mod samples;
pub mod sort_key;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
