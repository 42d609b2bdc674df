//! Index assembly: documents → `dharma_index.json`.
//!
//! For each discovered document:
//!
//! ```text
//! read file → split front-matter → resolve chapter folders
//!           → fill chapter defaults → synthesize sort key → IndexEntry
//! ```
//!
//! A document that can't be read or whose front-matter is malformed is
//! logged and left out; it never stops the rest of the run. Only failing to
//! write the index file itself is an error.
//!
//! ## URL ids
//!
//! The id is the document's site URL: the root-relative path without its
//! extension, wrapped in slashes. Section indexes map to their folder:
//!
//! ```text
//! sutras/chapter1/article1.md  →  /sutras/chapter1/article1/
//! sutras/chapter1/index.md     →  /sutras/chapter1/
//! index.md                     →  /
//! ```

use crate::chapter::extract_folder_info;
use crate::config::IndexConfig;
use crate::discover::discover;
use crate::frontmatter::{self, FrontMatterError};
use crate::normalize::{MissingChapter, normalize};
use crate::sort_key::sort_key;
use crate::types::{IndexEntry, Metadata};
use serde_json::Value;
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

const INDEX_SEGMENT: &str = "/index/";

/// Why a single document was left out of the index.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    FrontMatter(#[from] FrontMatterError),
    #[error("not under the document root: {0}")]
    OutsideRoot(PathBuf),
}

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A document that was left out, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub source: String,
    pub reason: String,
}

/// Everything a build produced.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Entries in discovery order.
    pub entries: Vec<IndexEntry>,
    pub warnings: Vec<MissingChapter>,
    pub skipped: Vec<Skipped>,
    /// Where the index was written; `None` for a dry run.
    pub output: Option<PathBuf>,
}

/// Root-relative path with `/` separators, whatever the platform.
fn slash_path(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Derive the site URL for a root-relative document path.
pub fn url_id(relative: &Path) -> String {
    let id = format!("/{}/", slash_path(&relative.with_extension("")));
    match id.strip_suffix(INDEX_SEGMENT) {
        Some(parent) => format!("{parent}/"),
        None => id,
    }
}

/// `title` front-matter when it's a scalar, else the file stem.
fn entry_title(metadata: &Metadata, stem: &str) -> String {
    match metadata.get("title") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => stem.to_string(),
    }
}

/// Build the index entry for one document.
///
/// Returns the entry and, if the document fell back to its folder's
/// chapter label, the warning to report.
pub fn index_document(
    path: &Path,
    root: &Path,
    config: &IndexConfig,
) -> Result<(IndexEntry, Option<MissingChapter>), DocumentError> {
    let relative = path
        .strip_prefix(root)
        .map_err(|_| DocumentError::OutsideRoot(path.to_path_buf()))?;
    let source = slash_path(relative);

    let text = fs::read_to_string(path)?;
    let mut metadata = frontmatter::parse(&text)?.metadata;

    let folder = extract_folder_info(path, root);
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let warning = normalize(
        &mut metadata,
        &folder,
        &source,
        &file_name,
        &config.chapters,
    );

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let entry = IndexEntry {
        id: url_id(relative),
        title: entry_title(&metadata, &stem),
        sort_key: sort_key(&folder, &metadata, &source),
        metadata,
        source,
    };
    Ok((entry, warning))
}

/// Index every document under `root` without writing anything.
pub fn collect(root: &Path, config: &IndexConfig) -> BuildReport {
    let mut report = BuildReport::default();

    for path in discover(root, &config.index) {
        match index_document(&path, root, config) {
            Ok((entry, warning)) => {
                if let Some(warning) = warning {
                    log::warn!("{warning}");
                    report.warnings.push(warning);
                }
                report.entries.push(entry);
            }
            Err(e) => {
                let source = path
                    .strip_prefix(root)
                    .map(slash_path)
                    .unwrap_or_else(|_| path.display().to_string());
                log::error!("Error processing {source}: {e}");
                report.skipped.push(Skipped {
                    source,
                    reason: e.to_string(),
                });
            }
        }
    }

    report
}

/// Serialize entries as the index file, creating parent directories.
///
/// Pretty JSON with 2-space indentation; non-ASCII text is written as-is.
pub fn write_index(entries: &[IndexEntry], path: &Path) -> Result<(), BuildError> {
    let json = serde_json::to_string_pretty(entries)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| BuildError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, json).map_err(|source| BuildError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Index every document under `root` and write the index file.
pub fn build(root: &Path, config: &IndexConfig) -> Result<BuildReport, BuildError> {
    let mut report = collect(root, config);
    let output = config.output_path(root);
    write_index(&report.entries, &output)?;
    log::info!(
        "Indexed {} documents to {}",
        report.entries.len(),
        output.display()
    );
    report.output = Some(output);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use serde_json::json;
    use std::path::PathBuf;
    use tempfile::TempDir;

    // =========================================================================
    // url_id tests
    // =========================================================================

    #[test]
    fn url_id_for_article() {
        assert_eq!(
            url_id(Path::new("sutras/chapter1/article1.md")),
            "/sutras/chapter1/article1/"
        );
    }

    #[test]
    fn url_id_for_section_index() {
        assert_eq!(
            url_id(Path::new("sutras/chapter1/index.md")),
            "/sutras/chapter1/"
        );
    }

    #[test]
    fn url_id_for_root_index() {
        assert_eq!(url_id(Path::new("index.md")), "/");
    }

    #[test]
    fn url_id_keeps_names_merely_ending_in_index() {
        assert_eq!(url_id(Path::new("a/chapter_index.md")), "/a/chapter_index/");
    }

    #[test]
    fn url_id_strips_only_last_extension() {
        assert_eq!(url_id(Path::new("a/notes.v2.md")), "/a/notes.v2/");
    }

    #[test]
    fn url_id_keeps_non_ascii() {
        assert_eq!(url_id(Path::new("01_탄생/탄생게.md")), "/01_탄생/탄생게/");
    }

    // =========================================================================
    // title tests
    // =========================================================================

    #[test]
    fn title_prefers_front_matter() {
        let Value::Object(meta) = json!({"title": "초전법륜"}) else {
            unreachable!()
        };
        assert_eq!(entry_title(&meta, "stem"), "초전법륜");
    }

    #[test]
    fn title_stringifies_numbers() {
        let Value::Object(meta) = json!({"title": 1984}) else {
            unreachable!()
        };
        assert_eq!(entry_title(&meta, "stem"), "1984");
    }

    #[test]
    fn title_falls_back_to_stem() {
        let Value::Object(meta) = json!({"title": null}) else {
            unreachable!()
        };
        assert_eq!(entry_title(&meta, "stem"), "stem");
        assert_eq!(entry_title(&Metadata::new(), "stem"), "stem");
    }

    // =========================================================================
    // index_document tests
    // =========================================================================

    #[test]
    fn indexes_nested_article() {
        let tmp = TempDir::new().unwrap();
        write_doc(
            tmp.path(),
            "05_turning/12_dependent/links.md",
            "title: 연기\norder: 1\nchapter: 전법",
            "body",
        );

        let (entry, warning) = index_document(
            &tmp.path().join("05_turning/12_dependent/links.md"),
            tmp.path(),
            &IndexConfig::default(),
        )
        .unwrap();

        assert_eq!(entry.id, "/05_turning/12_dependent/links/");
        assert_eq!(entry.title, "연기");
        assert_eq!(entry.sort_key.as_str(), "05-12-001");
        assert_eq!(entry.metadata["chapter"], json!("전법"));
        assert_eq!(entry.metadata["chapter_order"], json!(5));
        assert_eq!(entry.source, "05_turning/12_dependent/links.md");
        assert_eq!(warning, None);
    }

    #[test]
    fn indexes_document_without_front_matter() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("misc/loose.md");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "# Loose\n").unwrap();

        let (entry, warning) = index_document(&path, tmp.path(), &IndexConfig::default()).unwrap();
        assert_eq!(entry.title, "loose");
        assert_eq!(entry.sort_key.as_str(), "99-00-999");
        assert_eq!(entry.metadata["chapter"], json!("Uncategorized"));
        assert_eq!(entry.metadata["chapter_order"], json!(999));
        assert!(warning.is_some());
    }

    #[test]
    fn malformed_front_matter_is_document_error() {
        let tmp = TempDir::new().unwrap();
        write_doc(tmp.path(), "bad.md", "title: [unclosed", "");
        let err = index_document(&tmp.path().join("bad.md"), tmp.path(), &IndexConfig::default())
            .unwrap_err();
        assert!(matches!(err, DocumentError::FrontMatter(_)));
    }

    #[test]
    fn path_outside_root_is_document_error() {
        let tmp = TempDir::new().unwrap();
        let err = index_document(
            Path::new("/elsewhere/a.md"),
            tmp.path(),
            &IndexConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, DocumentError::OutsideRoot(_)));
    }

    // =========================================================================
    // collect / build tests
    // =========================================================================

    #[test]
    fn collect_indexes_fixtures() {
        let tmp = setup_fixtures();
        let report = collect(tmp.path(), &IndexConfig::default());

        assert!(report.skipped.is_empty(), "{:?}", report.skipped);
        assert_eq!(
            entry_ids(&report),
            vec![
                "/01_birth/lumbini/",
                "/05_turning/12_dependent/links/",
                "/05_turning/first_sermon/",
                "/05_turning/",
                "/05_turning/intro/",
                "/",
                "/list_view/",
                "/misc/loose/",
            ]
        );
        assert!(!entry_ids(&report).iter().any(|id| id.contains("assets")));
        assert!(!entry_ids(&report).iter().any(|id| id.contains("includes")));
    }

    #[test]
    fn collect_resolves_fixture_sort_keys() {
        let tmp = setup_fixtures();
        let report = collect(tmp.path(), &IndexConfig::default());

        assert_eq!(find_entry(&report, "/01_birth/lumbini/").sort_key.as_str(), "01-00-001");
        assert_eq!(
            find_entry(&report, "/05_turning/12_dependent/links/").sort_key.as_str(),
            "05-12-001"
        );
        assert_eq!(find_entry(&report, "/05_turning/intro/").sort_key.as_str(), "05-00-999");
        assert_eq!(find_entry(&report, "/05_turning/first_sermon/").sort_key.as_str(), "05-00-002");
        assert_eq!(find_entry(&report, "/misc/loose/").sort_key.as_str(), "99-00-999");
    }

    #[test]
    fn collect_warns_only_for_articles_missing_chapter() {
        let tmp = setup_fixtures();
        let report = collect(tmp.path(), &IndexConfig::default());

        let sources: Vec<&str> = report.warnings.iter().map(|w| w.source.as_str()).collect();
        assert_eq!(
            sources,
            vec!["05_turning/12_dependent/links.md", "05_turning/intro.md", "misc/loose.md"]
        );
    }

    #[test]
    fn every_entry_has_chapter_fields() {
        let tmp = setup_fixtures();
        let report = collect(tmp.path(), &IndexConfig::default());

        for entry in &report.entries {
            assert!(entry.metadata.contains_key("chapter"), "{}", entry.id);
            assert!(entry.metadata.contains_key("chapter_order"), "{}", entry.id);
        }
    }

    #[test]
    fn malformed_document_is_skipped_not_fatal() {
        let tmp = setup_fixtures();
        write_doc(tmp.path(), "05_turning/broken.md", "title: [unclosed", "");

        let report = collect(tmp.path(), &IndexConfig::default());
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].source, "05_turning/broken.md");
        assert_eq!(report.entries.len(), 8);
    }

    #[test]
    fn unreadable_document_is_skipped_with_io_reason() {
        let tmp = TempDir::new().unwrap();
        write_doc(tmp.path(), "good.md", "title: good", "");
        fs::write(tmp.path().join("bad.md"), b"---\ntitle: \xff\xfe\n---\n").unwrap();

        let report = collect(tmp.path(), &IndexConfig::default());

        assert_eq!(entry_ids(&report), vec!["/good/"]);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].source, "bad.md");
        assert!(
            report.skipped[0].reason.starts_with("IO error"),
            "{}",
            report.skipped[0].reason
        );
    }

    #[test]
    fn unreadable_document_still_lets_build_write() {
        let tmp = TempDir::new().unwrap();
        write_doc(tmp.path(), "good.md", "title: good", "");
        fs::write(tmp.path().join("bad.md"), [0xff, 0xfe, 0x00]).unwrap();

        let report = build(tmp.path(), &IndexConfig::default()).unwrap();
        assert_eq!(report.entries.len(), 1);
        let text = fs::read_to_string(tmp.path().join("assets/dharma_index.json")).unwrap();
        assert!(text.contains("\"/good/\""));
    }

    #[test]
    fn build_writes_pretty_unescaped_json() {
        let tmp = setup_fixtures();
        let report = build(tmp.path(), &IndexConfig::default()).unwrap();

        let output = tmp.path().join("assets/dharma_index.json");
        assert_eq!(report.output.as_deref(), Some(output.as_path()));

        let text = fs::read_to_string(&output).unwrap();
        assert!(text.starts_with("[\n  {\n    \"id\": "));
        assert!(text.contains("탄생"));
        assert!(!text.contains("\\u"));

        let parsed: Vec<Value> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.len(), report.entries.len());
        let keys: Vec<&str> = parsed[0]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["id", "title", "sort_key", "metadata"]);
    }

    #[test]
    fn build_is_idempotent() {
        let tmp = setup_fixtures();
        let output = tmp.path().join("assets/dharma_index.json");

        build(tmp.path(), &IndexConfig::default()).unwrap();
        let first = fs::read(&output).unwrap();
        build(tmp.path(), &IndexConfig::default()).unwrap();
        let second = fs::read(&output).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn build_creates_output_directories() {
        let tmp = setup_fixtures();
        let mut config = IndexConfig::default();
        config.index.output = PathBuf::from("deep/nested/out.json");

        build(tmp.path(), &config).unwrap();
        assert!(tmp.path().join("deep/nested/out.json").is_file());
    }

    #[test]
    fn build_reports_write_failure() {
        let tmp = setup_fixtures();
        fs::write(tmp.path().join("blocker"), "").unwrap();
        let mut config = IndexConfig::default();
        config.index.output = PathBuf::from("blocker/out.json");

        let err = build(tmp.path(), &config).unwrap_err();
        assert!(matches!(err, BuildError::Write { .. }));
    }

    #[test]
    fn empty_root_writes_empty_array() {
        let tmp = TempDir::new().unwrap();
        let report = build(tmp.path(), &IndexConfig::default()).unwrap();
        assert!(report.entries.is_empty());
        let text = fs::read_to_string(tmp.path().join("assets/dharma_index.json")).unwrap();
        assert_eq!(text, "[]");
    }
}
