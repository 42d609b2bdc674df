//! CLI output formatting.
//!
//! Output is **information-centric**: each indexed document leads with its
//! position and title, with the URL, sort key and source file as indented
//! context lines. Diagnostics (missing chapters, skipped documents) are
//! emitted through `log` as they happen; this module only summarizes them.
//!
//! ```text
//! Documents
//! 001 부처님의 탄생게 → /01_birth/lumbini/
//!     Sort key: 01-00-001
//!     Chapter: 탄생
//!     Source: 01_birth/lumbini.md
//!
//! Skipped
//!     05_turning/broken.md: front-matter YAML error: ...
//!
//! Indexed 8 documents (3 missing chapter, 1 skipped) → docs/assets/dharma_index.json
//! ```
//!
//! Each `format_*` function is pure and returns lines for testability; the
//! `print_*` wrappers write them to stdout.

use crate::index::BuildReport;
use crate::types::IndexEntry;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

fn chapter_label(entry: &IndexEntry) -> String {
    match entry.metadata.get("chapter") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

fn entry_lines(position: usize, entry: &IndexEntry) -> Vec<String> {
    vec![
        format!("{} {} → {}", format_index(position), entry.title, entry.id),
        format!("{}Sort key: {}", indent(1), entry.sort_key),
        format!("{}Chapter: {}", indent(1), chapter_label(entry)),
        format!("{}Source: {}", indent(1), entry.source),
    ]
}

fn summary_line(report: &BuildReport) -> String {
    let mut details = Vec::new();
    if !report.warnings.is_empty() {
        details.push(format!("{} missing chapter", report.warnings.len()));
    }
    if !report.skipped.is_empty() {
        details.push(format!("{} skipped", report.skipped.len()));
    }
    let details = if details.is_empty() {
        String::new()
    } else {
        format!(" ({})", details.join(", "))
    };

    let documents = plural(report.entries.len(), "document", "documents");
    match &report.output {
        Some(path) => format!("Indexed {documents}{details} → {}", path.display()),
        None => format!("Found {documents}{details}"),
    }
}

/// Format a build (or dry-run) report.
pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let mut lines = vec!["Documents".to_string()];
    for (i, entry) in report.entries.iter().enumerate() {
        lines.extend(entry_lines(i + 1, entry));
    }

    if !report.skipped.is_empty() {
        lines.push(String::new());
        lines.push("Skipped".to_string());
        for skipped in &report.skipped {
            lines.push(format!("{}{}: {}", indent(1), skipped.source, skipped.reason));
        }
    }

    lines.push(String::new());
    lines.push(summary_line(report));
    lines
}

pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}

/// Format the list of files written by the `samples` command.
pub fn format_samples_output(written: &[PathBuf], root: &Path) -> Vec<String> {
    let mut lines: Vec<String> = written
        .iter()
        .map(|p| format!("Created: {}", p.strip_prefix(root).unwrap_or(p).display()))
        .collect();
    lines.push(format!(
        "Wrote {} to {}",
        plural(written.len(), "sample article", "sample articles"),
        root.display()
    ));
    lines
}

pub fn print_samples_output(written: &[PathBuf], root: &Path) {
    for line in format_samples_output(written, root) {
        println!("{}", line);
    }
}

/// Format the result of the `consolidate` command.
pub fn format_consolidate_output(included: &[PathBuf], output: &Path) -> Vec<String> {
    let mut lines: Vec<String> = included
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{} {}", format_index(i + 1), p.display()))
        .collect();
    lines.push(format!(
        "Consolidated {} → {}",
        plural(included.len(), "document", "documents"),
        output.display()
    ));
    lines
}

pub fn print_consolidate_output(included: &[PathBuf], output: &Path) {
    for line in format_consolidate_output(included, output) {
        println!("{}", line);
    }
}
