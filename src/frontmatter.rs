//! Front-matter splitting and parsing.
//!
//! A document may open with a YAML block fenced by `---` lines:
//!
//! ```text
//! ---
//! title: "초전법륜"
//! chapter: "전법"
//! order: 1
//! tags: ["사성제", "팔정도"]
//! ---
//!
//! # 초전법륜
//! ...
//! ```
//!
//! Rules:
//! - No opening fence → empty metadata, the whole text is the body.
//! - Opening fence without a closing fence → malformed.
//! - Empty block → empty metadata.
//! - The block must be a mapping with string keys; anything else is malformed.
//! - A leading UTF-8 BOM and `\r\n` line endings are tolerated.

use crate::types::Metadata;
use serde_json::Value;
use thiserror::Error;

const FENCE: &str = "---";

#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("front-matter opened with '---' but never closed")]
    Unterminated,
    #[error("front-matter YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
    #[error("front-matter must be a key/value mapping, found {0}")]
    NotAMapping(&'static str),
}

/// A document split into its metadata and body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    pub metadata: Metadata,
    pub body: String,
}

fn is_fence(line: &str) -> bool {
    line.trim_end() == FENCE
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

/// Split `text` into front-matter and body, parsing the YAML block.
pub fn parse(text: &str) -> Result<FrontMatter, FrontMatterError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut lines = text.split_inclusive('\n');
    let Some(first) = lines.next() else {
        return Ok(FrontMatter::default());
    };
    if !is_fence(first) {
        return Ok(FrontMatter {
            metadata: Metadata::new(),
            body: text.to_string(),
        });
    }

    let block_start = first.len();
    let mut offset = block_start;
    let mut block_end = None;
    for line in lines {
        if is_fence(line) {
            block_end = Some((offset, offset + line.len()));
            break;
        }
        offset += line.len();
    }
    let (block_end, body_start) = block_end.ok_or(FrontMatterError::Unterminated)?;

    let block = &text[block_start..block_end];
    let body = text[body_start..].trim_start_matches(['\r', '\n']);

    Ok(FrontMatter {
        metadata: parse_block(block)?,
        body: body.to_string(),
    })
}

fn parse_block(block: &str) -> Result<Metadata, FrontMatterError> {
    if block.trim().is_empty() {
        return Ok(Metadata::new());
    }
    match serde_yaml_ng::from_str::<Value>(block)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Metadata::new()),
        other => Err(FrontMatterError::NotAMapping(kind(&other))),
    }
}
