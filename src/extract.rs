//! Extraction of JSON-LD documents from raw text or HTML markup.
//!
//! Input is either a bare JSON literal or markup carrying a
//! `<script type="application/ld+json">` block. Only the first such block is
//! read; there is no partial recovery from malformed content.

use crate::document::{Document, Payload};
use crate::error::{ExtractionError, ExtractionResult};
use log::debug;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Media type of embedded JSON-LD blocks.
pub const JSON_LD_MEDIA_TYPE: &str = "application/ld+json";

static EMBEDDED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<script[^>]*\btype\s*=\s*["']application/ld\+json["'][^>]*>(.*?)</script\s*>"#)
        .expect("embedded block pattern is a valid regex")
});

/// Extract a single document or a batch from text.
///
/// 1. Trimmed input not starting with `<` is parsed as a JSON literal.
/// 2. Markup, or a literal that failed to parse, is searched for the first
///    embedded JSON-LD block, whose inner text is parsed.
/// 3. Markup without a block fails with [`ExtractionError::NoStructuredBlock`];
///    a failed literal without a block fails with the literal's syntax error.
pub fn extract_document(text: &str) -> ExtractionResult<Payload> {
    let trimmed = text.trim();

    if !trimmed.starts_with('<') {
        match serde_json::from_str::<Value>(trimmed) {
            Ok(value) => {
                debug!("Parsed input as a bare JSON literal");
                return into_payload(value);
            }
            Err(literal_error) => {
                return match embedded_block(trimmed) {
                    Some(block) => parse_block(block),
                    None => Err(ExtractionError::Syntax(literal_error)),
                };
            }
        }
    }

    match embedded_block(trimmed) {
        Some(block) => parse_block(block),
        None => Err(ExtractionError::NoStructuredBlock),
    }
}

/// Inner text of the first embedded JSON-LD block, if any.
pub fn embedded_block(markup: &str) -> Option<&str> {
    EMBEDDED_BLOCK
        .captures(markup)
        .and_then(|captures| captures.get(1))
        .map(|inner| inner.as_str())
}

fn parse_block(block: &str) -> ExtractionResult<Payload> {
    debug!("Parsing embedded JSON-LD block ({} bytes)", block.len());
    let value = serde_json::from_str::<Value>(block.trim())?;
    into_payload(value)
}

fn into_payload(value: Value) -> ExtractionResult<Payload> {
    match value {
        Value::Object(map) => Ok(Payload::Single(Document::from(map))),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                Document::from_value(item).map_err(|other| {
                    ExtractionError::unsupported_shape(format!(
                        "{} at index {}",
                        json_kind(&other),
                        index
                    ))
                })
            })
            .collect::<ExtractionResult<Vec<_>>>()
            .map(Payload::Batch),
        other => Err(ExtractionError::unsupported_shape(json_kind(&other))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
