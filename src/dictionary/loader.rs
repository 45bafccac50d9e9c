//! Dictionary file loading.
//!
//! Dictionary files are JSON, conventionally shaped as
//! `{"prompt_dictionary": {"Dictionary": {...}, "Patterns_short": [...], ...}}`,
//! but a bare category tree at the root works too. Files in the wild come in
//! assorted encodings, so decoding tries UTF-8 first, then BOM-marked UTF-16
//! (either endianness), then falls back to Latin-1, which maps every byte and
//! therefore cannot fail. Undecodable *JSON* still fails at parse time with a
//! descriptive error.

use super::{Dictionary, flatten_tree};
use crate::error::{PromptError, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Conventional wrapper key at the JSON root.
const WRAPPER_KEY: &str = "prompt_dictionary";

/// Conventional category-tree key inside the wrapper.
const TREE_KEY: &str = "Dictionary";

/// Key holding the short pattern list.
pub const PATTERNS_SHORT_KEY: &str = "Patterns_short";

/// Key holding the long pattern list.
pub const PATTERNS_LONG_KEY: &str = "Patterns_long";

/// Read and parse a dictionary JSON file, with encoding fallback.
pub fn read_json_file<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| {
        PromptError::Dictionary(format!("failed to read '{}': {}", path.display(), e))
    })?;

    let text = decode_bytes(&bytes);
    serde_json::from_str(&text).map_err(|e| {
        PromptError::Dictionary(format!("'{}' is not valid JSON: {}", path.display(), e))
    })
}

/// Decode raw bytes as UTF-8, BOM-marked UTF-16, or Latin-1 (in that order).
fn decode_bytes(bytes: &[u8]) -> String {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return text.to_string();
    }

    match bytes {
        [0xFF, 0xFE, rest @ ..] => decode_utf16(rest, u16::from_le_bytes),
        [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, u16::from_be_bytes),
        // Latin-1: every byte maps directly to the same code point.
        _ => bytes.iter().map(|&b| b as char).collect(),
    }
}

fn decode_utf16(bytes: &[u8], from_bytes: fn([u8; 2]) -> u16) -> String {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| from_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16_lossy(&units)
}

/// Load and flatten the word dictionary from a parsed JSON root.
///
/// Descends into `prompt_dictionary` and then `Dictionary` when those keys
/// are present, otherwise treats the root itself as the category tree. A
/// tree with no usable word list at all is a fatal error.
pub fn load_dictionary(root: &Value) -> Result<Dictionary> {
    let tree = root.get(WRAPPER_KEY).unwrap_or(root);
    let tree = tree.get(TREE_KEY).unwrap_or(tree);

    let dict = flatten_tree(tree);
    if dict.is_empty() {
        return Err(PromptError::Dictionary(
            "no valid word list found in the JSON".to_string(),
        ));
    }
    Ok(dict)
}

/// Load a pattern list (`Patterns_short` or `Patterns_long`) from a parsed
/// JSON root. Looks at the root first, then inside `prompt_dictionary`.
/// A missing key is an empty list; whether that is fatal depends on the
/// generation strategy, not the loader.
pub fn load_patterns(root: &Value, key: &str) -> Vec<String> {
    let from = |value: &Value| -> Vec<String> {
        value
            .get(key)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    };

    let at_root = from(root);
    if at_root.is_empty() {
        if let Some(wrapper) = root.get(WRAPPER_KEY) {
            return from(wrapper);
        }
    }
    at_root
}
