//! Flattening of the nested JSON category tree.
//!
//! The dictionary file groups word lists one level deep, e.g.:
//!
//! ```json
//! {
//!   "Adjectives": ["blue", "vast"],
//!   "Nouns": {
//!     "singular": ["cat"],
//!     "plural": ["cats"]
//!   }
//! }
//! ```
//!
//! Flattening turns this into top-level categories only: a plain list keeps
//! its key, while a nested group contributes both a merged list under the
//! parent key (`Nouns`) and one compound key per sub-list (`Nouns_singular`,
//! `Nouns_plural`). Empty lists and non-list leaves are dropped.

use super::Dictionary;
use serde_json::Value;

/// Flatten a nested category tree into a [`Dictionary`].
pub fn flatten_tree(tree: &Value) -> Dictionary {
    let mut dict = Dictionary::new();

    let Some(object) = tree.as_object() else {
        return dict;
    };

    for (key, value) in object {
        match value {
            Value::Array(_) => {
                dict.insert(key.clone(), string_items(value));
            }
            Value::Object(group) => {
                let mut merged = Vec::new();
                for sub_value in group.values() {
                    merged.extend(string_items(sub_value));
                }
                dict.insert(key.clone(), merged);

                for (sub_key, sub_value) in group {
                    dict.insert(format!("{}_{}", key, sub_key), string_items(sub_value));
                }
            }
            _ => {}
        }
    }

    dict
}

/// Extract the string elements of a JSON array; anything else yields nothing.
fn string_items(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
