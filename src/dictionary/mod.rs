//! The flattened word dictionary promptgen generates from.
//!
//! A dictionary is a flat, case-sensitive mapping from category name
//! (e.g. `Nouns_singular`, `Adjectives`) to a non-empty, ordered list of
//! words. The backing map is a `BTreeMap` so category iteration order is
//! fixed and deterministic, which the combinatorial strategy relies on.
//!
//! Dictionaries are produced by flattening a nested JSON category tree
//! (see [`flatten`]) and loaded from disk by [`loader`].

mod flatten;
mod loader;

pub use flatten::flatten_tree;
pub use loader::{
    PATTERNS_LONG_KEY, PATTERNS_SHORT_KEY, load_dictionary, load_patterns, read_json_file,
};

use std::collections::BTreeMap;

/// Flat category -> word-list mapping.
///
/// Invariant: every stored list is non-empty. Lookup is case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    categories: BTreeMap<String, Vec<String>>,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a category. Empty word lists are skipped to preserve the
    /// non-empty invariant.
    pub fn insert<S: Into<String>>(&mut self, category: S, words: Vec<String>) {
        if !words.is_empty() {
            self.categories.insert(category.into(), words);
        }
    }

    /// Look up a category's word list (case-sensitive).
    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.categories.get(category).map(|w| w.as_slice())
    }

    /// Whether the dictionary has no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Category names in fixed iteration order.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(|k| k.as_str())
    }

    /// (category, words) pairs in fixed iteration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Fill in missing singular/plural forms for `Nouns` and `Verbs`.
    ///
    /// If only the bare `Nouns` category exists, it is mirrored into
    /// `Nouns_singular` and `Nouns_plural`; once both forms exist, `Nouns`
    /// is rebuilt as their concatenation so the bare name stays usable as a
    /// catch-all. Same for `Verbs`.
    pub fn ensure_form_aliases(&mut self) {
        self.alias_forms("Nouns");
        self.alias_forms("Verbs");
    }

    fn alias_forms(&mut self, base: &str) {
        let singular = format!("{}_singular", base);
        let plural = format!("{}_plural", base);

        if let Some(words) = self.categories.get(base).cloned() {
            self.categories.entry(singular.clone()).or_insert_with(|| words.clone());
            self.categories.entry(plural.clone()).or_insert(words);
        }

        if let (Some(s), Some(p)) = (self.categories.get(&singular), self.categories.get(&plural)) {
            let mut merged = s.clone();
            merged.extend(p.iter().cloned());
            self.categories.insert(base.to_string(), merged);
        }
    }
}

impl FromIterator<(String, Vec<String>)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        let mut dict = Dictionary::new();
        for (category, words) in iter {
            dict.insert(category, words);
        }
        dict
    }
}

#[cfg(test)]
pub(crate) fn dict<const N: usize>(entries: [(&str, &[&str]); N]) -> Dictionary {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.iter().map(|w| w.to_string()).collect()))
        .collect()
}
