//! Template resolution: filling `{Category}` placeholders with words.
//!
//! A template like `"The {Adjectives} {Nouns_singular} {Verbs_singular}."`
//! is resolved against a [`Dictionary`] by substituting each placeholder with
//! a randomly chosen word from its category. One singular-vs-plural choice is
//! made per template and applied to every `Nouns`/`Verbs` placeholder in it,
//! so a single phrase never mixes forms.
//!
//! Missing categories are a silent-degrade case, not an error: the
//! placeholder resolves to the empty string, a warning goes to stderr, and
//! the surrounding whitespace is collapsed afterwards.

use crate::dictionary::Dictionary;
use rand::Rng;
use rand::seq::IndexedRandom;
use regex::Regex;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\w+)\}").expect("invalid placeholder regex"));

static FORM_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_(singular|plural)$").expect("invalid form suffix regex"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("invalid whitespace regex"));

/// The grammatical form chosen once per template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordForm {
    Singular,
    Plural,
}

impl WordForm {
    fn suffix(self) -> &'static str {
        match self {
            WordForm::Singular => "singular",
            WordForm::Plural => "plural",
        }
    }
}

/// The ordered lookup chain for one placeholder.
///
/// 1. The alias step maps the bare `Nouns`/`Verbs` names to their
///    form-specific category for the chosen form; other names pass through.
/// 2. If the specific key carries a form suffix, the stripped base name is
///    tried as a fallback.
///
/// The empty-string step is not represented here; it is what happens when no
/// candidate matches.
fn candidate_keys(category: &str, form: WordForm) -> Vec<String> {
    let specific = match category {
        "Nouns" | "Verbs" => format!("{}_{}", category, form.suffix()),
        other => other.to_string(),
    };
    let base = FORM_SUFFIX.replace(&specific, "").into_owned();

    let mut chain = vec![specific];
    if base != chain[0] {
        chain.push(base);
    }
    chain
}

/// Pick a word for a placeholder category, walking the resolution chain.
/// Returns `None` when every candidate is absent.
fn pick_word<'d, R: Rng>(
    dict: &'d Dictionary,
    category: &str,
    form: WordForm,
    rng: &mut R,
) -> Option<&'d str> {
    for key in candidate_keys(category, form) {
        if let Some(words) = dict.get(&key) {
            return words.choose(rng).map(String::as_str);
        }
    }
    None
}

/// Resolve every `{Category}` placeholder in a template.
///
/// Placeholders are processed left to right, one at a time, since a
/// substitution shrinks or grows the string. The result has runs of
/// whitespace collapsed to single spaces and is trimmed.
pub fn resolve_template<R: Rng>(dict: &Dictionary, template: &str, rng: &mut R) -> String {
    let form = if rng.random_bool(0.5) {
        WordForm::Plural
    } else {
        WordForm::Singular
    };
    resolve_template_with_form(dict, template, form, rng)
}

/// Resolve a template with an explicit form choice.
///
/// Substituted words are inserted verbatim and never re-scanned for
/// placeholders, so a word that happens to contain `{...}` cannot trigger
/// further substitution (or an endless one).
pub fn resolve_template_with_form<R: Rng>(
    dict: &Dictionary,
    template: &str,
    form: WordForm,
    rng: &mut R,
) -> String {
    let mut phrase = template.to_string();
    let mut search_from = 0;

    while let Some(caps) = PLACEHOLDER.captures_at(&phrase, search_from) {
        let range = caps.get(0).map(|m| m.range()).unwrap_or_default();
        let category = caps[1].to_string();

        let word = match pick_word(dict, &category, form, rng) {
            Some(word) => word.to_string(),
            None => {
                eprintln!("Warning: category '{}' not found or empty", category);
                String::new()
            }
        };
        search_from = range.start + word.len();
        phrase.replace_range(range, &word);
    }

    WHITESPACE.replace_all(&phrase, " ").trim().to_string()
}
