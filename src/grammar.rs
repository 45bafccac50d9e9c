//! Grammar post-processing for resolved phrases.
//!
//! Pure string-to-string cleanup applied after template resolution, as a
//! fixed sequence of regex passes:
//!
//! 1. `a <vowel>` -> `an <vowel>` (vowel matched case-insensitively)
//! 2. `an <consonant>` -> `a <consonant>`
//! 3. singular subjects (`he she it this that`): `are` -> `is`, `have` -> `has`
//! 4. plural subjects (`they we you these those`): `is` -> `are`, `has` -> `have`
//!
//! Later passes may touch text changed by earlier ones, but the pattern set
//! is finite and each pass runs once, so there is no looping.

use regex::Regex;
use std::sync::LazyLock;

/// Compiled grammar rules, built once and applied in order.
pub struct GrammarRules {
    article_before_vowel: Regex,
    article_before_consonant: Regex,
    singular_subject: Regex,
    plural_subject: Regex,
}

impl GrammarRules {
    fn new() -> Self {
        Self {
            article_before_vowel: Regex::new(r"(?i)\ba ([aeiou])")
                .expect("invalid article/vowel regex"),
            article_before_consonant: Regex::new(r"\ban ([^aeiouAEIOU])")
                .expect("invalid article/consonant regex"),
            singular_subject: Regex::new(r"\b(he|she|it|this|that) (are|have)\b")
                .expect("invalid singular agreement regex"),
            plural_subject: Regex::new(r"\b(they|we|you|these|those) (is|has)\b")
                .expect("invalid plural agreement regex"),
        }
    }

    /// Apply all passes, in order, to a phrase.
    pub fn apply(&self, phrase: &str) -> String {
        let phrase = self.article_before_vowel.replace_all(phrase, "an $1");
        let phrase = self.article_before_consonant.replace_all(&phrase, "a $1");
        let phrase = self
            .singular_subject
            .replace_all(&phrase, |caps: &regex::Captures| {
                let verb = match &caps[2] {
                    "are" => "is",
                    _ => "has",
                };
                format!("{} {}", &caps[1], verb)
            });
        let phrase = self
            .plural_subject
            .replace_all(&phrase, |caps: &regex::Captures| {
                let verb = match &caps[2] {
                    "is" => "are",
                    _ => "have",
                };
                format!("{} {}", &caps[1], verb)
            });
        phrase.into_owned()
    }
}

static RULES: LazyLock<GrammarRules> = LazyLock::new(GrammarRules::new);

/// Apply the shared compiled rule set to a phrase.
pub fn apply_grammar_rules(phrase: &str) -> String {
    RULES.apply(phrase)
}
