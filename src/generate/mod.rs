//! Prompt generation strategies.
//!
//! Three strategies produce finished, grammar-corrected prompts:
//!
//! - **Random**: bag-of-words prompts of 10-20 uniformly sampled words.
//! - **Combinatorial**: the full Cartesian product of every category's word
//!   list, in dictionary iteration order, each combination exactly once.
//! - **Patterns**: draws templates from the short/long pattern sets and runs
//!   them through the resolver.
//!
//! All strategies return the complete ordered list; callers hand it to the
//! output writer unchanged.

use crate::dictionary::Dictionary;
use crate::error::{PromptError, Result};
use crate::grammar::apply_grammar_rules;
use crate::resolve::resolve_template;
use clap::ValueEnum;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Hard cap on combinatorial output size. Above this the strategy fails fast
/// instead of exhausting memory.
pub const COMBINATION_CAP: usize = 1_000_000;

/// Word-count bounds for random bag-of-words prompts.
const RANDOM_WORDS_MIN: usize = 10;
const RANDOM_WORDS_MAX: usize = 20;

/// Generation strategy selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    /// Bag-of-words prompts from randomly sampled categories.
    #[default]
    #[value(alias = "ran")]
    Random,
    /// Every combination of one word per category.
    #[value(alias = "comb")]
    Combinatorial,
    /// Template-driven prompts from the short/long pattern sets.
    #[value(alias = "both")]
    Patterns,
}

/// The short and long template sets loaded alongside the dictionary.
#[derive(Debug, Clone, Default)]
pub struct PatternSets {
    pub short: Vec<String>,
    pub long: Vec<String>,
}

/// Which pattern sets a run draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternToggles {
    pub short: bool,
    pub long: bool,
}

/// Run the selected strategy.
pub fn generate<R: Rng>(
    mode: Mode,
    dict: &Dictionary,
    patterns: &PatternSets,
    count: usize,
    toggles: PatternToggles,
    rng: &mut R,
) -> Result<Vec<String>> {
    match mode {
        Mode::Random => generate_random(dict, count, rng),
        Mode::Combinatorial => generate_combinatorial(dict),
        Mode::Patterns => generate_with_patterns(dict, patterns, count, toggles, rng),
    }
}

/// Generate `count` random prompts, each 10-20 words long, picking a category
/// uniformly and then a word within it uniformly for every token.
pub fn generate_random<R: Rng>(dict: &Dictionary, count: usize, rng: &mut R) -> Result<Vec<String>> {
    let names: Vec<&str> = dict.category_names().collect();
    if names.is_empty() {
        return Err(PromptError::Generation(
            "the dictionary has no categories to sample from".to_string(),
        ));
    }

    let mut prompts = Vec::with_capacity(count);
    for _ in 0..count {
        let length = rng.random_range(RANDOM_WORDS_MIN..=RANDOM_WORDS_MAX);
        let words: Vec<&str> = (0..length)
            .map(|_| {
                // names is non-empty and stored lists are never empty, so
                // both choices always yield a value.
                let category = names.choose(rng).copied().unwrap_or_default();
                dict.get(category)
                    .and_then(|words| words.choose(rng))
                    .map(String::as_str)
                    .unwrap_or_default()
            })
            .collect();
        prompts.push(apply_grammar_rules(&words.join(" ")));
    }
    Ok(prompts)
}

/// Number of combinations the Cartesian product would produce, or `None` on
/// overflow.
fn combination_count(dict: &Dictionary) -> Option<usize> {
    dict.iter()
        .try_fold(1usize, |acc, (_, words)| acc.checked_mul(words.len()))
}

/// Generate every combination of one word per category, space-joined, in
/// dictionary iteration order.
pub fn generate_combinatorial(dict: &Dictionary) -> Result<Vec<String>> {
    if dict.is_empty() {
        return Err(PromptError::Generation(
            "the dictionary has no categories to combine".to_string(),
        ));
    }

    match combination_count(dict) {
        Some(total) if total <= COMBINATION_CAP => {}
        counted => {
            let size = counted
                .map(|total| total.to_string())
                .unwrap_or_else(|| "more than usize::MAX".to_string());
            return Err(PromptError::Generation(format!(
                "combinatorial mode would produce {} prompts, above the {} cap; \
                 trim the dictionary or use random mode",
                size, COMBINATION_CAP
            )));
        }
    }

    let mut combos = vec![String::new()];
    for (_, words) in dict.iter() {
        let mut next = Vec::with_capacity(combos.len() * words.len());
        for prefix in &combos {
            for word in words {
                let mut combo = String::with_capacity(prefix.len() + word.len() + 1);
                combo.push_str(prefix);
                if !prefix.is_empty() {
                    combo.push(' ');
                }
                combo.push_str(word);
                next.push(combo);
            }
        }
        combos = next;
    }

    Ok(combos.iter().map(|c| apply_grammar_rules(c)).collect())
}

/// Generate `count` template-driven prompts, split between the short and
/// long pattern sets.
///
/// With both toggles set (or neither), `count / 2` draws come from the short
/// set and the remainder from the long set; if one set is empty, the other
/// covers the full count. With exactly one toggle set, all draws come from
/// that set. A requested set with no patterns in it is a fatal error.
pub fn generate_with_patterns<R: Rng>(
    dict: &Dictionary,
    patterns: &PatternSets,
    count: usize,
    toggles: PatternToggles,
    rng: &mut R,
) -> Result<Vec<String>> {
    let (short_draws, long_draws) = if toggles.short == toggles.long {
        match (patterns.short.is_empty(), patterns.long.is_empty()) {
            (true, true) => {
                return Err(PromptError::Generation(
                    "no short or long patterns found in the input file".to_string(),
                ));
            }
            (false, true) => (count, 0),
            (true, false) => (0, count),
            (false, false) => {
                let half = count / 2;
                (half, count - half)
            }
        }
    } else if toggles.short {
        if patterns.short.is_empty() {
            return Err(PromptError::Generation(
                "no short patterns found in the input file".to_string(),
            ));
        }
        (count, 0)
    } else {
        if patterns.long.is_empty() {
            return Err(PromptError::Generation(
                "no long patterns found in the input file".to_string(),
            ));
        }
        (0, count)
    };

    let mut prompts = Vec::with_capacity(count);
    for (set, draws) in [(&patterns.short, short_draws), (&patterns.long, long_draws)] {
        for _ in 0..draws {
            // draws is zero whenever the set is empty
            let template = set.choose(rng).map(String::as_str).unwrap_or_default();
            let resolved = resolve_template(dict, template, rng);
            prompts.push(apply_grammar_rules(&resolved));
        }
    }
    Ok(prompts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::dict;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    fn sets(short: &[&str], long: &[&str]) -> PatternSets {
        PatternSets {
            short: short.iter().map(|s| s.to_string()).collect(),
            long: long.iter().map(|s| s.to_string()).collect(),
        }
    }

    const BOTH: PatternToggles = PatternToggles { short: true, long: true };
    const NEITHER: PatternToggles = PatternToggles { short: false, long: false };
    const SHORT_ONLY: PatternToggles = PatternToggles { short: true, long: false };
    const LONG_ONLY: PatternToggles = PatternToggles { short: false, long: true };

    #[test]
    fn random_produces_requested_count_with_bounded_length() {
        let d = dict([("Nouns", &["cat", "dog"][..]), ("Adjectives", &["blue"][..])]);
        let prompts = generate_random(&d, 8, &mut rng(1)).unwrap();
        assert_eq!(prompts.len(), 8);
        for prompt in &prompts {
            let words = prompt.split_whitespace().count();
            assert!((10..=20).contains(&words), "length {} out of bounds", words);
        }
    }

    #[test]
    fn random_uses_only_dictionary_words() {
        let d = dict([("A", &["x"][..]), ("B", &["y"][..])]);
        let prompts = generate_random(&d, 4, &mut rng(2)).unwrap();
        for prompt in &prompts {
            for word in prompt.split_whitespace() {
                assert!(word == "x" || word == "y", "unexpected word '{}'", word);
            }
        }
    }

    #[test]
    fn random_on_an_empty_dictionary_fails_fast() {
        let err = generate_random(&Dictionary::new(), 3, &mut rng(0)).unwrap_err();
        assert!(err.to_string().contains("no categories"));
    }

    #[test]
    fn combinatorial_yields_every_combination_in_order() {
        let d = dict([("A", &["x", "y"][..]), ("B", &["1", "2"][..])]);
        let prompts = generate_combinatorial(&d).unwrap();
        assert_eq!(prompts, vec!["x 1", "x 2", "y 1", "y 2"]);
    }

    #[test]
    fn combinatorial_single_category_lists_its_words() {
        let d = dict([("A", &["x", "y", "z"][..])]);
        assert_eq!(generate_combinatorial(&d).unwrap(), vec!["x", "y", "z"]);
    }

    #[test]
    fn combinatorial_on_an_empty_dictionary_fails_fast() {
        let err = generate_combinatorial(&Dictionary::new()).unwrap_err();
        assert!(err.to_string().contains("no categories"));
    }

    #[test]
    fn combinatorial_fails_fast_above_the_cap() {
        // 101^3 = 1_030_301, just over the 1M cap. The check runs before any
        // combination is materialized.
        let words: Vec<String> = (0..101).map(|i| format!("w{}", i)).collect();
        let mut d = Dictionary::new();
        for name in ["A", "B", "C"] {
            d.insert(name, words.clone());
        }
        let err = generate_combinatorial(&d).unwrap_err();
        assert!(err.to_string().contains("1030301"), "got: {}", err);
        assert_eq!(err.exit_code(), crate::exit_codes::GENERATION_FAILURE);
    }

    #[test]
    fn combinatorial_output_is_grammar_corrected() {
        let d = dict([("Articles", &["a"][..]), ("Nouns", &["apple"][..])]);
        assert_eq!(generate_combinatorial(&d).unwrap(), vec!["an apple"]);
    }

    #[test]
    fn pattern_generation_splits_half_and_half() {
        let d = dict([("Nouns_singular", &["cat"][..]), ("Nouns_plural", &["cats"][..])]);
        let patterns = sets(&["short"], &["long"]);
        let prompts =
            generate_with_patterns(&d, &patterns, 10, BOTH, &mut rng(4)).unwrap();
        assert_eq!(prompts.len(), 10);
        assert_eq!(prompts.iter().filter(|p| *p == "short").count(), 5);
        assert_eq!(prompts.iter().filter(|p| *p == "long").count(), 5);
    }

    #[test]
    fn odd_counts_round_the_split_toward_long() {
        let d = dict([("Nouns", &["cat"][..])]);
        let patterns = sets(&["short"], &["long"]);
        let prompts =
            generate_with_patterns(&d, &patterns, 7, NEITHER, &mut rng(4)).unwrap();
        assert_eq!(prompts.iter().filter(|p| *p == "short").count(), 3);
        assert_eq!(prompts.iter().filter(|p| *p == "long").count(), 4);
    }

    #[test]
    fn both_mode_with_one_empty_set_still_honors_the_count() {
        let d = dict([("Nouns", &["cat"][..])]);
        let patterns = sets(&[], &["long"]);
        let prompts =
            generate_with_patterns(&d, &patterns, 10, BOTH, &mut rng(4)).unwrap();
        assert_eq!(prompts.len(), 10);
        assert!(prompts.iter().all(|p| p == "long"));
    }

    #[test]
    fn both_mode_with_no_patterns_at_all_fails_fast() {
        let d = dict([("Nouns", &["cat"][..])]);
        let err = generate_with_patterns(&d, &sets(&[], &[]), 10, BOTH, &mut rng(0))
            .unwrap_err();
        assert!(err.to_string().contains("no short or long patterns"));
    }

    #[test]
    fn short_only_draws_everything_from_the_short_set() {
        let d = dict([("Nouns", &["cat"][..])]);
        let patterns = sets(&["short"], &["long"]);
        let prompts =
            generate_with_patterns(&d, &patterns, 6, SHORT_ONLY, &mut rng(9)).unwrap();
        assert_eq!(prompts.len(), 6);
        assert!(prompts.iter().all(|p| p == "short"));
    }

    #[test]
    fn missing_requested_set_is_a_descriptive_error() {
        let d = dict([("Nouns", &["cat"][..])]);
        let patterns = sets(&["short"], &[]);
        let err = generate_with_patterns(&d, &patterns, 6, LONG_ONLY, &mut rng(0))
            .unwrap_err();
        assert!(err.to_string().contains("no long patterns"));
    }

    #[test]
    fn pattern_prompts_are_resolved_and_grammar_corrected() {
        let d = dict([("Fruits", &["apple"][..])]);
        let patterns = sets(&["a {Fruits}"], &[]);
        let prompts =
            generate_with_patterns(&d, &patterns, 4, SHORT_ONLY, &mut rng(11)).unwrap();
        assert!(prompts.iter().all(|p| p == "an apple"));
    }

    #[test]
    fn generate_dispatches_by_mode() {
        let d = dict([("A", &["x"][..]), ("B", &["1"][..])]);
        let patterns = sets(&["{A}"], &[]);
        let combos =
            generate(Mode::Combinatorial, &d, &patterns, 10, BOTH, &mut rng(0)).unwrap();
        assert_eq!(combos, vec!["x 1"]);

        let random = generate(Mode::Random, &d, &patterns, 2, BOTH, &mut rng(0)).unwrap();
        assert_eq!(random.len(), 2);

        let patterned =
            generate(Mode::Patterns, &d, &patterns, 3, SHORT_ONLY, &mut rng(0)).unwrap();
        assert_eq!(patterned, vec!["x", "x", "x"]);
    }
}
