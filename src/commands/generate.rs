//! The `generate` command: one batch from dictionary to output file.

use crate::cli::GenerateArgs;
use crate::dictionary::{
    PATTERNS_LONG_KEY, PATTERNS_SHORT_KEY, load_dictionary, load_patterns, read_json_file,
};
use crate::error::Result;
use crate::generate::{self, Mode, PatternSets, PatternToggles};
use crate::output::{DEFAULT_OUTPUT_BASE, next_output_path, write_prompts};
use std::path::{Path, PathBuf};

/// Handle `promptgen generate`.
pub fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let toggles = PatternToggles {
        short: args.short,
        long: args.long,
    };
    let (path, written) = run_batch(
        &args.input,
        args.output,
        Path::new(""),
        args.mode,
        args.num_prompts,
        toggles,
    )?;
    println!(
        "{} prompts generated and saved in {} (UTF-8)",
        written,
        path.display()
    );
    Ok(())
}

/// Load the dictionary, run one generation batch, and write the output file.
///
/// When `output` is `None` the next free auto-numbered name under `outdir`
/// is used. Returns the written path and prompt count. Shared with the
/// interactive menu, which supplies its own output folder.
pub fn run_batch(
    input: &Path,
    output: Option<PathBuf>,
    outdir: &Path,
    mode: Mode,
    count: usize,
    toggles: PatternToggles,
) -> Result<(PathBuf, usize)> {
    let root = read_json_file(input)?;
    let mut dict = load_dictionary(&root)?;
    dict.ensure_form_aliases();

    let patterns = PatternSets {
        short: load_patterns(&root, PATTERNS_SHORT_KEY),
        long: load_patterns(&root, PATTERNS_LONG_KEY),
    };

    let mut rng = rand::rng();
    let prompts = generate::generate(mode, &dict, &patterns, count, toggles, &mut rng)?;

    let path = output.unwrap_or_else(|| next_output_path(outdir, DEFAULT_OUTPUT_BASE));
    write_prompts(&path, &prompts)?;
    Ok((path, prompts.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const BOTH: PatternToggles = PatternToggles { short: true, long: true };

    fn write_input(dir: &Path) -> PathBuf {
        let input = dir.join("parts.json");
        fs::write(
            &input,
            r#"{
                "prompt_dictionary": {
                    "Dictionary": {
                        "Adjectives": ["vast"],
                        "Nouns": {"singular": ["cat"], "plural": ["cats"]}
                    },
                    "Patterns_short": ["a {Adjectives} {Nouns_singular}"],
                    "Patterns_long": ["the {Adjectives} {Nouns} in a {Adjectives} place"]
                }
            }"#,
        )
        .unwrap();
        input
    }

    #[test]
    fn batch_writes_the_requested_number_of_prompts() {
        let dir = tempdir().unwrap();
        let input = write_input(dir.path());
        let output = dir.path().join("out.txt");

        let (path, written) =
            run_batch(&input, Some(output.clone()), dir.path(), Mode::Patterns, 6, BOTH)
                .unwrap();
        assert_eq!(path, output);
        assert_eq!(written, 6);

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(content.split("\n_\n").count(), 6);
    }

    #[test]
    fn batch_auto_numbers_when_no_output_is_given() {
        let dir = tempdir().unwrap();
        let input = write_input(dir.path());

        let (first, _) = run_batch(&input, None, dir.path(), Mode::Random, 2, BOTH).unwrap();
        let (second, _) = run_batch(&input, None, dir.path(), Mode::Random, 2, BOTH).unwrap();

        assert!(first.ends_with("invoke_prompts_001.txt"));
        assert!(second.ends_with("invoke_prompts_002.txt"));
        assert!(first.exists() && second.exists());
    }

    #[test]
    fn batch_surfaces_dictionary_errors() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let err = run_batch(&missing, None, dir.path(), Mode::Random, 2, BOTH).unwrap_err();
        assert_eq!(err.exit_code(), crate::exit_codes::DICTIONARY_FAILURE);
    }

    #[test]
    fn combinatorial_batch_expands_the_dictionary() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("parts.json");
        fs::write(&input, r#"{"A": ["x", "y"], "B": ["1", "2"]}"#).unwrap();
        let output = dir.path().join("combos.txt");

        run_batch(&input, Some(output.clone()), dir.path(), Mode::Combinatorial, 0, BOTH)
            .unwrap();

        let content = fs::read_to_string(&output).unwrap();
        let prompts: Vec<&str> = content.split("\n_\n").collect();
        assert_eq!(prompts, vec!["x 1", "x 2", "y 1", "y 2"]);
    }
}
