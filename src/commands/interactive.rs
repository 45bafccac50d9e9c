//! The interactive menu: one generation batch per round until told to stop.
//!
//! All reads are sequential blocking line reads. Generation errors are
//! reported and the menu keeps going; only I/O failure on stdin itself ends
//! the command with an error. End-of-input anywhere is a clean exit.

use super::generate::run_batch;
use crate::error::{PromptError, Result};
use crate::generate::{Mode, PatternToggles};
use crate::output::{DEFAULT_OUTPUT_BASE, next_output_path};
use clap::ValueEnum;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Handle `promptgen interactive`.
pub fn cmd_interactive() -> Result<()> {
    let stdin = io::stdin();
    run_menu(&mut stdin.lock())
}

fn run_menu(reader: &mut impl BufRead) -> Result<()> {
    println!("=== promptgen ===");
    println!("Generates batches of prompts from a JSON word dictionary.");
    println!("Modes: random, combinatorial, or patterns (template-driven).");
    println!("Pattern example: 'The {{Adjectives}} {{Nouns_singular}} {{Verbs_singular}} through {{Adjectives}} {{Nouns_plural}}.'");
    println!("Use curly braces {{}} for placeholders.");
    println!();

    let Some(outdir) = ask(reader, "Output folder (press Enter for current folder): ")? else {
        return Ok(());
    };
    let outdir = PathBuf::from(outdir);

    loop {
        let Some(mode) = ask_mode(reader)? else {
            println!("Goodbye!");
            return Ok(());
        };
        let Some(count) = ask_count(reader)? else {
            return Ok(());
        };

        let Some(input) = ask_input_file(reader, &outdir)? else {
            return Ok(());
        };
        if !input.exists() {
            println!("WARNING: input file '{}' does not exist!", input.display());
            continue;
        }

        let Some(output) = ask_output_file(reader, &outdir)? else {
            return Ok(());
        };

        let toggles = if mode == Mode::Patterns {
            match ask_toggles(reader)? {
                Some(toggles) => toggles,
                None => return Ok(()),
            }
        } else {
            PatternToggles { short: true, long: true }
        };

        match run_batch(&input, Some(output), &outdir, mode, count, toggles) {
            Ok((path, written)) => {
                println!("{} prompts generated and saved in {}", written, path.display())
            }
            Err(err) => eprintln!("ERROR during generation: {}", err),
        }

        match ask(reader, "\nGenerate another batch? (Enter for yes, n for no): ")? {
            Some(answer) if answer.eq_ignore_ascii_case("n") => {
                println!("Goodbye!");
                return Ok(());
            }
            Some(_) => {}
            None => return Ok(()),
        }
    }
}

/// Print a question and read one trimmed answer line.
/// `None` means input ended (EOF), which callers treat as a clean exit.
fn ask(reader: &mut impl BufRead, question: &str) -> Result<Option<String>> {
    print!("{}", question);
    io::stdout()
        .flush()
        .map_err(|e| PromptError::User(format!("failed to flush stdout: {}", e)))?;

    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .map_err(|e| PromptError::User(format!("failed to read input: {}", e)))?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn ask_mode(reader: &mut impl BufRead) -> Result<Option<Mode>> {
    loop {
        let Some(answer) = ask(
            reader,
            "Choose mode: random / combinatorial / patterns [default: random, 'exit' to quit]: ",
        )?
        else {
            return Ok(None);
        };

        if answer.eq_ignore_ascii_case("exit") {
            return Ok(None);
        }
        if answer.is_empty() {
            return Ok(Some(Mode::Random));
        }
        match Mode::from_str(&answer, true) {
            Ok(mode) => return Ok(Some(mode)),
            Err(_) => {
                println!("Invalid mode! Choose among: random, combinatorial, patterns.");
            }
        }
    }
}

fn ask_count(reader: &mut impl BufRead) -> Result<Option<usize>> {
    loop {
        let Some(answer) = ask(reader, "How many prompts? [default: 10]: ")? else {
            return Ok(None);
        };
        if answer.is_empty() {
            return Ok(Some(10));
        }
        match answer.parse::<usize>() {
            Ok(count) => return Ok(Some(count)),
            Err(_) => println!("Please enter a whole number."),
        }
    }
}

fn ask_input_file(reader: &mut impl BufRead, outdir: &Path) -> Result<Option<PathBuf>> {
    let Some(answer) = ask(
        reader,
        "Input file name (extension optional) [default: prompt_parts.json]: ",
    )?
    else {
        return Ok(None);
    };

    let name = if answer.is_empty() {
        "prompt_parts.json".to_string()
    } else {
        answer
    };
    let mut path = PathBuf::from(name);
    if path.extension().is_none() {
        path.set_extension("json");
    }
    // Relative names resolve inside the chosen folder; absolute paths win.
    Ok(Some(outdir.join(path)))
}

fn ask_output_file(reader: &mut impl BufRead, outdir: &Path) -> Result<Option<PathBuf>> {
    let Some(answer) = ask(
        reader,
        "Output file name (extension optional), Enter for auto-name: ",
    )?
    else {
        return Ok(None);
    };

    if answer.is_empty() {
        return Ok(Some(next_output_path(outdir, DEFAULT_OUTPUT_BASE)));
    }
    let mut path = PathBuf::from(answer);
    if path.extension().is_none() {
        path.set_extension("txt");
    }
    Ok(Some(outdir.join(path)))
}

fn ask_toggles(reader: &mut impl BufRead) -> Result<Option<PatternToggles>> {
    let Some(answer) = ask(
        reader,
        "Use long patterns, short patterns, or both? [l/s/b, default: b]: ",
    )?
    else {
        return Ok(None);
    };

    let toggles = match answer.to_lowercase().as_str() {
        "l" => PatternToggles { short: false, long: true },
        "s" => PatternToggles { short: true, long: false },
        _ => PatternToggles { short: true, long: true },
    };
    Ok(Some(toggles))
}
