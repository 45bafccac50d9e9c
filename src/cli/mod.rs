//! CLI argument parsing for promptgen.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::generate::Mode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Promptgen: bulk natural-language prompt generator.
///
/// Combines words from a categorized JSON dictionary into prompt strings,
/// either at random, as the full combinatorial expansion, or by filling
/// `{Category}` placeholders in grammatical templates.
#[derive(Parser, Debug)]
#[command(name = "promptgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for promptgen.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a batch of prompts and write them to a text file.
    Generate(GenerateArgs),

    /// Run the interactive menu.
    ///
    /// Asks for mode, count, and file names in a loop, generating one
    /// batch per round until told to stop.
    #[command(alias = "menu")]
    Interactive,
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Input JSON dictionary file.
    #[arg(short, long, default_value = "prompt_parts.json")]
    pub input: PathBuf,

    /// Output text file. Auto-numbered (invoke_prompts_NNN.txt) when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Generation mode.
    #[arg(short, long, value_enum, default_value_t = Mode::Random)]
    pub mode: Mode,

    /// Number of prompts to generate (ignored in combinatorial mode).
    #[arg(short = 'n', long, default_value_t = 10)]
    pub num_prompts: usize,

    /// Draw from the short pattern set.
    #[arg(long)]
    pub short: bool,

    /// Draw from the long pattern set.
    #[arg(long)]
    pub long: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
