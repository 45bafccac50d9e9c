//! Output writing for generated prompts.
//!
//! Prompts are written to a UTF-8 text file, one prompt per block, separated
//! by a `_` delimiter line, with no trailing delimiter. When the user does
//! not name an output file, the next free auto-numbered name
//! (`invoke_prompts_001.txt`, `_002`, ...) is used.
//!
//! Writes go through a temp-file-and-rename sequence so an interrupted run
//! never leaves a truncated output file behind.

use crate::error::{PromptError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Base name for auto-numbered output files.
pub const DEFAULT_OUTPUT_BASE: &str = "invoke_prompts";

/// Line placed between prompts in the output file.
const PROMPT_DELIMITER: &str = "\n_\n";

/// First free auto-numbered output path in `outdir`.
pub fn next_output_path<P: AsRef<Path>>(outdir: P, base: &str) -> PathBuf {
    let outdir = outdir.as_ref();
    let mut index = 1u32;
    loop {
        let candidate = outdir.join(format!("{}_{:03}.txt", base, index));
        if !candidate.exists() {
            return candidate;
        }
        index += 1;
    }
}

/// Write prompts to `path`, delimiter-separated, creating parent directories
/// as needed.
pub fn write_prompts<P: AsRef<Path>>(path: P, prompts: &[String]) -> Result<()> {
    let content = prompts.join(PROMPT_DELIMITER);
    atomic_write(path.as_ref(), content.as_bytes())
}

/// Atomically write bytes to a file via a temp file in the same directory.
fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            PromptError::User(format!(
                "failed to create output directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content)?;
    atomic_replace(&temp_path, path)
}

/// Temp file path in the same directory as the target (`.{filename}.tmp`).
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| PromptError::User(format!("invalid output path '{}'", target.display())))?;
    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        PromptError::User(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content).map_err(|e| {
        let _ = fs::remove_file(path);
        PromptError::User(format!("failed to write to temporary file: {}", e))
    })?;

    file.sync_all().map_err(|e| {
        let _ = fs::remove_file(path);
        PromptError::User(format!("failed to sync temporary file to disk: {}", e))
    })
}

#[cfg(unix)]
fn atomic_replace(source: &Path, target: &Path) -> Result<()> {
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        PromptError::User(format!(
            "failed to move output into place at '{}': {}",
            target.display(),
            e
        ))
    })
}

#[cfg(not(unix))]
fn atomic_replace(source: &Path, target: &Path) -> Result<()> {
    // Windows rename fails when the target exists; replace is two steps there.
    if target.exists() {
        fs::remove_file(target).map_err(|e| {
            let _ = fs::remove_file(source);
            PromptError::User(format!(
                "failed to replace existing output '{}': {}",
                target.display(),
                e
            ))
        })?;
    }
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        PromptError::User(format!(
            "failed to move output into place at '{}': {}",
            target.display(),
            e
        ))
    })
}
