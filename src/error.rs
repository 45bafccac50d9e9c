//! Error types for the promptgen CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for promptgen operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum PromptError {
    /// User provided invalid arguments or an output path could not be written.
    #[error("{0}")]
    User(String),

    /// The dictionary file could not be read, decoded, or parsed.
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// A generation strategy could not produce the requested prompts.
    #[error("Generation failed: {0}")]
    Generation(String),
}

impl PromptError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PromptError::User(_) => exit_codes::USER_ERROR,
            PromptError::Dictionary(_) => exit_codes::DICTIONARY_FAILURE,
            PromptError::Generation(_) => exit_codes::GENERATION_FAILURE,
        }
    }
}

/// Result type alias for promptgen operations.
pub type Result<T> = std::result::Result<T, PromptError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = PromptError::User("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn dictionary_error_has_correct_exit_code() {
        let err = PromptError::Dictionary("not valid JSON".to_string());
        assert_eq!(err.exit_code(), exit_codes::DICTIONARY_FAILURE);
    }

    #[test]
    fn generation_error_has_correct_exit_code() {
        let err = PromptError::Generation("no short patterns".to_string());
        assert_eq!(err.exit_code(), exit_codes::GENERATION_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = PromptError::Dictionary("unsupported encoding".to_string());
        assert_eq!(err.to_string(), "Dictionary error: unsupported encoding");

        let err = PromptError::Generation("no patterns found".to_string());
        assert_eq!(err.to_string(), "Generation failed: no patterns found");
    }
}
