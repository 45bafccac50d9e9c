//! Exit code constants for the promptgen CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, write failures)
//! - 2: Dictionary failure (unreadable or malformed input file)
//! - 3: Generation failure (missing pattern sets, empty dictionary, blow-up)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid state, or output write failure.
pub const USER_ERROR: i32 = 1;

/// Dictionary failure: the input file could not be read, decoded, or parsed.
pub const DICTIONARY_FAILURE: i32 = 2;

/// Generation failure: a strategy could not produce the requested prompts.
pub const GENERATION_FAILURE: i32 = 3;
