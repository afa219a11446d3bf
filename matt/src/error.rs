//! Error handling module for the matt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use mat_lex::LexError;
use thiserror::Error;

/// Main error type for the matt CLI application.
#[derive(Error, Debug)]
pub enum MattError {
    /// Error when the configuration cannot be loaded or saved.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when file operations fail.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The input buffer could not be handed to the lexer.
    #[error("Input error: {0}")]
    Input(#[from] LexError),

    /// The token stream contained failures or the lexer halted.
    #[error("Tokenizing failed: {failures} unexpected character(s), {errors} error(s)")]
    Tokenize {
        /// Number of `Fail` tokens produced
        failures: usize,
        /// Number of error diagnostics reported
        errors: usize,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using MattError.
pub type Result<T> = std::result::Result<T, MattError>;
