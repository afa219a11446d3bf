//! Common types and utilities for matt commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations to ensure consistency.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MattError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported token dump formats.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One rendered token per line
    #[default]
    Text,
    /// A JSON array of token objects
    Json,
}

// ============================================================================
// Input Loading
// ============================================================================

/// Path argument that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Where the expression buffer comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource<'a> {
    /// Inline expression given on the command line
    Expr(&'a str),
    /// A file on disk
    File(&'a Path),
    /// Standard input
    Stdin,
}

impl<'a> InputSource<'a> {
    /// Pick the source from the `FILE` and `--expr` arguments.
    pub fn select(file: Option<&'a Path>, expr: Option<&'a str>) -> Result<Self> {
        match (file, expr) {
            (Some(_), Some(_)) => Err(MattError::Validation(
                error_messages::FILE_AND_EXPR.to_string(),
            )),
            (None, Some(expr)) => Ok(Self::Expr(expr)),
            (Some(path), None) if path == Path::new(STDIN_PATH) => Ok(Self::Stdin),
            (Some(path), None) => Ok(Self::File(path)),
            (None, None) => Ok(Self::Stdin),
        }
    }

    /// Read the whole buffer.
    pub fn read(&self) -> Result<Vec<u8>> {
        match self {
            Self::Expr(expr) => Ok(expr.as_bytes().to_vec()),
            Self::File(path) => {
                if !path.is_file() {
                    return Err(MattError::FileOperation(format!(
                        "{} {}",
                        error_messages::INPUT_PATH_NOT_FILE,
                        path.display()
                    )));
                }
                Ok(std::fs::read(path)?)
            },
            Self::Stdin => {
                let mut buffer = Vec::new();
                std::io::stdin().lock().read_to_end(&mut buffer)?;
                Ok(buffer)
            },
        }
    }

    /// Short description used in log lines.
    pub fn describe(&self) -> String {
        match self {
            Self::Expr(_) => "expression".to_string(),
            Self::File(path) => path.display().to_string(),
            Self::Stdin => "stdin".to_string(),
        }
    }
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when both a file and an inline expression are given.
    pub const FILE_AND_EXPR: &str = "Give either an input file or --expr, not both";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Error when target path is not a directory.
    pub const TARGET_NOT_DIR: &str = "Target path is not a directory:";

    /// Error when a config file would be overwritten.
    pub const CONFIG_EXISTS: &str = "Configuration file already exists (use --force):";
}

// ============================================================================
// Output Messages
// ============================================================================

/// Standard output message templates.
pub mod output_messages {
    /// Message when a file is created.
    pub const CREATED_FILE: &str = "✅ Created file:";
}
