//! Command modules for the matt CLI.
//!
//! Each subcommand is implemented in its own file following the pattern
//! set by [`traits::Command`].

pub mod common;
pub mod traits;

pub mod init;
pub mod keywords;
pub mod lex;

// Re-export command types
pub use init::{InitArgs, InitCommand};
pub use keywords::{KeywordsArgs, KeywordsCommand};
pub use lex::{LexArgs, LexCommand};
