//! Keywords command implementation.
//!
//! Prints the escape words the tokenizer recognizes after `\` and the
//! token each one produces.

use std::io::Write;

use mat_lex::KEYWORDS;

use crate::commands::traits::{Command, CommandDescription};
use crate::error::Result;

/// Arguments for the keywords command.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordsArgs;

/// Keywords command handler.
pub struct KeywordsCommand;

impl KeywordsCommand {
    /// Write the keyword table to `out`, one `\word  token` pair per line.
    pub fn run_with_output(&self, out: &mut impl Write) -> Result<()> {
        for (word, token) in KEYWORDS {
            writeln!(out, "\\{:<8}{}", word, token)?;
        }
        Ok(())
    }
}

impl Command for KeywordsCommand {
    type Args = KeywordsArgs;
    type Output = ();

    fn new(_args: Self::Args) -> Self {
        Self
    }

    fn execute(&self) -> Result<Self::Output> {
        let stdout = std::io::stdout();
        self.run_with_output(&mut stdout.lock())
    }

    fn name() -> &'static str {
        "keywords"
    }
}

impl CommandDescription for KeywordsCommand {
    fn description() -> &'static str {
        "List the recognized escape words"
    }
}
