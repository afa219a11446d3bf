//! Lex command implementation.
//!
//! Loads an expression buffer, runs the tokenizer over it and dumps the
//! token stream. Diagnostics are written to stderr as they are reported;
//! tokens go to stdout.

use std::io::Write;
use std::path::PathBuf;

use mat_lex::{LexOptions, Lexer, Notation, Token};
use mat_util::{Handler, Span};
use serde::Serialize;
use tracing::{debug, info};

use crate::commands::common::{InputSource, OutputFormat};
use crate::commands::traits::{Command, CommandDescription};
use crate::config::Config;
use crate::error::{MattError, Result};

/// Arguments for the lex command.
#[derive(Debug, Clone, Default)]
pub struct LexArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Input file, `-` for stdin.
    pub file: Option<PathBuf>,
    /// Inline expression.
    pub expr: Option<String>,
    /// Notation override.
    pub notation: Option<Notation>,
    /// Suppress warning diagnostics.
    pub no_warnings: bool,
    /// Keep lexing after an unexpected character.
    pub lenient: bool,
    /// Skip whitespace between tokens.
    pub skip_whitespace: bool,
    /// Dump format override.
    pub format: Option<OutputFormat>,
    /// Print byte offsets next to tokens.
    pub show_offsets: bool,
    /// Loaded configuration.
    pub config: Config,
}

/// One token of the dump.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenRecord {
    /// The token
    #[serde(flatten)]
    pub token: Token,
    /// Byte offset of the token, when offsets are requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
}

/// Lex command handler.
pub struct LexCommand {
    args: LexArgs,
}

impl LexCommand {
    /// Create a new LexCommand.
    pub fn new(args: LexArgs) -> Self {
        Self { args }
    }

    /// Execute the command, writing the dump to stdout.
    pub fn run(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_with_output(&mut out)
    }

    /// Execute the command, writing the dump to `out`.
    pub fn run_with_output(&self, out: &mut impl Write) -> Result<()> {
        let source = InputSource::select(self.args.file.as_deref(), self.args.expr.as_deref())?;
        let buffer = source.read()?;
        let options = self.lex_options();
        debug!(input = %source.describe(), bytes = buffer.len(), ?options, "lexing");

        let handler = Handler::new_echoing();
        let mut lexer = Lexer::from_bytes(&buffer, &handler, options)?;

        let format = self.format();
        let show_offsets = self.show_offsets();
        let mut records = Vec::new();
        let mut written: std::io::Result<()> = Ok(());
        lexer.collect_tokens_with(|token, span: Span| {
            let record = TokenRecord {
                token,
                offset: show_offsets.then_some(span.start),
            };
            // Text lines go out as they are lexed, between the echoed diagnostics.
            if format == OutputFormat::Text && written.is_ok() {
                written = write_text_record(&record, &mut *out);
            }
            records.push(record);
        });
        written?;

        if format == OutputFormat::Json {
            serde_json::to_writer_pretty(&mut *out, &records)?;
            writeln!(out)?;
        }

        let failures = records.iter().filter(|r| r.token.is_fail()).count();
        if self.args.verbose {
            info!(
                tokens = records.len(),
                failures,
                warnings = handler.warning_count(),
                "lexed {}",
                source.describe()
            );
        }

        if failures > 0 || handler.has_errors() {
            return Err(MattError::Tokenize {
                failures,
                errors: handler.error_count(),
            });
        }
        Ok(())
    }

    /// Lexer options from the config file with command-line flags applied.
    fn lex_options(&self) -> LexOptions {
        let mut options = self.args.config.lexer;
        if let Some(notation) = self.args.notation {
            options = options.with_notation(notation);
        }
        if self.args.no_warnings {
            options = options.with_show_warnings(false);
        }
        if self.args.lenient {
            options = options.with_strict_reporting(false);
        }
        if self.args.skip_whitespace {
            options = options.with_skip_whitespace(true);
        }
        options
    }

    fn format(&self) -> OutputFormat {
        self.args.format.unwrap_or(self.args.config.output.format)
    }

    fn show_offsets(&self) -> bool {
        self.args.show_offsets || self.args.config.output.show_offsets
    }
}

/// Write one line of the text dump.
fn write_text_record(record: &TokenRecord, out: &mut impl Write) -> std::io::Result<()> {
    match record.offset {
        Some(offset) => writeln!(out, "{:>4}  {}", offset, record.token),
        None => writeln!(out, "{}", record.token),
    }
}

impl Command for LexCommand {
    type Args = LexArgs;
    type Output = ();

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "lex"
    }
}

impl CommandDescription for LexCommand {
    fn description() -> &'static str {
        "Tokenize a math expression and print the token stream"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputConfig;

    fn lex_expr(expr: &str, args: LexArgs) -> (Result<()>, String) {
        let command = LexCommand::new(LexArgs {
            expr: Some(expr.to_string()),
            ..args
        });
        let mut out = Vec::new();
        let result = command.run_with_output(&mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_lex_text_dump() {
        let (result, out) = lex_expr("x+2", LexArgs::default());
        assert!(result.is_ok());
        assert_eq!(out, "Variable(x)\n+\nNumber(2.000000)\n");
    }

    #[test]
    fn test_lex_text_dump_with_offsets() {
        let args = LexArgs {
            show_offsets: true,
            skip_whitespace: true,
            ..LexArgs::default()
        };
        let (_, out) = lex_expr(r"\pi r", args);
        assert_eq!(out, "   0  π (pi)\n   4  Variable(r)\n");
    }

    #[test]
    fn test_lex_json_dump() {
        let args = LexArgs {
            format: Some(OutputFormat::Json),
            ..LexArgs::default()
        };
        let (result, out) = lex_expr("f(x)", args);
        assert!(result.is_ok());
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json[0]["kind"], "Function");
        assert_eq!(json[0]["value"], "f");
        assert_eq!(json[1]["kind"], "OParen");
        assert!(json[1].get("value").is_none());
        assert!(json[1].get("offset").is_none());
    }

    #[test]
    fn test_lex_config_format_used_without_flag() {
        let args = LexArgs {
            config: Config {
                output: OutputConfig {
                    format: OutputFormat::Json,
                    show_offsets: true,
                },
                ..Config::default()
            },
            ..LexArgs::default()
        };
        let (_, out) = lex_expr("1", args);
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json[0]["value"], 1.0);
        assert_eq!(json[0]["offset"], 0);
    }

    #[test]
    fn test_lex_fail_is_an_error() {
        let (result, out) = lex_expr("x$y", LexArgs::default());
        assert_eq!(out, "Variable(x)\nFail\n");
        assert!(matches!(
            result,
            Err(MattError::Tokenize {
                failures: 1,
                errors: 1
            })
        ));
    }

    #[test]
    fn test_lex_lenient_keeps_going() {
        let args = LexArgs {
            lenient: true,
            ..LexArgs::default()
        };
        let (result, out) = lex_expr("x$y", args);
        assert_eq!(out, "Variable(x)\nFail\nVariable(y)\n");
        assert!(matches!(
            result,
            Err(MattError::Tokenize {
                failures: 1,
                errors: 0
            })
        ));
    }

    #[test]
    fn test_lex_unknown_escape_is_not_an_error() {
        let (result, out) = lex_expr(r"x\alpha", LexArgs::default());
        assert!(result.is_ok());
        assert_eq!(out, "Variable(x)\n");
    }

    #[test]
    fn test_flags_override_config() {
        let command = LexCommand::new(LexArgs {
            notation: Some(Notation::Mat),
            no_warnings: true,
            lenient: true,
            skip_whitespace: true,
            ..LexArgs::default()
        });
        let options = command.lex_options();
        assert_eq!(options.notation, Notation::Mat);
        assert!(!options.show_warnings);
        assert!(!options.strict_reporting);
        assert!(options.skip_whitespace);
    }

    #[test]
    fn test_space_fails_unless_skipped() {
        let (result, out) = lex_expr("x y", LexArgs::default());
        assert_eq!(out, "Variable(x)\nFail\n");
        assert!(matches!(result, Err(MattError::Tokenize { .. })));

        let args = LexArgs {
            skip_whitespace: true,
            ..LexArgs::default()
        };
        let (result, out) = lex_expr("x y", args);
        assert!(result.is_ok());
        assert_eq!(out, "Variable(x)\nVariable(y)\n");
    }

    #[test]
    fn test_text_dump_is_written_while_lexing() {
        struct FailingWriter;
        impl Write for FailingWriter {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let command = LexCommand::new(LexArgs {
            expr: Some("x+1".to_string()),
            ..LexArgs::default()
        });
        let result = command.run_with_output(&mut FailingWriter);
        assert!(matches!(result, Err(MattError::Io(_))));
    }

    #[test]
    fn test_lex_command_name() {
        assert_eq!(<LexCommand as Command>::name(), "lex");
    }
}
