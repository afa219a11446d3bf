//! Matt CLI - command-line front end for the Mat math tokenizer.
//!
//! This is the main entry point for the matt CLI application.
//! It uses clap for argument parsing and dispatches to the appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mat_lex::Notation;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::OutputFormat;
use commands::traits::{Command, CommandDescription};
use commands::{InitArgs, InitCommand, KeywordsArgs, KeywordsCommand, LexArgs, LexCommand};
use config::Config;
use error::{MattError, Result};

/// Matt - tokenize LaTeX-like and Mat math expressions
#[derive(Parser, Debug)]
#[command(name = "matt")]
#[command(author = "Mat Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize LaTeX-like and Mat math expressions", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "MATT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "MATT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "MATT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the matt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenize an expression and print the tokens
    ///
    /// Reads the expression from FILE, from --expr, or from standard input
    /// when FILE is `-` or omitted. Exits with an error if an unexpected
    /// character was found.
    Lex(LexCommandArgs),

    /// List the recognized escape words
    Keywords,

    /// Write a default matt.toml
    Init(InitCommandArgs),
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommandArgs {
    /// Input file (`-` for standard input)
    #[arg(conflicts_with = "expr")]
    file: Option<PathBuf>,

    /// Expression to tokenize
    #[arg(short, long)]
    expr: Option<String>,

    /// Input notation (latex, mat)
    #[arg(short, long, env = "MATT_NOTATION")]
    notation: Option<Notation>,

    /// Suppress warnings
    #[arg(long)]
    no_warnings: bool,

    /// Keep lexing after an unexpected character
    #[arg(long)]
    lenient: bool,

    /// Skip whitespace between tokens instead of failing on it
    #[arg(long)]
    skip_whitespace: bool,

    /// Output format
    #[arg(short = 'F', long, value_enum, env = "MATT_FORMAT")]
    format: Option<OutputFormat>,

    /// Print the byte offset of each token
    #[arg(long)]
    show_offsets: bool,
}

/// Arguments for the init subcommand.
#[derive(Parser, Debug)]
struct InitCommandArgs {
    /// Directory to write matt.toml into (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing matt.toml
    #[arg(short, long)]
    force: bool,
}

/// Main entry point for the matt CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.no_color)?;

    // Load configuration
    let config = load_config(cli.config.as_deref())?;

    // Execute the selected command
    execute_command(cli.command, cli.verbose, config)
}

/// Initialize the logging system.
///
/// Log output goes to stderr so that token dumps on stdout stay clean.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| MattError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    let verbose = verbose || config.verbose;
    match command {
        Commands::Lex(args) => execute_lex(args, verbose, config),
        Commands::Keywords => run_command::<KeywordsCommand>(KeywordsArgs),
        Commands::Init(args) => execute_init(args, verbose),
    }
}

/// Build and run a command.
fn run_command<C: Command + CommandDescription>(args: C::Args) -> Result<C::Output> {
    tracing::debug!(command = C::name(), "{}", C::description());
    C::new(args).execute()
}

/// Execute the lex command.
fn execute_lex(args: LexCommandArgs, verbose: bool, config: Config) -> Result<()> {
    let lex_args = LexArgs {
        verbose,
        file: args.file,
        expr: args.expr,
        notation: args.notation,
        no_warnings: args.no_warnings,
        lenient: args.lenient,
        skip_whitespace: args.skip_whitespace,
        format: args.format,
        show_offsets: args.show_offsets,
        config,
    };
    run_command::<LexCommand>(lex_args)
}

/// Execute the init command.
fn execute_init(args: InitCommandArgs, verbose: bool) -> Result<()> {
    let init_args = InitArgs {
        verbose,
        force: args.force,
        path: args.path,
    };
    run_command::<InitCommand>(init_args).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_lex_expr() {
        let cli = Cli::parse_from(["matt", "lex", "-e", "x+1"]);
        if let Commands::Lex(args) = cli.command {
            assert_eq!(args.expr, Some("x+1".to_string()));
            assert!(args.file.is_none());
        } else {
            panic!("Expected Lex command");
        }
    }

    #[test]
    fn test_cli_parse_lex_file() {
        let cli = Cli::parse_from(["matt", "lex", "expr.tex"]);
        if let Commands::Lex(args) = cli.command {
            assert_eq!(args.file, Some(PathBuf::from("expr.tex")));
        } else {
            panic!("Expected Lex command");
        }
    }

    #[test]
    fn test_cli_parse_lex_flags() {
        let cli = Cli::parse_from([
            "matt",
            "lex",
            "-e",
            "1/2",
            "--notation",
            "mat",
            "--no-warnings",
            "--lenient",
            "--skip-whitespace",
            "--format",
            "json",
            "--show-offsets",
        ]);
        if let Commands::Lex(args) = cli.command {
            assert_eq!(args.notation, Some(Notation::Mat));
            assert!(args.no_warnings);
            assert!(args.lenient);
            assert!(args.skip_whitespace);
            assert_eq!(args.format, Some(OutputFormat::Json));
            assert!(args.show_offsets);
        } else {
            panic!("Expected Lex command");
        }
    }

    #[test]
    fn test_cli_rejects_unknown_notation() {
        let result = Cli::try_parse_from(["matt", "lex", "-e", "x", "--notation", "tex"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_rejects_file_and_expr() {
        let result = Cli::try_parse_from(["matt", "lex", "a.tex", "-e", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_keywords() {
        let cli = Cli::parse_from(["matt", "keywords"]);
        assert!(matches!(cli.command, Commands::Keywords));
    }

    #[test]
    fn test_cli_parse_init_with_force() {
        let cli = Cli::parse_from(["matt", "init", "--force", "--path", "/tmp/m"]);
        if let Commands::Init(args) = cli.command {
            assert!(args.force);
            assert_eq!(args.path, Some(PathBuf::from("/tmp/m")));
        } else {
            panic!("Expected Init command");
        }
    }

    #[test]
    fn test_cli_parse_global_flags() {
        let cli = Cli::parse_from([
            "matt",
            "--verbose",
            "--no-color",
            "--config",
            "/path/to/matt.toml",
            "keywords",
        ]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/matt.toml")));
    }
}
