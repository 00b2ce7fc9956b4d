//! Command-line interface for madx-lexer
//! Highlights a MAD-X file (or stdin) in one of the registered output formats.
//!
//! Usage:
//!   madx [`<path>`|-] [--format `<format>`] [--lexer `<alias>`] [--config `<file>`] [--merge]
//!   madx --list-formats                        - List available output formats
//!   madx --list-lexers                         - List registered lexers
//!
//! Log output goes to stderr and is controlled by the `MADX_LOG` environment variable
//! (`MADX_LOG=debug madx job.madx`), default `warn`.

use clap::{Arg, ArgAction, ArgMatches, Command};
use madx_lexer::madx::config::{Loader, MadxConfig};
use madx_lexer::madx::formats::FormatRegistry;
use madx_lexer::madx::lexing::merge_adjacent;
use madx_lexer::madx::{LexerRegistry, Token, Tokenizer};
use std::io::{IsTerminal, Read};
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let matches = Command::new("madx")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Syntax highlighting for MAD-X files")
        .arg(
            Arg::new("path")
                .help("Path to the MAD-X file, or - for stdin")
                .default_value("-")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default from configuration: terminal)"),
        )
        .arg(
            Arg::new("lexer")
                .long("lexer")
                .short('l')
                .help("Lexer alias (default: chosen by file name, then MAD-X)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("merge")
                .long("merge")
                .help("Merge adjacent tokens of the same kind")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-lexers")
                .long("list-lexers")
                .help("List registered lexers")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let lexers = LexerRegistry::with_defaults();

    if matches.get_flag("list-lexers") {
        handle_list_lexers_command(&lexers);
        return;
    }

    let config = load_config(&matches);
    let color = config
        .terminal
        .color
        .enabled(std::io::stdout().is_terminal());
    let formats = FormatRegistry::from_config(&config, color);

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&formats);
        return;
    }

    let path = matches
        .get_one::<String>("path")
        .map(String::as_str)
        .unwrap_or("-");
    let lexer = matches.get_one::<String>("lexer").map(String::as_str);
    handle_highlight_command(path, lexer, &config, &lexers, &formats);
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("MADX_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Layer the user's file and the command-line flags over the built-in defaults
fn load_config(matches: &ArgMatches) -> MadxConfig {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }

    let loader = match matches.get_one::<String>("format") {
        Some(format) => loader.set_override("output.format", format.as_str()),
        None => Ok(loader),
    }
    .and_then(|loader| {
        if matches.get_flag("merge") {
            loader.set_override("output.merge_adjacent", true)
        } else {
            Ok(loader)
        }
    });

    loader.and_then(Loader::build).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    })
}

/// Handle the highlight command
fn handle_highlight_command(
    path: &str,
    alias: Option<&str>,
    config: &MadxConfig,
    lexers: &LexerRegistry,
    formats: &FormatRegistry,
) {
    let source = read_source(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        std::process::exit(1);
    });

    let lexer = select_lexer(lexers, path, alias).unwrap_or_else(|| {
        eprintln!("Unknown lexer '{}'", alias.unwrap_or_default());
        eprintln!("\nAvailable lexers:");
        for info in lexers.list() {
            eprintln!("  {} ({})", info.name, info.aliases.join(", "));
        }
        std::process::exit(1);
    });
    tracing::debug!(lexer = lexer.info().name, path, "highlighting");

    let mut tokens: Vec<Token<'_>> = lexer.tokenize(&source).collect();
    if config.output.merge_adjacent {
        tokens = merge_adjacent(&source, tokens);
    }

    let formatted = formats
        .format(&tokens, &config.output.format)
        .unwrap_or_else(|e| {
            eprintln!("Error formatting tokens: {}", e);
            eprintln!("Available formats: {}", formats.list_formats().join(", "));
            std::process::exit(1);
        });

    print!("{}", formatted);
}

fn read_source(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        std::fs::read_to_string(path)
    }
}

/// `--lexer` wins; otherwise match the file name, falling back to MAD-X.
///
/// Returns `None` only for an unknown alias.
fn select_lexer<'r>(
    lexers: &'r LexerRegistry,
    path: &str,
    alias: Option<&str>,
) -> Option<&'r dyn Tokenizer> {
    match alias {
        Some(alias) => lexers.by_alias(alias),
        None => lexers
            .for_filename(path)
            .or_else(|| lexers.by_alias("madx")),
    }
}

/// Handle the list-formats command
fn handle_list_formats_command(formats: &FormatRegistry) {
    println!("Available formats:\n");

    for name in formats.list_formats() {
        if let Some(formatter) = formats.get(&name) {
            println!("  {}", name);
            println!("    {}", formatter.description());
            println!();
        }
    }
}

/// Handle the list-lexers command
fn handle_list_lexers_command(lexers: &LexerRegistry) {
    println!("Available lexers:\n");

    for info in lexers.list() {
        println!("  {}", info.name);
        println!("    aliases: {}", info.aliases.join(", "));
        println!("    filenames: {}", info.filenames.join(", "));
        println!();
    }
}
