// Command-line interface for markdown2html
//
// This binary converts one Markdown file into one HTML file. All of the conversion work lives
// in the md2html-babel crate; this program only checks its arguments, loads configuration,
// reads the input, and writes the output in a single write.
//
// Usage:
//  markdown2html <input> <output>                    - Convert input.md into output.html
//  markdown2html <input> <output> --config <file>    - Layer a md2html.toml over the defaults
//  markdown2html <input> <output> --verbose          - Log block transitions to stderr
//
// Exit status is 2 for usage errors (reported by clap) and 1 for a missing input file,
// a broken configuration, or any failure while reading, converting, or writing.

use clap::{Arg, ArgAction, Command, ValueHint};
use md2html_babel::transforms::markdown_to_html_with_rules;
use md2html_babel::ConversionRules;
use md2html_config::{Loader, Md2HtmlConfig};
use std::fs;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn build_cli() -> Command {
    Command::new("markdown2html")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a Markdown file to an HTML file")
        .long_about(
            "markdown2html converts a Markdown file to an HTML file, line by line.\n\n\
            Supported syntax:\n  \
            - # to ###### headings\n  \
            - **bold** and __italic__ (first pair on each line)\n  \
            - '-' unordered and '*' ordered list items\n  \
            - paragraphs separated by blank lines\n  \
            - [[text]] replaced by the MD5 digest of text\n  \
            - ((text)) replaced by text without 'c' or 'C'\n\n\
            Examples:\n  \
            markdown2html README.md README.html\n  \
            markdown2html notes.md notes.html --config md2html.toml"
        )
        .arg(
            Arg::new("input")
                .help("Markdown file to convert")
                .required(true)
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .help("HTML file to write")
                .required(true)
                .index(2)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a md2html.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log block transitions to stderr")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    init_tracing(matches.get_flag("verbose"));

    let input = matches
        .get_one::<String>("input")
        .expect("input is required");
    let output = matches
        .get_one::<String>("output")
        .expect("output is required");

    if !Path::new(input).is_file() {
        eprintln!("Missing {input}");
        std::process::exit(1);
    }

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    handle_convert_command(input, output, &config);
}

/// --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Handle the conversion of one file
fn handle_convert_command(input: &str, output: &str, config: &Md2HtmlConfig) {
    let rules = ConversionRules::from(&config.convert.rules);
    convert_file(input, output, &rules).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn convert_file(input: &str, output: &str, rules: &ConversionRules) -> Result<(), String> {
    let source =
        fs::read_to_string(input).map_err(|e| format!("reading file '{input}': {e}"))?;

    let html = markdown_to_html_with_rules(&source, rules).map_err(|e| e.to_string())?;

    fs::write(output, &html).map_err(|e| format!("writing file '{output}': {e}"))?;

    info!(input, output, bytes = html.len(), "wrote html");
    Ok(())
}

fn load_cli_config(explicit_path: Option<&str>) -> Md2HtmlConfig {
    let loader = Loader::new().with_optional_file("md2html.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}
