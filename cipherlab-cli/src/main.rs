#![deny(missing_docs)]
//! A command-line interface for the cipher lab.

use cipherlab_core::key::CipherKind;
use cipherlab_core::lab::{self, AnalysisTool, Direction};
use cipherlab_core::text;
use clap::{Args, Parser, Subcommand};
use log::{error, info};
use serde::Serialize;
use std::fmt::Display;
use std::path::PathBuf;

mod input;
mod render;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "EXAMPLES:\n  \n# Encrypt with a Caesar shift of 3\ncipherlab-cli encrypt --cipher caesar --key 3 \"Hello World\"\n\n# Decrypt a Vigenere ciphertext read from a file\ncipherlab-cli decrypt --cipher vigenere --key LEMON --input ./secret.txt\n\n# Check a Rail Fence key against a text\ncipherlab-cli validate --cipher railfence --key 3 \"We are discovered\"\n\n# Letter frequencies, exported to a file\ncipherlab-cli analyze --tool frequency --input ./secret.txt --output ./freq.txt\n\n# Try every Caesar shift\ncipherlab-cli analyze --tool bruteforce KHOOR"
)]
struct Cli {
    /// Print machine-readable JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text with a classical cipher
    Encrypt(CipherArgs),
    /// Decrypt text with a classical cipher
    Decrypt(CipherArgs),
    /// Check a key against a cipher and a text
    Validate {
        /// The cipher to check against (caesar, vigenere, railfence)
        #[arg(short, long)]
        cipher: CipherKind,

        /// The key to check
        #[arg(short, long, allow_hyphen_values = true)]
        key: String,

        #[command(flatten)]
        source: TextSource,
    },
    /// Run a cryptanalysis tool over text
    Analyze {
        /// The tool to run (frequency, bruteforce)
        #[arg(short, long)]
        tool: AnalysisTool,

        #[command(flatten)]
        source: TextSource,

        /// Write the plain-text export of the result (JSON with --json) to this file
        #[arg(short, long, value_name = "OUTPUT_FILE")]
        output: Option<PathBuf>,
    },
    /// Count raw and cleaned characters
    Count {
        #[command(flatten)]
        source: TextSource,
    },
}

#[derive(Args)]
struct CipherArgs {
    /// The cipher to use (caesar, vigenere, railfence)
    #[arg(short, long)]
    cipher: CipherKind,

    /// The key: a shift (caesar), a letter key (vigenere) or a rail count (railfence)
    #[arg(short, long, allow_hyphen_values = true)]
    key: String,

    #[command(flatten)]
    source: TextSource,

    /// Write the result (the JSON report with --json) to this file instead of stdout
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    output: Option<PathBuf>,
}

// Where the text comes from: the positional argument, `--input`, or stdin.
#[derive(Args)]
struct TextSource {
    /// The text to process. Read from stdin when neither this nor --input is given.
    #[arg(conflicts_with = "input")]
    text: Option<String>,

    /// Read the text from this file
    #[arg(short, long, value_name = "INPUT_FILE")]
    input: Option<PathBuf>,
}

#[derive(Serialize)]
struct OperationReport<'a> {
    direction: Direction,
    cipher: CipherKind,
    output: &'a str,
}

#[derive(Serialize)]
struct ValidationReport {
    cipher: CipherKind,
    valid: bool,
    message: String,
}

/// Logs `message` as an error and exits with status 1.
fn fail(message: impl Display) -> ! {
    error!("{message}");
    std::process::exit(1);
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| fail(format!("Failed to serialize output: {e}")))
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", to_json(value));
}

fn run_cipher(direction: Direction, args: &CipherArgs, json: bool) {
    let raw_text = input::read_text(&args.source).unwrap_or_else(|e| fail(e));
    let output = lab::run_cipher_operation(direction, args.cipher, &raw_text, &args.key)
        .unwrap_or_else(|e| fail(format!("{direction} {} failed: {e}", args.cipher.label())));
    info!("{direction} {} succeeded", args.cipher.label());

    let report = OperationReport {
        direction,
        cipher: args.cipher,
        output: output.as_str(),
    };
    match (&args.output, json) {
        (Some(path), json) => {
            let contents = if json {
                to_json(&report) + "\n"
            } else {
                output.to_string()
            };
            input::write_output(path, &contents).unwrap_or_else(|e| fail(e));
            info!("Wrote result to '{}'", path.display());
        }
        (None, true) => print_json(&report),
        (None, false) => println!("{output}"),
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Encrypt(args) => run_cipher(Direction::Encrypt, args, cli.json),
        Commands::Decrypt(args) => run_cipher(Direction::Decrypt, args, cli.json),
        Commands::Validate {
            cipher,
            key,
            source,
        } => {
            let raw_text = input::read_text(source).unwrap_or_else(|e| fail(e));
            let length = text::normalize(&raw_text).len();
            let outcome = lab::validate_key(*cipher, key, length);
            let report = ValidationReport {
                cipher: *cipher,
                valid: outcome.is_ok(),
                message: outcome
                    .as_ref()
                    .map_or_else(ToString::to_string, |_| "valid".to_string()),
            };
            if cli.json {
                print_json(&report);
            } else {
                println!("{}", report.message);
            }
            if !report.valid {
                std::process::exit(1);
            }
        }
        Commands::Analyze {
            tool,
            source,
            output,
        } => {
            let raw_text = input::read_text(source).unwrap_or_else(|e| fail(e));
            info!("Analyzing with {}...", tool.name().to_uppercase());
            let result = lab::run_analysis(*tool, &raw_text).unwrap_or_else(|e| fail(e));

            if cli.json {
                print_json(&result);
            } else {
                print!("{}", render::analysis(&result));
            }
            if let Some(path) = output {
                let export = if cli.json {
                    to_json(&result) + "\n"
                } else {
                    result.export_text()
                };
                input::write_output(path, &export).unwrap_or_else(|e| fail(e));
                info!("Wrote analysis export to '{}'", path.display());
            }
        }
        Commands::Count { source } => {
            let raw_text = input::read_text(source).unwrap_or_else(|e| fail(e));
            let counts = text::char_counts(&raw_text);
            if cli.json {
                print_json(&counts);
            } else {
                println!("Raw characters: {}", counts.raw);
                println!("Cleaned characters: {}", counts.normalized);
            }
        }
    }
}
