//! Command-line PlantUML encoder.
//!
//! Runs the same validation and encoding as the HTTP service without starting
//! a server. Handy for scripts and for checking a token by hand.
//!
//! # Usage
//!
//! ```bash
//! # Encode a file and print the viewer URL
//! cargo run --bin plantuml-encode -- encode diagram.puml
//!
//! # Encode from stdin, print only the token
//! echo -e '@startuml\nA -> B\n@enduml' | cargo run --bin plantuml-encode -- encode --token-only
//!
//! # Print the JSON response the HTTP endpoint would return
//! cargo run --bin plantuml-encode -- encode diagram.puml --json
//!
//! # Recover the source behind a token
//! cargo run --bin plantuml-encode -- decode SyfFKj2rKt3CoKnELR1Io4ZDoSa70000
//! ```
//!
//! # Environment Variables
//!
//! `MAX_CODE_BYTES` and `VIEWER_BASE_URL` are honoured the same way the
//! server reads them (see [`plantuml_encoder::config`]).

use plantuml_encoder::api::dto::encode::EncodeResponse;
use plantuml_encoder::application::services::EncoderService;
use plantuml_encoder::config;
use plantuml_encoder::domain::validation::ValidationPolicy;
use plantuml_encoder::utils::plantuml_codec::decode_token;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

/// Encode PlantUML diagrams into plantuml.com viewer URLs.
#[derive(Parser)]
#[command(name = "plantuml-encode")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a diagram and print its viewer URL
    Encode {
        /// Diagram source file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Print only the token
        #[arg(short, long, conflicts_with = "json")]
        token_only: bool,

        /// Print the HTTP success envelope as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Decode a token back into diagram source
    Decode {
        /// Token as produced by `encode`
        token: String,
    },
}

fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let encoder = EncoderService::new(
        ValidationPolicy::new(config.max_code_bytes),
        config.viewer_base_url,
    );

    match cli.command {
        Commands::Encode {
            file,
            token_only,
            json,
        } => encode(&encoder, file, token_only, json),
        Commands::Decode { token } => decode(&token),
    }
}

/// Validates and encodes a diagram.
///
/// Validation failures print the error code and exit with status 2 so
/// scripts can tell them apart from I/O failures.
fn encode(
    encoder: &EncoderService,
    file: Option<PathBuf>,
    token_only: bool,
    json: bool,
) -> Result<ExitCode> {
    let source = read_source(file)?;

    let diagram = match encoder.encode_validated(Some(&source)) {
        Ok(diagram) => diagram,
        Err(e) => {
            eprintln!("{} {}", e.code().red().bold(), e);
            return Ok(ExitCode::from(2));
        }
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&EncodeResponse::success(diagram))?
        );
    } else if token_only {
        println!("{}", diagram.encoded);
    } else {
        eprintln!(
            "{} ({} bytes -> {} chars)",
            "Encoded".green().bold(),
            source.len(),
            diagram.encoded.len()
        );
        println!("{}", diagram.url.bright_cyan());
    }

    Ok(ExitCode::SUCCESS)
}

/// Decodes a token, printing the diagram source to stdout.
fn decode(token: &str) -> Result<ExitCode> {
    match decode_token(token.trim()) {
        Ok(source) => {
            println!("{}", source);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{} {}", "Invalid token:".red().bold(), e);
            Ok(ExitCode::from(2))
        }
    }
}

fn read_source(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read stdin")?;
            Ok(source)
        }
    }
}
