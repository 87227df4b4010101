// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use leptjson::{parse_slice, Value, ValueType};

/// Parse a single JSON literal (null, true, false or a number).
#[derive(Parser, Debug)]
#[command(name = "leptcheck", version)]
struct Args {
    /// File holding the JSON text
    #[arg(required_unless_present = "json", conflicts_with = "json")]
    file: Option<PathBuf>,

    /// JSON text given inline instead of a file
    #[arg(long)]
    json: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn describe(value: &Value) -> String {
    match value.get_type() {
        ValueType::Null => "null".to_string(),
        ValueType::True => "true".to_string(),
        ValueType::False => "false".to_string(),
        ValueType::Number => format!("number {}", value.get_number()),
    }
}

/// Returns the inline `--json` text, or else the contents of the file.
fn read_input(args: &Args) -> Result<Vec<u8>, String> {
    if let Some(text) = &args.json {
        return Ok(text.clone().into_bytes());
    }
    let Some(path) = &args.file else {
        return Err("no input: pass a FILE or --json <TEXT>".to_string());
    };
    fs::read(path).map_err(|e| format!("Unable to read file '{}': {}", path.display(), e))
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let input = match read_input(&args) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    log::debug!("Read {} bytes", input.len());

    match parse_slice(&input) {
        Ok(value) => println!("{}", describe(&value)),
        Err(e) => {
            eprintln!("Error: JSON parsing failed: {}", e);
            process::exit(1);
        }
    }
}
