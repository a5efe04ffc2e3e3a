//! CLI tool for sticky-columns - computes header props for a table definition
//!
//! Usage:
//!   sticky_cli <table.json>              # Output JSON to stdout
//!   sticky_cli <table.json> -o out.json  # Output JSON to file
//!
//! Set `RUST_LOG=sticky_columns=debug` to trace each computed header.

#![allow(clippy::exit)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};
use sticky_columns::error::Result;
use sticky_columns::{compute_header_props, TableDefinition};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: sticky_cli <table.json> [-o output.json]");
        std::process::exit(1);
    }

    let input_path = &args[1];
    let output_path = if args.len() > 3 && args[2] == "-o" {
        Some(&args[3])
    } else {
        None
    };

    if let Err(e) = run(input_path, output_path.map(String::as_str)) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(input_path: &str, output_path: Option<&str>) -> Result<()> {
    let data = fs::read_to_string(input_path)?;
    let definition: TableDefinition = serde_json::from_str(&data)?;
    let props = compute_header_props(&definition)?;
    let json = serde_json::to_string_pretty(&props)?;

    match output_path {
        Some(path) => {
            fs::write(path, &json)?;
            eprintln!("Written: {}", path);
        }
        None => writeln!(io::stdout().lock(), "{json}")?,
    }
    Ok(())
}
