//! yaml2php CLI - convert YAML documents into loadable PHP array files.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use yaml2php_emit::EmitOptions;

/// Convert a YAML document into a PHP array-literal source file
#[derive(Parser, Debug)]
#[command(name = "yaml2php")]
#[command(about = "Convert YAML configuration into loadable PHP array files", long_about = None)]
struct Args {
    /// Path to the YAML document ('-' reads from stdin)
    input: String,

    /// Write the PHP output to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Emit multi-line, indented output
    #[arg(long)]
    pretty: bool,

    /// Spaces per nesting level when --pretty is set
    #[arg(long, default_value_t = 4, value_name = "N")]
    indent: usize,

    /// Base directory for resolving !include paths when reading stdin
    #[arg(long, value_name = "DIR")]
    include_base: Option<PathBuf>,
}

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "yaml2php=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let options = EmitOptions {
        pretty: args.pretty,
        indent: args.indent,
    };

    let php = if args.input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;

        match &args.include_base {
            Some(base) => yaml2php_emit::from_string_with_base(&text, base, &options)?,
            None => yaml2php_emit::from_string(&text, &options)?,
        }
    } else {
        yaml2php_emit::from_file(&args.input, &options)?
    };

    match &args.output {
        Some(path) => fs::write(path, &php)
            .with_context(|| format!("Failed to write output file: {}", path.display()))?,
        None => println!("{php}"),
    }

    Ok(())
}
