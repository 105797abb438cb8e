//! QR Markup CLI
//!
//! Usage:
//!   qr-markup [OPTIONS] [MATRIX]
//!
//! Options:
//!   -c, --config <FILE>  Render options (TOML format)
//!   -o, --output <FILE>  Write a standalone document instead of printing
//!       --html           Render an HTML grid instead of SVG
//!       --base64         Print the SVG as a data URI
//!   -h, --help           Print help

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;

use qr_markup::{render, render_to_file, Matrix, OutputMode, RenderOptions};

#[derive(Parser)]
#[command(name = "qr-markup")]
#[command(about = "Render a QR matrix dump as HTML or SVG markup")]
struct Cli {
    /// Matrix dump: one row per line of integer module values (reads stdin if not provided)
    input: Option<PathBuf>,

    /// Render options file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write a standalone document to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Render an HTML grid instead of SVG
    #[arg(long)]
    html: bool,

    /// Print the SVG as a base64 data URI
    #[arg(long)]
    base64: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    // Load options
    let mut options = match &cli.config {
        Some(path) => match RenderOptions::from_file(path) {
            Ok(o) => o,
            Err(e) => {
                eprintln!("Error loading options '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => RenderOptions::default(),
    };
    if cli.html {
        options.mode = OutputMode::Html;
    }
    if cli.base64 {
        options.base64 = true;
    }

    let source = match read_source(cli.input.as_deref()) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading matrix dump: {}", e);
            std::process::exit(1);
        }
    };

    let matrix: Matrix = match source.parse() {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = render_to_file(&matrix, &options, path) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        None => print!("{}", render(&matrix, &options)),
    }
}

/// Read the matrix dump from a file, or from stdin when no path is given
fn read_source(input: Option<&Path>) -> io::Result<String> {
    match input {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| io::Error::new(e.kind(), format!("{}: {}", path.display(), e))),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
