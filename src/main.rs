//! # text-markup - segment inspection CLI
//!
//! Reads model output from a file or stdin, separates the reasoning block and prints
//! the typed segments of the answer body.
//!
//! ## Features
//! - Line-oriented preview or JSON output (`--format`)
//! - Keyword highlighting in plain-text segments (`-k`)
//! - Reasoning markers configurable via environment / `.env`

mod cli;
mod run;

use clap::Parser;
use dotenv::dotenv;

use text_markup::config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = cli::Args::parse();
    run::init_logger(&args);

    // Print user-friendly message; exit uses Display not Debug
    let config = config::load().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    run::run(&args, &config)
}
