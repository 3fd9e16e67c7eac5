//! Simple CLI that reads HTML from stdin and writes the extraction result as
//! JSON to stdout.
//!
//! Usage: `extract_stdin <url> [head_meta.json]`
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use std::io::{self, Read};

use rs_scholarly::{extract, HeadMeta};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rs_scholarly=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let url = args.next().unwrap_or_default();

    let head_meta = match args.next() {
        Some(path) => match load_head_meta(&path) {
            Ok(meta) => meta,
            Err(e) => {
                tracing::warn!("could not read head metadata from {path}: {e}");
                HeadMeta::new()
            }
        },
        None => HeadMeta::new(),
    };

    // Read HTML from stdin; bytes so the declared charset is honored
    let mut html = Vec::new();
    if io::stdin().read_to_end(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let html = rs_scholarly::encoding::transcode_to_utf8(&html);
    let result = extract(&url, &html, &head_meta);
    tracing::info!(parser = %result.parser, ok = result.ok, confidence = result.confidence, "extracted");

    println!("{}", serde_json::to_string(&result).unwrap_or_default());
}

fn load_head_meta(path: &str) -> Result<HeadMeta, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
