//! # course-page
//!
//! Export the Course Platform page as a static HTML file.
//!
//! ## Usage
//!
//! ```bash
//! # Landing page to stdout
//! course-page > index.html
//!
//! # Write the welcome variant into a build directory
//! course-page --variant welcome --out public/index.html
//!
//! # Inspect the copy the page is built from
//! course-page --json
//! ```
//!
//! ---
//!
//! Developed with 💀 by The Course Platform Team (c)2026

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use course_page::content::{WELCOME, page_content};
use course_page::export::write_file;
use course_page::{PageVariant, render_variant};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "course-page")]
#[command(about = "Render the Course Platform landing page as static HTML")]
#[command(version)]
struct Args {
    /// Page body to render (landing, welcome)
    #[arg(long, default_value_t = PageVariant::Landing)]
    variant: PageVariant,

    /// Write to this file instead of stdout (parent directories are created)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Print the page copy as JSON instead of HTML
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

// ============================================================================
// Main
// ============================================================================

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr, stdout carries the page
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    debug!("course-page v{}", env!("CARGO_PKG_VERSION"));

    let payload = if args.json {
        render_json(args.variant)?
    } else {
        render_variant(args.variant)
    };

    match &args.out {
        Some(path) => {
            let bytes = write_file(path, &payload).with_context(|| {
                let what = if args.json { "content" } else { "page" };
                format!("Failed to export {} {}", args.variant, what)
            })?;
            info!(variant = %args.variant, json = args.json, path = %path.display(), bytes, "page exported");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(payload.as_bytes())
                .and_then(|_| stdout.write_all(b"\n"))
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}

/// Serialize the copy a variant displays.
fn render_json(variant: PageVariant) -> Result<String> {
    let json = match variant {
        PageVariant::Landing => serde_json::to_string_pretty(&page_content()),
        PageVariant::Welcome => serde_json::to_string_pretty(&WELCOME),
    };
    json.context("Failed to serialize page content")
}
