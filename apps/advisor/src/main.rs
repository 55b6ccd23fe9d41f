//! # Advisor Dev Harness
//!
//! Drives a scripted wizard session against the built-in catalog.
//!
//! ## Usage
//! ```bash
//! # Default walkthrough (54 speaker pairs, 16 TVs)
//! cargo run -p advisor
//!
//! # Custom counts
//! cargo run -p advisor -- --pairs 20 --tvs 24
//! ```
//!
//! ## What It Does
//! 1. Initializes tracing (RUST_LOG overridable)
//! 2. Loads configuration from ATRIUM_* environment variables
//! 3. Loads and validates the built-in catalog
//! 4. Selects a representative system (preamp, amplifier, matrix, lighting)
//! 5. Walks the navigation to the summary page
//! 6. Prints the summary text and hands the mail payload off

use std::env;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use atrium_catalog::builtin;
use atrium_core::Category;
use atrium_session::{LogDispatch, PageId, Session, SessionConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut pairs: u32 = 54;
    let mut tvs: u32 = 16;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--pairs" | "-p" => {
                if i + 1 < args.len() {
                    pairs = args[i + 1].parse().unwrap_or(54);
                    i += 1;
                }
            }
            "--tvs" | "-t" => {
                if i + 1 < args.len() {
                    tvs = args[i + 1].parse().unwrap_or(16);
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Atrium Advisor Dev Harness");
                println!();
                println!("Usage: advisor [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -p, --pairs <N>    Requested speaker pairs (default: 54)");
                println!("  -t, --tvs <N>      Requested TVs (default: 16)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    init_tracing();

    let config = SessionConfig::from_env();
    info!(project = %config.project_name, "Starting advisor harness");

    // Load and validate the built-in catalog
    let catalog = Arc::new(builtin()?);
    println!("✓ Catalog loaded ({} options)", catalog.len());

    let mut session = Session::new(catalog, config);
    session.set_requested_pairs(pairs)?;
    session.set_requested_tvs(tvs)?;

    // A representative selection across both wizard pages
    session.select_option(Category::Preamp, "marantz7706")?;
    session.select_option(Category::Amplifier, "monoprice16ch")?;
    session.select_option(Category::Matrix, "atlona16x16")?;
    session.select_option(Category::LightingStrip, "cob24v")?;
    session.select_option(Category::Driver, "meanwell24v")?;

    // Walk forward until the summary page, as a user would
    while session.current_page() != PageId::Summary {
        session.go_next();
    }
    println!("✓ Reached {}", session.current_page());

    // Render the summary
    let payload = session.send_summary(&LogDispatch)?;

    println!();
    println!("{}", payload.body);
    println!();
    println!("mailto: {}", payload.mailto_url());

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=atrium=trace` - Show trace for atrium crates only
/// - Default: INFO level, DEBUG for atrium crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,atrium=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
