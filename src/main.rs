//! Pierce Cap - Pierce oscillator load capacitor calculator
//!
//! # Usage
//!
//! ```bash
//! pierce-cap <TARGET_LOAD_CAPACITANCE> <STRAY_CAPACITANCE>
//! ```
//!
//! Diagnostics go to stderr and are controlled with `RUST_LOG`.

use clap::Parser;
use pierce_cap::{error::Result, report::print_table, search};
use tracing_subscriber::EnvFilter;

/// Figures out the load capacitor values for a Pierce oscillator circuit
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
struct Args {
    /// Target load capacitance in pF
    #[arg(value_name = "TARGET_LOAD_CAPACITANCE", value_parser = parse_picofarads)]
    target_load_capacitance: f64,

    /// Stray capacitance in pF
    #[arg(value_name = "STRAY_CAPACITANCE", value_parser = parse_picofarads)]
    stray_capacitance: f64,
}

/// Parse a whole number of picofarads of any magnitude.
fn parse_picofarads(value: &str) -> std::result::Result<f64, String> {
    let digits = value.strip_prefix(['+', '-']).unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("'{value}' is not an integer"));
    }

    value
        .parse::<f64>()
        .map_err(|e| format!("'{value}' is not an integer: {e}"))
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging();

    let candidates = search(args.target_load_capacitance, args.stray_capacitance);

    print_table(&candidates)?;

    Ok(())
}
