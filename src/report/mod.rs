//! Table output for the CLI frontend.
//!
//! Renders ranked candidates as a fixed-width table and writes it to stdout.

use std::io::{self, Write};

use crate::error::{PierceError, Result};
use crate::oscillator::Candidate;

/// Column titles.
pub const HEADER: &str = "|  C1, C2 |   C_load |   Error |";

/// Rule between the header and the rows.
pub const SEPARATOR: &str = "|---------+----------+---------|";

/// Format one table row.
///
/// Reals use the shortest round-trip form and always keep a fractional part.
pub fn format_row(candidate: &Candidate) -> String {
    format!(
        "| {:>4} pF | {:>5?} pF | {:>4?} pF |",
        candidate.capacitor_value, candidate.computed_load, candidate.error
    )
}

/// Render the full table, one line per candidate, newline terminated.
pub fn render_table(candidates: &[Candidate]) -> String {
    let mut table = String::new();
    table.push_str(HEADER);
    table.push('\n');
    table.push_str(SEPARATOR);
    table.push('\n');

    for candidate in candidates {
        table.push_str(&format_row(candidate));
        table.push('\n');
    }

    table
}

/// Write the rendered table to `out`.
pub fn write_table<W: Write>(out: &mut W, candidates: &[Candidate]) -> Result<()> {
    out.write_all(render_table(candidates).as_bytes())
        .map_err(|e| PierceError::output(e.to_string()))
}

/// Write the table to stdout and flush.
pub fn print_table(candidates: &[Candidate]) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_table(&mut out, candidates)?;
    out.flush().map_err(|e| PierceError::output(e.to_string()))
}
