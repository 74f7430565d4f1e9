//! # Pierce Cap
//!
//! Load capacitor calculator for Pierce crystal oscillators, the circuit
//! found next to pretty much every microcontroller.
//!
//! Given the load capacitance from a crystal's datasheet and an estimate of
//! the board's stray capacitance, the calculator tries every symmetric
//! capacitor pair in a small range and reports the closest matches.
//!
//! ## Architecture
//!
//! - [`oscillator`] - Candidate evaluation and ranking
//! - [`report`] - Fixed-width table output
//! - [`error`] - Error types
//!
//! ## Usage
//!
//! ```bash
//! pierce-cap 18 5
//! ```
//!
//! ```
//! use pierce_cap::search;
//!
//! let best = search(18.0, 5.0);
//! assert_eq!(best[0].capacitor_value, 26);
//! ```

pub mod error;
pub mod oscillator;
pub mod report;

// Re-export main types for convenience
pub use error::{PierceError, Result};
pub use oscillator::{search, search_with_config, Candidate, SearchConfig};
