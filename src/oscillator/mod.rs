//! Load capacitor selection for Pierce crystal oscillators.
//!
//! A Pierce oscillator loads the crystal with two capacitors to ground plus
//! the stray capacitance of the board. The crystal sees
//!
//! ```text
//! C_load = (C1 * C2) / (C1 + C2) + C_stray
//! ```
//!
//! Only symmetric pairs (C1 = C2) are considered. Every value in a small
//! range is evaluated and the closest matches to the datasheet load are
//! returned.

mod search;
mod types;

pub use search::{candidates, rank, search, search_with_config, SearchConfig};
pub use types::{pair_capacitance, Candidate};

/// Smallest capacitor value tried, in pF.
pub const MIN_CAPACITOR_PF: u32 = 1;

/// Largest capacitor value tried, in pF.
pub const MAX_CAPACITOR_PF: u32 = 29;

/// Widest capacitor range a [`SearchConfig`] may span.
pub const MAX_POOL_SIZE: u32 = 1_000_000;

/// Number of candidates reported.
pub const TOP_CANDIDATES: usize = 5;
