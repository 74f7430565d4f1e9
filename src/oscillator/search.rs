//! Brute-force search over symmetric capacitor pairs.

use tracing::{debug, trace};

use crate::error::{PierceError, Result};

use super::types::Candidate;
use super::{MAX_CAPACITOR_PF, MAX_POOL_SIZE, MIN_CAPACITOR_PF, TOP_CANDIDATES};

/// Configuration for the capacitor search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Smallest capacitor value tried, in pF.
    pub min_capacitor: u32,
    /// Largest capacitor value tried, in pF (inclusive).
    pub max_capacitor: u32,
    /// Number of ranked candidates to keep.
    pub top_count: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_capacitor: MIN_CAPACITOR_PF,
            max_capacitor: MAX_CAPACITOR_PF,
            top_count: TOP_CANDIDATES,
        }
    }
}

impl SearchConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inclusive range of capacitor values to try.
    pub fn with_capacitor_range(mut self, min_capacitor: u32, max_capacitor: u32) -> Self {
        self.min_capacitor = min_capacitor;
        self.max_capacitor = max_capacitor;
        self
    }

    /// Set how many candidates the search returns.
    pub fn with_top_count(mut self, top_count: usize) -> Self {
        self.top_count = top_count;
        self
    }

    /// Check that the range can be evaluated.
    pub fn validate(&self) -> Result<()> {
        // A zero capacitor makes the pair formula divide by zero
        if self.min_capacitor == 0 {
            return Err(PierceError::invalid_search_param(
                "minimum capacitor value must be at least 1 pF",
            ));
        }

        if self.max_capacitor < self.min_capacitor {
            return Err(PierceError::invalid_search_param(format!(
                "capacitor range is empty ({} pF to {} pF)",
                self.min_capacitor, self.max_capacitor
            )));
        }

        let width = self.pool_size();
        if width > u64::from(MAX_POOL_SIZE) {
            return Err(PierceError::invalid_search_param(format!(
                "capacitor range spans {width} values, at most {MAX_POOL_SIZE} allowed"
            )));
        }

        Ok(())
    }

    /// Number of capacitor values in the range.
    pub fn pool_size(&self) -> u64 {
        u64::from(self.max_capacitor).saturating_sub(u64::from(self.min_capacitor)) + 1
    }
}

/// Build the full candidate pool for the default range, in ascending
/// capacitor order.
pub fn candidates(target_load: f64, stray: f64) -> Vec<Candidate> {
    candidates_in_range(MIN_CAPACITOR_PF, MAX_CAPACITOR_PF, target_load, stray)
}

fn candidates_in_range(min: u32, max: u32, target_load: f64, stray: f64) -> Vec<Candidate> {
    (min..=max)
        .map(|value| {
            let candidate = Candidate::new(value, target_load, stray);
            trace!(%candidate, "evaluated");
            candidate
        })
        .collect()
}

/// Order candidates by absolute error, closest match first.
///
/// The sort is stable: candidates with equal absolute error keep their
/// incoming order.
pub fn rank(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by(|a, b| a.abs_error().total_cmp(&b.abs_error()));
    candidates
}

/// Find the best capacitor pairs for a target load capacitance.
///
/// Tries every value from [`MIN_CAPACITOR_PF`] to [`MAX_CAPACITOR_PF`] and
/// returns the [`TOP_CANDIDATES`] closest matches.
///
/// # Arguments
/// * `target_load` - Target load capacitance from the crystal datasheet, in pF
/// * `stray` - Estimated stray capacitance of the board, in pF
pub fn search(target_load: f64, stray: f64) -> Vec<Candidate> {
    run(target_load, stray, &SearchConfig::default())
}

/// Like [`search`], with a custom range and result count.
pub fn search_with_config(
    target_load: f64,
    stray: f64,
    config: &SearchConfig,
) -> Result<Vec<Candidate>> {
    config.validate()?;
    Ok(run(target_load, stray, config))
}

/// Evaluate, rank and truncate. `config` must already be valid.
fn run(target_load: f64, stray: f64, config: &SearchConfig) -> Vec<Candidate> {
    let pool = candidates_in_range(config.min_capacitor, config.max_capacitor, target_load, stray);
    debug!(pool = pool.len(), target_load, stray, "ranking candidates");

    let mut ranked = rank(pool);
    ranked.truncate(config.top_count);

    if let Some(best) = ranked.first() {
        debug!(%best, kept = ranked.len(), "search complete");
    }

    ranked
}
