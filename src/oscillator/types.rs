//! Core types for the capacitor search.

use std::fmt;

/// Capacitance of a symmetric capacitor pair (C1 = C2 = `capacitor_value`).
///
/// Series combination `(C1 * C2) / (C1 + C2)`. The numerator is formed in
/// integers before the real division.
pub fn pair_capacitance(capacitor_value: u32) -> f64 {
    let c = u64::from(capacitor_value);
    (c * c) as f64 / (2 * c) as f64
}

/// One candidate capacitor pair and the load capacitance it yields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Value of each load capacitor in pF
    pub capacitor_value: u32,
    /// Resulting load capacitance in pF, stray included
    pub computed_load: f64,
    /// `target_load - computed_load`, in pF
    pub error: f64,
}

impl Candidate {
    /// Evaluate a capacitor value against a target load and stray capacitance.
    pub fn new(capacitor_value: u32, target_load: f64, stray: f64) -> Self {
        let computed_load = pair_capacitance(capacitor_value) + stray;
        Self {
            capacitor_value,
            computed_load,
            error: target_load - computed_load,
        }
    }

    /// Distance from the target, ignoring sign.
    pub fn abs_error(&self) -> f64 {
        self.error.abs()
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "C1 = C2 = {} pF -> {:?} pF (error {:?} pF)",
            self.capacitor_value, self.computed_load, self.error
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pair_capacitance_is_half_the_value() {
        assert_relative_eq!(pair_capacitance(1), 0.5);
        assert_relative_eq!(pair_capacitance(13), 6.5);
        assert_relative_eq!(pair_capacitance(28), 14.0);
        assert_relative_eq!(pair_capacitance(29), 14.5);
    }

    #[test]
    fn test_candidate_error_is_signed() {
        let under = Candidate::new(13, 18.0, 5.0);
        assert_relative_eq!(under.computed_load, 11.5);
        assert_relative_eq!(under.error, 6.5);

        let over = Candidate::new(28, 18.0, 5.0);
        assert_relative_eq!(over.computed_load, 19.0);
        assert_relative_eq!(over.error, -1.0);
        assert_relative_eq!(over.abs_error(), 1.0);
    }

    #[test]
    fn test_candidate_display() {
        let c = Candidate::new(28, 18.0, 5.0);
        assert_eq!(c.to_string(), "C1 = C2 = 28 pF -> 19.0 pF (error -1.0 pF)");
    }
}
