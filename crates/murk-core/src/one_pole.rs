//! One-pole lowpass smoother for tone darkening.
//!
//! Coefficient-form single-pole IIR lowpass:
//!
//! ```text
//! y[n] = y[n-1] + coeff * (x[n] - y[n-1])
//! ```
//!
//! `coeff` is the fraction of the distance to the input covered each sample:
//! 1.0 passes the input unchanged, values toward 0.0 darken the signal. The
//! drum voices and the master bus drive it with coefficients mapped straight
//! from their tone controls rather than from a cutoff in Hz, so the voicing
//! stays identical at every sample rate the kit was tuned for.
//!
//! # Usage
//!
//! ```rust
//! use murk_core::OnePole;
//!
//! let mut lp = OnePole::new(0.25);
//! let filtered = lp.process(1.0);
//! assert_eq!(filtered, 0.25);
//! ```

use crate::flush_denormal;

/// One-pole (6 dB/oct) lowpass with a direct smoothing coefficient.
///
/// # Invariants
///
/// - `coeff` is clamped to [0, 1] for stable operation
/// - `state` is flushed to zero when below 1e-20 (denormal protection)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OnePole {
    state: f32,
    coeff: f32,
}

impl OnePole {
    /// Create a filter with the given smoothing coefficient.
    pub fn new(coeff: f32) -> Self {
        Self {
            state: 0.0,
            coeff: coeff.clamp(0.0, 1.0),
        }
    }

    /// Set the smoothing coefficient.
    ///
    /// Range: 0.0 (frozen) to 1.0 (pass-through).
    #[inline]
    pub fn set_coeff(&mut self, coeff: f32) {
        self.coeff = coeff.clamp(0.0, 1.0);
    }

    /// Current smoothing coefficient.
    pub fn coeff(&self) -> f32 {
        self.coeff
    }

    /// Process one sample and return the filtered output.
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        self.state = flush_denormal(self.state + self.coeff * (input - self.state));
        self.state
    }

    /// Current filter output without advancing.
    #[inline]
    pub fn state(&self) -> f32 {
        self.state
    }

    /// Reset filter state to zero.
    pub fn reset(&mut self) {
        self.state = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_dc() {
        let mut lp = OnePole::new(0.02);
        let mut out = 0.0;
        for _ in 0..10_000 {
            out = lp.process(1.0);
        }
        assert!((out - 1.0).abs() < 1e-4, "DC should pass through, got {out}");
    }

    #[test]
    fn attenuates_nyquist() {
        let mut lp = OnePole::new(0.14);
        let mut sum = 0.0f32;
        for i in 0..4800 {
            let input = if i % 2 == 0 { 1.0 } else { -1.0 };
            sum += lp.process(input).abs();
        }
        let avg = sum / 4800.0;
        assert!(avg < 0.1, "Nyquist should be attenuated, avg = {avg}");
    }

    #[test]
    fn unity_coeff_is_passthrough() {
        let mut lp = OnePole::new(1.0);
        assert_eq!(lp.process(0.7), 0.7);
        assert_eq!(lp.process(-0.3), -0.3);
    }

    #[test]
    fn coeff_is_clamped() {
        assert_eq!(OnePole::new(4.0).coeff(), 1.0);
        assert_eq!(OnePole::new(-1.0).coeff(), 0.0);
    }

    #[test]
    fn reset_clears_state() {
        let mut lp = OnePole::new(0.5);
        lp.process(1.0);
        lp.process(1.0);
        lp.reset();
        assert_eq!(lp.state(), 0.0);
        assert_eq!(lp.process(0.0), 0.0);
    }
}
