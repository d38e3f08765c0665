//! Xorshift32 white noise generator.
//!
//! Each drum voice owns one of these, seeded at trigger time, so that
//! simultaneous hits of the same drum decorrelate instead of summing into
//! a louder copy of the same waveform.
//!
//! The generator uses the classic 13/17/5 shift triple. Output is taken from
//! the low 24 bits (the full f32 mantissa), mapped to `[-1.0, 1.0)`.

/// 32-bit xorshift PRNG producing bipolar white noise.
///
/// # Invariants
///
/// - `state` is never zero (zero is a fixed point of xorshift)
///
/// # Example
///
/// ```rust
/// use murk_core::Xorshift32;
///
/// let mut noise = Xorshift32::new(0x1234_5679);
/// let s = noise.next_sample();
/// assert!((-1.0..1.0).contains(&s));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Xorshift32 {
    state: u32,
}

impl Default for Xorshift32 {
    fn default() -> Self {
        Self { state: 1 }
    }
}

impl Xorshift32 {
    /// Create a generator from a seed.
    ///
    /// The seed is forced odd so the state can never be zero.
    pub const fn new(seed: u32) -> Self {
        Self { state: seed | 1 }
    }

    /// Current raw state.
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advance and return the raw 32-bit state.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Advance and return a noise sample in `[-1.0, 1.0)`.
    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        let bits = self.next_u32() & 0x00ff_ffff;
        let normalized = bits as f32 / 16_777_216.0;
        normalized * 2.0 - 1.0
    }
}
