//! Mathematical utility functions for drum synthesis.
//!
//! All functions are allocation-free and suitable for `no_std`.
//!
//! # Envelopes
//!
//! - [`exp_decay`] - Exponential decay with a floored time constant
//! - [`smooth_attack`] - Linear attack ramp clamped to 1.0
//!
//! # Waveshaping
//!
//! - [`soft_clip`] - Hyperbolic tangent saturation
//! - [`drive_stage`] - Gain-compensated `tanh` drive
//!
//! # Utilities
//!
//! - [`lerp`] - Linear interpolation
//! - [`semitones_to_ratio`] - Pitch offset to frequency multiplier
//! - [`flush_denormal`] - Denormal protection

use libm::{expf, powf, sqrtf, tanhf};

/// Smallest time constant accepted by [`exp_decay`], in seconds.
///
/// Decay multipliers can be driven close to zero by automation; flooring the
/// constant keeps the exponent finite.
pub const MIN_TIME_CONSTANT: f32 = 1.0e-5;

/// Soft clip using hyperbolic tangent.
///
/// Smooth saturation that approaches ±1 asymptotically.
///
/// # Returns
/// Soft-clipped output in range (-1, 1)
#[inline]
pub fn soft_clip(x: f32) -> f32 {
    tanhf(x)
}

/// Exponential decay envelope value at time `t`.
///
/// Returns `exp(-t / tau)` with `tau` floored at [`MIN_TIME_CONSTANT`].
///
/// # Example
/// ```rust
/// use murk_core::exp_decay;
///
/// assert_eq!(exp_decay(0.0, 0.1), 1.0);
/// assert!((exp_decay(0.1, 0.1) - 0.367_879).abs() < 1e-5);
/// ```
#[inline]
pub fn exp_decay(t: f32, tau: f32) -> f32 {
    expf(-t / tau.max(MIN_TIME_CONSTANT))
}

/// Linear attack ramp from 0 to 1 over `attack` seconds.
///
/// A non-positive attack returns 1.0 immediately.
#[inline]
pub fn smooth_attack(t: f32, attack: f32) -> f32 {
    if attack <= 0.0 {
        return 1.0;
    }
    (t / attack).clamp(0.0, 1.0)
}

/// Saturate `x` by `gain` and compensate the level by `1 / sqrt(gain)`.
///
/// Keeps the perceived loudness roughly constant as drive increases.
/// `gain` is expected to be ≥ 1.
#[inline]
pub fn drive_stage(x: f32, gain: f32) -> f32 {
    soft_clip(x * gain) / sqrtf(gain)
}

/// Linear interpolation between two values.
///
/// Returns `a` at `t = 0`, `b` at `t = 1`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Convert a pitch offset in semitones to a frequency ratio.
///
/// # Example
/// ```rust
/// use murk_core::semitones_to_ratio;
///
/// assert!((semitones_to_ratio(12.0) - 2.0).abs() < 1e-6);
/// assert!((semitones_to_ratio(-12.0) - 0.5).abs() < 1e-6);
/// ```
#[inline]
pub fn semitones_to_ratio(semitones: f32) -> f32 {
    powf(2.0, semitones / 12.0)
}

/// Flush denormal values to zero.
///
/// Very small floating-point values can cause severe CPU slowdown in
/// recursive filters.
#[inline]
pub fn flush_denormal(x: f32) -> f32 {
    if x.abs() < 1e-20 { 0.0 } else { x }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soft_clip_bounds() {
        assert!(soft_clip(100.0) <= 1.0);
        assert!(soft_clip(-100.0) >= -1.0);
        assert_eq!(soft_clip(0.0), 0.0);
    }

    #[test]
    fn test_exp_decay_floors_time_constant() {
        // A zero time constant would divide by zero without the floor.
        let v = exp_decay(1.0e-6, 0.0);
        assert!(v.is_finite());
        assert!(v > 0.0 && v < 1.0);
        assert_eq!(exp_decay(1.0, 0.0), 0.0);
    }

    #[test]
    fn test_smooth_attack() {
        assert_eq!(smooth_attack(0.0, 0.002), 0.0);
        assert!((smooth_attack(0.001, 0.002) - 0.5).abs() < 1e-6);
        assert_eq!(smooth_attack(1.0, 0.002), 1.0);
        assert_eq!(smooth_attack(0.0, 0.0), 1.0);
    }

    #[test]
    fn test_drive_stage_unity_gain_is_tanh() {
        assert!((drive_stage(0.5, 1.0) - tanhf(0.5)).abs() < 1e-7);
    }

    #[test]
    fn test_drive_stage_compensates_level() {
        // Higher gain saturates harder but the trim keeps the peak bounded.
        let peak = drive_stage(10.0, 7.6);
        assert!(peak < 1.0 / sqrtf(7.6) + 1e-6);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.14, 0.52, 0.0), 0.14);
        assert!((lerp(0.14, 0.52, 1.0) - 0.52).abs() < 1e-7);
        assert!((lerp(0.0, 10.0, 0.25) - 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_semitones_to_ratio_unison() {
        assert_eq!(semitones_to_ratio(0.0), 1.0);
    }

    #[test]
    fn test_flush_denormal() {
        assert_eq!(flush_denormal(1e-25), 0.0);
        assert_eq!(flush_denormal(0.5), 0.5);
    }
}
