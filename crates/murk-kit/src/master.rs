//! Master bus: transient punch, drive, dark one-pole tone, stereo split.
//!
//! ```text
//! mono ──► punch (+0.95 × transient) ──► tanh drive ──► one-pole L ──► ch 0
//!                                                  └──► ×0.997 one-pole R ──► ch 1
//! ```
//!
//! When no voice rendered and the input is effectively zero, every filter
//! state is cleared before processing so the bus settles to exact silence.

use murk_core::{OnePole, drive_stage, lerp};

use crate::params::GlobalParams;

/// Input level below which an idle bus is reset.
pub const SILENCE_THRESHOLD: f32 = 1.0e-7;

const PUNCH_COEFF: f32 = 0.11;
const PUNCH_AMOUNT: f32 = 0.95;
const DRIVE_INPUT_TRIM: f32 = 0.62;
const RIGHT_CHANNEL_TRIM: f32 = 0.997;

/// Stereo master stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MasterBus {
    punch: OnePole,
    left: OnePole,
    right: OnePole,
    drive_gain: f32,
}

impl Default for MasterBus {
    fn default() -> Self {
        Self::new()
    }
}

impl MasterBus {
    /// Bus with cleared state and unity drive.
    pub fn new() -> Self {
        Self {
            punch: OnePole::new(PUNCH_COEFF),
            left: OnePole::new(0.14),
            right: OnePole::new(0.14),
            drive_gain: 1.0,
        }
    }

    /// Load this block's tone and drive.
    pub fn configure(&mut self, global: &GlobalParams) {
        let coeff = lerp(0.14, 0.52, global.tone);
        self.left.set_coeff(coeff);
        self.right.set_coeff(coeff);
        self.drive_gain = 1.0 + 6.4 * global.drive;
    }

    /// Clear all filter state.
    pub fn reset(&mut self) {
        self.punch.reset();
        self.left.reset();
        self.right.reset();
    }

    /// Process one mono sample into a stereo pair.
    ///
    /// `voices_started` tells the bus whether any voice rendered this sample.
    #[inline]
    pub fn process(&mut self, mono: f32, voices_started: bool) -> (f32, f32) {
        if !voices_started && mono.abs() < SILENCE_THRESHOLD {
            self.reset();
        }

        let transient = mono - self.punch.process(mono);
        let punched = mono + transient * PUNCH_AMOUNT;
        let driven = drive_stage(punched * DRIVE_INPUT_TRIM, self.drive_gain);

        let l = self.left.process(driven);
        let r = self.right.process(driven * RIGHT_CHANNEL_TRIM);
        (l, r)
    }
}
