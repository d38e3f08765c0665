//! Musical timing primitives: note divisions, host transport, and swing.
//!
//! The drum engine never owns a clock of its own for incoming MIDI. It reads
//! the host's tempo and beat position once per block through
//! [`TransportInfo`] and uses [`swing_offset`] to push off-beat eighths late.

use libm::{floor, round};

/// Musical note divisions used by the kit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoteDivision {
    /// Quarter note (1 beat)
    #[default]
    Quarter,
    /// Eighth note (1/2 beat)
    Eighth,
    /// Sixteenth note (1/4 beat)
    Sixteenth,
}

impl NoteDivision {
    /// Get the number of beats this division represents.
    pub fn beats(&self) -> f64 {
        match self {
            NoteDivision::Quarter => 1.0,
            NoteDivision::Eighth => 0.5,
            NoteDivision::Sixteenth => 0.25,
        }
    }

    /// Length of this division in (fractional) samples at the given tempo.
    ///
    /// # Example
    ///
    /// ```rust
    /// use murk_core::NoteDivision;
    ///
    /// // At 120 BPM and 48 kHz a quarter note is 24000 samples.
    /// assert_eq!(NoteDivision::Quarter.to_samples(120.0, 48000.0), 24000.0);
    /// ```
    pub fn to_samples(&self, bpm: f64, sample_rate: f64) -> f64 {
        sample_rate * 60.0 / bpm * self.beats()
    }

    /// Length of this division rounded to whole samples.
    pub fn whole_samples(&self, bpm: f64, sample_rate: f64) -> i64 {
        round(self.to_samples(bpm, sample_rate)) as i64
    }
}

/// Host transport as seen at the start of a block.
///
/// Either field may be missing: hosts without a play head, or stopped hosts
/// that do not report a position, leave them `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransportInfo {
    /// Host tempo in beats per minute.
    pub bpm: Option<f64>,
    /// Host position in quarter notes at the first sample of the block.
    pub ppq_position: Option<f64>,
}

impl TransportInfo {
    /// Transport with no tempo or position information.
    pub const NONE: Self = Self {
        bpm: None,
        ppq_position: None,
    };

    /// Transport with both tempo and position.
    pub const fn new(bpm: f64, ppq_position: f64) -> Self {
        Self {
            bpm: Some(bpm),
            ppq_position: Some(ppq_position),
        }
    }

    /// Tempo and position, if both are usable for swing.
    ///
    /// Tempos at or below 1 BPM are treated as missing.
    pub fn musical_position(&self) -> Option<(f64, f64)> {
        match (self.bpm, self.ppq_position) {
            (Some(bpm), Some(ppq)) if bpm > 1.0 && bpm.is_finite() && ppq.is_finite() => {
                Some((bpm, ppq))
            }
            _ => None,
        }
    }
}

/// Swing amounts at or below this are treated as straight timing.
pub const SWING_THRESHOLD: f32 = 0.001;

/// Fraction of an eighth note that full swing delays an off-beat.
pub const MAX_SWING_FRACTION: f64 = 0.33;

/// Largest delay, in samples, that full swing applies at `bpm`.
///
/// `round(round(samples_per_eighth) * 0.33)`.
pub fn max_swing_samples(bpm: f64, sample_rate: f64) -> i64 {
    let samples_per_eighth = NoteDivision::Eighth.whole_samples(bpm, sample_rate);
    round(samples_per_eighth as f64 * MAX_SWING_FRACTION) as i64
}

/// Apply swing to an event's intra-block sample offset.
///
/// Locates the eighth note containing the event from the host position. Events
/// on odd (off-beat) eighths are delayed by `round(max_swing * swing)` samples;
/// events on the beat are left alone. The result is clamped to
/// `[0, block_size + max_swing]`, so a swung event may land in a later block.
///
/// Returns `sample_offset` unchanged when swing is at or below
/// [`SWING_THRESHOLD`] or the transport has no usable tempo and position.
///
/// # Example
///
/// ```rust
/// use murk_core::{TransportInfo, swing_offset};
///
/// // 120 BPM at 44.1 kHz, block starting exactly on the "and" of beat 1.
/// let transport = TransportInfo::new(120.0, 0.5);
/// assert_eq!(swing_offset(0, 512, 1.0, &transport, 44100.0), 3638);
/// assert_eq!(swing_offset(0, 512, 0.0, &transport, 44100.0), 0);
/// ```
pub fn swing_offset(
    sample_offset: usize,
    block_size: usize,
    swing: f32,
    transport: &TransportInfo,
    sample_rate: f64,
) -> usize {
    if swing <= SWING_THRESHOLD {
        return sample_offset;
    }
    let Some((bpm, ppq)) = transport.musical_position() else {
        return sample_offset;
    };

    let quarters_per_sample = bpm / (60.0 * sample_rate);
    let ppq_at_event = ppq + sample_offset as f64 * quarters_per_sample;
    let eighth_index = floor(ppq_at_event * 2.0) as i64;
    if eighth_index & 1 == 0 {
        return sample_offset;
    }

    let max_swing = max_swing_samples(bpm, sample_rate);
    let delay = round(max_swing as f64 * f64::from(swing.min(1.0))) as i64;
    let swung = sample_offset as i64 + delay;
    swung.clamp(0, block_size as i64 + max_swing) as usize
}
