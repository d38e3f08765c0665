//! Built-in test pattern: two bars of sixteenths at a fixed tempo.
//!
//! The sequencer is a self-contained audition loop: it plays a fixed
//! 30-hit groove once through and stops. It counts samples itself and does
//! not follow the host transport.

use murk_core::NoteDivision;

use crate::drum::DrumType;

/// Tempo of the test pattern.
pub const TEST_SEQUENCE_BPM: f64 = 168.0;
/// Length of the test pattern in sixteenth steps.
pub const TEST_SEQUENCE_STEPS: usize = 32;

/// One hit in the test pattern.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SequenceHit {
    /// Sixteenth step (0..32).
    pub step: usize,
    /// Drum to trigger.
    pub drum: DrumType,
    /// Trigger velocity.
    pub velocity: f32,
}

const fn hit(step: usize, drum: DrumType, velocity: f32) -> SequenceHit {
    SequenceHit {
        step,
        drum,
        velocity,
    }
}

/// The fixed test groove, ordered by step.
pub const TEST_PATTERN: [SequenceHit; 30] = [
    hit(0, DrumType::Kick, 0.96),
    hit(0, DrumType::ClosedHat, 0.52),
    hit(2, DrumType::ClosedHat, 0.44),
    hit(3, DrumType::Rim, 0.48),
    hit(4, DrumType::Snare, 0.90),
    hit(4, DrumType::ClosedHat, 0.45),
    hit(6, DrumType::ClosedHat, 0.42),
    hit(7, DrumType::Clap, 0.66),
    hit(8, DrumType::Kick, 0.88),
    hit(8, DrumType::OpenHat, 0.48),
    hit(10, DrumType::ClosedHat, 0.39),
    hit(12, DrumType::Snare, 0.86),
    hit(12, DrumType::ClosedHat, 0.46),
    hit(14, DrumType::Ride, 0.36),
    hit(15, DrumType::Rim, 0.42),
    // bar 2
    hit(16, DrumType::Kick, 0.94),
    hit(16, DrumType::ClosedHat, 0.50),
    hit(18, DrumType::ClosedHat, 0.40),
    hit(19, DrumType::Clap, 0.59),
    hit(20, DrumType::Snare, 0.90),
    hit(20, DrumType::OpenHat, 0.50),
    hit(22, DrumType::ClosedHat, 0.41),
    hit(23, DrumType::Rim, 0.40),
    hit(24, DrumType::Kick, 0.89),
    hit(24, DrumType::ClosedHat, 0.45),
    hit(26, DrumType::ClosedHat, 0.37),
    hit(28, DrumType::Snare, 0.92),
    hit(28, DrumType::Crash, 0.46),
    hit(30, DrumType::Ride, 0.32),
    hit(31, DrumType::Clap, 0.50),
];

/// Length of one pattern step in whole samples.
pub fn samples_per_step(sample_rate: f64) -> u64 {
    NoteDivision::Sixteenth
        .whole_samples(TEST_SEQUENCE_BPM, sample_rate)
        .max(1) as u64
}

/// Sample-counting player for [`TEST_PATTERN`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TestSequencer {
    playing: bool,
    cursor: u64,
}

impl TestSequencer {
    /// Idle sequencer.
    pub const fn new() -> Self {
        Self {
            playing: false,
            cursor: 0,
        }
    }

    /// Arm playback from step 0.
    pub fn start(&mut self) {
        self.playing = true;
        self.cursor = 0;
    }

    /// Stop and rewind.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Whether the pattern is playing.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Samples elapsed since the pattern started.
    pub fn cursor(&self) -> u64 {
        self.cursor
    }

    /// Advance by one block, calling `trigger(drum, velocity, offset)` for
    /// every hit whose sample falls inside `[cursor, cursor + block_size)`.
    ///
    /// Playback stops once the cursor reaches the end of the pattern.
    pub fn process_block<F>(&mut self, block_size: usize, sample_rate: f64, mut trigger: F)
    where
        F: FnMut(DrumType, f32, usize),
    {
        if !self.playing {
            return;
        }

        let step_len = samples_per_step(sample_rate);
        let total = step_len * TEST_SEQUENCE_STEPS as u64;
        let block_start = self.cursor;
        let block_end = block_start + block_size as u64;

        for hit in &TEST_PATTERN {
            let at = hit.step as u64 * step_len;
            if (block_start..block_end).contains(&at) {
                trigger(hit.drum, hit.velocity, (at - block_start) as usize);
            }
        }

        self.cursor = block_end;
        if self.cursor >= total {
            self.playing = false;
        }
    }
}
