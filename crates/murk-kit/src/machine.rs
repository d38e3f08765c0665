//! The drum machine: block processing from triggers to stereo output.
//!
//! Each call to [`DrumMachine::process_block`] runs, in order:
//!
//! 1. Read every parameter once into a [`ParamSnapshot`].
//! 2. Consume a pending test sequence request and advance the sequencer.
//! 3. Consume queued debug hits (velocity 0.95, offset 0).
//! 4. Trigger MIDI note-ons at their swung offsets, then clear the queue.
//! 5. Per sample: render and sum all voices, run the master bus, write
//!    channel 0 (left) and channel 1 (right). Further channels stay silent.

use alloc::vec::Vec;

use murk_core::{TransportInfo, swing_offset};

use crate::control::KitControl;
use crate::drum::DrumType;
use crate::master::MasterBus;
use crate::midi::MidiEvent;
use crate::params::ParamSnapshot;
use crate::sequencer::TestSequencer;
use crate::synth::BlockContext;
use crate::voice::{MAX_VOICES, VoicePool};

/// Lowest sample rate the engine will run at.
pub const MIN_SAMPLE_RATE: f64 = 8000.0;
/// Velocity of queued debug hits.
pub const DEBUG_HIT_VELOCITY: f32 = 0.95;
/// Seed used by [`DrumMachine::new`].
pub const DEFAULT_SEED: u64 = 0x6d75_726b;
/// Longest time a hit can keep ringing after its trigger, in seconds.
pub const TAIL_SECONDS: f64 = 2.5;

/// Eight-voice drum machine engine.
///
/// Owns the voice pool, sequencer, and master bus; shares parameters and
/// trigger flags with other threads through a [`KitControl`].
///
/// # Example
///
/// ```rust
/// use murk_kit::{DrumMachine, MidiEvent, TransportInfo};
///
/// let mut kit = DrumMachine::new();
/// kit.prepare(48000.0, 512);
///
/// let mut left = vec![0.0f32; 512];
/// let mut right = vec![0.0f32; 512];
/// let mut midi = vec![MidiEvent::note_on(0, 36, 127)];
/// kit.process_block(&mut [&mut left[..], &mut right[..]], &mut midi, &TransportInfo::NONE);
///
/// assert!(midi.is_empty());
/// assert!(left.iter().any(|s| s.abs() > 0.01));
/// ```
#[derive(Debug)]
pub struct DrumMachine {
    control: KitControl,
    voices: VoicePool<MAX_VOICES>,
    sequencer: TestSequencer,
    master: MasterBus,
    sample_rate: f64,
    max_block_size: usize,
}

impl Default for DrumMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl DrumMachine {
    /// Engine at 44.1 kHz with [`DEFAULT_SEED`].
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Engine whose phase and noise randomization is seeded with `seed`.
    ///
    /// Two engines with the same seed, parameters, and input produce
    /// bit-identical output.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_control(KitControl::new(), seed)
    }

    /// Engine driven by an existing control handle.
    pub fn with_control(control: KitControl, seed: u64) -> Self {
        Self {
            control,
            voices: VoicePool::new(seed),
            sequencer: TestSequencer::new(),
            master: MasterBus::new(),
            sample_rate: 44100.0,
            max_block_size: 512,
        }
    }

    /// Handle for parameter writes and trigger requests from other threads.
    pub fn control(&self) -> KitControl {
        self.control.clone()
    }

    /// Reset voices, bus, and sequencer for a new stream.
    ///
    /// The sample rate is floored at [`MIN_SAMPLE_RATE`].
    pub fn prepare(&mut self, sample_rate: f64, max_block_size: usize) {
        self.sample_rate = if sample_rate.is_finite() {
            sample_rate.max(MIN_SAMPLE_RATE)
        } else {
            MIN_SAMPLE_RATE
        };
        self.max_block_size = max_block_size;
        self.voices.reset();
        self.master.reset();
        self.sequencer.reset();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sample_rate = self.sample_rate,
            max_block_size,
            "drum machine prepared"
        );
    }

    /// Current sample rate.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Block size passed to the last [`prepare`](Self::prepare).
    pub fn max_block_size(&self) -> usize {
        self.max_block_size
    }

    /// Number of pending or sounding voices.
    pub fn active_voice_count(&self) -> usize {
        self.voices.active_voice_count()
    }

    /// Whether the test pattern is playing.
    pub fn is_sequence_playing(&self) -> bool {
        self.sequencer.is_playing()
    }

    /// Longest ring-out after the last trigger.
    pub fn tail_seconds(&self) -> f64 {
        TAIL_SECONDS
    }

    /// Trigger `drum` directly from the audio thread.
    ///
    /// Same as a MIDI note-on without swing.
    pub fn trigger(&mut self, drum: DrumType, velocity: f32, sample_offset: usize) {
        self.voices.allocate(drum, velocity, sample_offset);
    }

    /// Render one block.
    ///
    /// The frame count is the length of the first output channel. Channels
    /// past the second are zeroed. `midi` is drained.
    pub fn process_block(
        &mut self,
        outputs: &mut [&mut [f32]],
        midi: &mut Vec<MidiEvent>,
        transport: &TransportInfo,
    ) {
        let frames = outputs.first().map_or(0, |ch| ch.len());
        let snapshot = self.control.snapshot();

        if self.control.take_test_sequence_request() {
            self.sequencer.start();
        }
        let voices = &mut self.voices;
        self.sequencer
            .process_block(frames, self.sample_rate, |drum, velocity, offset| {
                voices.allocate(drum, velocity, offset);
            });

        let debug_hits = self.control.take_debug_hits();
        for drum in DrumType::ALL {
            if debug_hits & drum.mask_bit() != 0 {
                self.voices.allocate(drum, DEBUG_HIT_VELOCITY, 0);
            }
        }

        for event in midi.iter() {
            let Some((note, velocity)) = event.message.note_on() else {
                continue;
            };
            if let Some(drum) = DrumType::from_midi_note(note) {
                let offset = swing_offset(
                    event.sample_offset,
                    frames,
                    snapshot.global.swing,
                    transport,
                    self.sample_rate,
                );
                self.voices.allocate(drum, velocity, offset);
            }
        }
        midi.clear();

        self.render(outputs, frames, &snapshot);
    }

    fn render(&mut self, outputs: &mut [&mut [f32]], frames: usize, snapshot: &ParamSnapshot) {
        for channel in outputs.iter_mut() {
            channel.fill(0.0);
        }

        let ctx = BlockContext::new(snapshot, self.sample_rate as f32);
        self.master.configure(&snapshot.global);

        for i in 0..frames {
            let (mono, started) = self.voices.render_sample(&ctx);
            let (left, right) = self.master.process(mono, started);
            if let Some(s) = outputs.get_mut(0).and_then(|ch| ch.get_mut(i)) {
                *s = left;
            }
            if let Some(s) = outputs.get_mut(1).and_then(|ch| ch.get_mut(i)) {
                *s = right;
            }
        }
    }
}
