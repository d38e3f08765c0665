//! Murk Kit - eight-voice drum machine engine
//!
//! This crate turns triggers (MIDI note-ons, UI test buttons, a built-in test
//! pattern) into a stereo signal, one sample at a time, without allocating or
//! blocking on the audio thread.
//!
//! # Core Components
//!
//! ## Drums
//!
//! - [`DrumType`] - The eight fixed drum lanes and their MIDI note map
//! - [`synth`] - Closed-form drum algorithms and the per-voice post chain
//!
//! ## Voices
//!
//! - [`Voice`] - One hit in flight, optionally scheduled into the block
//! - [`VoicePool`] - Fixed pool with longest-playing voice stealing
//!
//! ## Parameters
//!
//! - [`KitControl`] - Cloneable, lock-free handle for parameters and triggers
//! - [`ParamSnapshot`] - All 46 values, read once per block
//!
//! ## Timing and Output
//!
//! - [`TestSequencer`] - Fixed 30-hit audition pattern at 168 BPM
//! - [`MasterBus`] - Punch, drive, tone filter, stereo split
//! - [`DrumMachine`] - Block processor tying it all together
//!
//! # Example
//!
//! ```rust
//! use murk_kit::{DrumMachine, DrumType, TransportInfo};
//!
//! let mut kit = DrumMachine::with_seed(1);
//! kit.prepare(44100.0, 256);
//!
//! let control = kit.control();
//! control.set_param("snareTone", 0.8);
//! control.queue_debug_hit(DrumType::Snare);
//!
//! let mut left = [0.0f32; 256];
//! let mut right = [0.0f32; 256];
//! kit.process_block(&mut [&mut left[..], &mut right[..]], &mut Vec::new(), &TransportInfo::NONE);
//! assert_eq!(kit.active_voice_count(), 1);
//! ```
//!
//! # no_std Support
//!
//! The engine needs `alloc` (for the shared control handle) but not `std`:
//!
//! ```toml
//! [dependencies]
//! murk-kit = { version = "0.1", default-features = false }
//! ```
//!
//! # Logging
//!
//! With the `tracing` feature, control-thread operations (`prepare`, rejected
//! parameter writes, sequence requests) emit `debug` events. The per-sample
//! path never logs.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod control;
pub mod drum;
pub mod machine;
pub mod master;
pub mod midi;
pub mod params;
pub mod sequencer;
pub mod synth;
pub mod voice;

pub use control::KitControl;
pub use drum::{DRUM_COUNT, DrumType};
pub use machine::{DEFAULT_SEED, DrumMachine, MIN_SAMPLE_RATE, TAIL_SECONDS};
pub use master::MasterBus;
pub use midi::{MidiEvent, MidiMessage};
pub use params::{DrumParam, GlobalParam, KitParams, PARAM_COUNT, ParamSnapshot};
pub use sequencer::{TEST_PATTERN, TestSequencer};
pub use voice::{MAX_VOICES, Voice, VoicePool};

pub use murk_core::{ParamDescriptor, ParamId, ParamUnit, TransportInfo};
