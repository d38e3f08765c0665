//! The kit's 46 parameters: descriptor table, lock-free store, and block snapshot.
//!
//! Layout is fixed: six globals first, then five controls per drum in lane
//! order. The flat index doubles as the [`ParamId`] so host automation and
//! persisted state keep working across releases.
//!
//! | Index | Id | Range | Default |
//! |-------|----|-------|---------|
//! | 0 | `tune` | -12..12 st | 0 |
//! | 1 | `decay` | 0.2..1.8 | 0.78 |
//! | 2 | `tone` | 0..1 | 0.25 |
//! | 3 | `drive` | 0..1 | 0.28 |
//! | 4 | `hatLength` | 0.2..2.0 | 0.82 |
//! | 5 | `swing` | 0..1 | 0 |
//! | 6 + 5·d + 0 | `<drum>Level` | 0..1.5 | kick 1.12, snare 1.08, others 1.0 |
//! | 6 + 5·d + 1 | `<drum>Tune` | -12..12 st | 0 |
//! | 6 + 5·d + 2 | `<drum>Decay` | 0.3..2.0 | 1.0 |
//! | 6 + 5·d + 3 | `<drum>Tone` | 0..1 | 0.5 |
//! | 6 + 5·d + 4 | `<drum>Drive` | 0..1 | kick/snare 0.34, others 0.22 |
//!
//! # Example
//!
//! ```rust
//! use murk_kit::params::{self, KitParams};
//!
//! let store = KitParams::new();
//! let idx = params::index_of("kickDecay").unwrap();
//! assert!(store.set(idx, 9.0));
//! assert_eq!(store.get(idx), Some(2.0)); // clamped
//! assert_eq!(store.snapshot().drums[0].decay, 2.0);
//! ```

use core::sync::atomic::{AtomicU32, Ordering};

use murk_core::{ParamDescriptor, ParamId, ParamUnit};

use crate::drum::{DRUM_COUNT, DrumType};

/// Number of global parameters.
pub const GLOBAL_PARAM_COUNT: usize = 6;
/// Number of parameters per drum lane.
pub const DRUM_PARAM_COUNT: usize = 5;
/// Total parameter count.
pub const PARAM_COUNT: usize = GLOBAL_PARAM_COUNT + DRUM_COUNT * DRUM_PARAM_COUNT;

/// Kit-wide controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GlobalParam {
    /// Master pitch offset, semitones.
    Tune = 0,
    /// Master decay multiplier.
    Decay = 1,
    /// Master bus low-pass brightness.
    Tone = 2,
    /// Master bus drive.
    Drive = 3,
    /// Extra length multiplier for hats and cymbals.
    HatLength = 4,
    /// Off-beat eighth delay amount.
    Swing = 5,
}

impl GlobalParam {
    /// Flat parameter index.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Per-drum controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrumParam {
    /// Output level.
    Level = 0,
    /// Pitch offset, semitones.
    Tune = 1,
    /// Decay multiplier.
    Decay = 2,
    /// Brightness of the voice tone filter.
    Tone = 3,
    /// Voice saturation.
    Drive = 4,
}

impl DrumParam {
    /// Flat parameter index of this control on `drum`.
    pub const fn index(self, drum: DrumType) -> usize {
        GLOBAL_PARAM_COUNT + drum.index() * DRUM_PARAM_COUNT + self as usize
    }
}

static GLOBAL_PARAMS: [ParamDescriptor; GLOBAL_PARAM_COUNT] = [
    ParamDescriptor::new("Tune", "Tune", ParamUnit::Semitones, -12.0, 12.0, 0.0)
        .with_id(ParamId(0), "tune")
        .with_step(0.01)
        .with_group("global"),
    ParamDescriptor::new("Decay", "Decay", ParamUnit::Multiplier, 0.2, 1.8, 0.78)
        .with_id(ParamId(1), "decay")
        .with_step(0.001)
        .with_group("global"),
    ParamDescriptor::new("Tone", "Tone", ParamUnit::Amount, 0.0, 1.0, 0.25)
        .with_id(ParamId(2), "tone")
        .with_step(0.001)
        .with_group("global"),
    ParamDescriptor::new("Drive", "Drive", ParamUnit::Amount, 0.0, 1.0, 0.28)
        .with_id(ParamId(3), "drive")
        .with_step(0.001)
        .with_group("global"),
    ParamDescriptor::new("Hat Length", "Hat Len", ParamUnit::Multiplier, 0.2, 2.0, 0.82)
        .with_id(ParamId(4), "hatLength")
        .with_step(0.001)
        .with_group("global"),
    ParamDescriptor::new("Swing", "Swing", ParamUnit::Amount, 0.0, 1.0, 0.0)
        .with_id(ParamId(5), "swing")
        .with_step(0.001)
        .with_group("global"),
];

macro_rules! drum_params {
    ($lane:expr, $prefix:literal, $name:literal, $level:expr, $drive:expr) => {
        [
            ParamDescriptor::new(concat!($name, " Level"), "Level", ParamUnit::Gain, 0.0, 1.5, $level)
                .with_id(ParamId(6 + $lane * 5), concat!($prefix, "Level"))
                .with_step(0.001)
                .with_group($prefix),
            ParamDescriptor::new(concat!($name, " Tune"), "Tune", ParamUnit::Semitones, -12.0, 12.0, 0.0)
                .with_id(ParamId(7 + $lane * 5), concat!($prefix, "Tune"))
                .with_step(0.01)
                .with_group($prefix),
            ParamDescriptor::new(concat!($name, " Decay"), "Decay", ParamUnit::Multiplier, 0.3, 2.0, 1.0)
                .with_id(ParamId(8 + $lane * 5), concat!($prefix, "Decay"))
                .with_step(0.001)
                .with_group($prefix),
            ParamDescriptor::new(concat!($name, " Tone"), "Tone", ParamUnit::Amount, 0.0, 1.0, 0.5)
                .with_id(ParamId(9 + $lane * 5), concat!($prefix, "Tone"))
                .with_step(0.001)
                .with_group($prefix),
            ParamDescriptor::new(concat!($name, " Drive"), "Drive", ParamUnit::Amount, 0.0, 1.0, $drive)
                .with_id(ParamId(10 + $lane * 5), concat!($prefix, "Drive"))
                .with_step(0.001)
                .with_group($prefix),
        ]
    };
}

static DRUM_PARAMS: [[ParamDescriptor; DRUM_PARAM_COUNT]; DRUM_COUNT] = [
    drum_params!(0, "kick", "Kick", 1.12, 0.34),
    drum_params!(1, "snare", "Snare", 1.08, 0.34),
    drum_params!(2, "closedHat", "Closed Hat", 1.0, 0.22),
    drum_params!(3, "openHat", "Open Hat", 1.0, 0.22),
    drum_params!(4, "crash", "Crash", 1.0, 0.22),
    drum_params!(5, "ride", "Ride", 1.0, 0.22),
    drum_params!(6, "clap", "Clap", 1.0, 0.22),
    drum_params!(7, "rim", "Rim", 1.0, 0.22),
];

/// Descriptor for a flat parameter index.
pub fn descriptor(index: usize) -> Option<&'static ParamDescriptor> {
    if index < GLOBAL_PARAM_COUNT {
        return GLOBAL_PARAMS.get(index);
    }
    let rel = index - GLOBAL_PARAM_COUNT;
    DRUM_PARAMS
        .get(rel / DRUM_PARAM_COUNT)
        .and_then(|lane| lane.get(rel % DRUM_PARAM_COUNT))
}

/// All descriptors in index order.
pub fn descriptors() -> impl Iterator<Item = &'static ParamDescriptor> {
    GLOBAL_PARAMS.iter().chain(DRUM_PARAMS.iter().flatten())
}

/// Flat index for a string id (exact match).
pub fn index_of(string_id: &str) -> Option<usize> {
    descriptors().position(|d| d.string_id == string_id)
}

/// Lock-free parameter storage shared between control and audio threads.
///
/// Each value is an `f32` bit-cast into an [`AtomicU32`]. Writers clamp to
/// the descriptor range; the audio thread reads every value once per block
/// through [`snapshot`](Self::snapshot).
pub struct KitParams {
    values: [AtomicU32; PARAM_COUNT],
}

impl Default for KitParams {
    fn default() -> Self {
        Self::new()
    }
}

impl KitParams {
    /// Store initialized to every parameter's default.
    pub fn new() -> Self {
        let values = core::array::from_fn(|i| {
            AtomicU32::new(descriptor(i).map_or(0.0, |d| d.default).to_bits())
        });
        Self { values }
    }

    /// Current plain value.
    #[inline]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.values
            .get(index)
            .map(|v| f32::from_bits(v.load(Ordering::Acquire)))
    }

    /// Write a plain value, clamped to range.
    ///
    /// Returns `false` (and stores nothing) for an unknown index or a
    /// non-finite value.
    pub fn set(&self, index: usize, value: f32) -> bool {
        if !value.is_finite() {
            return false;
        }
        let Some((atomic, desc)) = self.values.get(index).zip(descriptor(index)) else {
            return false;
        };
        atomic.store(desc.clamp(value).to_bits(), Ordering::Release);
        true
    }

    /// Write a normalized `[0, 1]` value.
    pub fn set_normalized(&self, index: usize, normalized: f32) -> bool {
        if !normalized.is_finite() {
            return false;
        }
        descriptor(index).is_some_and(|desc| self.set(index, desc.denormalize(normalized)))
    }

    /// Restore every parameter to its default.
    pub fn reset_to_defaults(&self) {
        for (atomic, desc) in self.values.iter().zip(descriptors()) {
            atomic.store(desc.default.to_bits(), Ordering::Release);
        }
    }

    /// Read all values into an immutable block-local snapshot.
    pub fn snapshot(&self) -> ParamSnapshot {
        let mut values = [0.0; PARAM_COUNT];
        for (slot, atomic) in values.iter_mut().zip(&self.values) {
            *slot = f32::from_bits(atomic.load(Ordering::Acquire));
        }
        ParamSnapshot::from_values(&values)
    }
}

/// Kit-wide values for one block.
#[derive(Clone, Copy, Debug, PartialEq)]
#[allow(missing_docs)]
pub struct GlobalParams {
    pub tune: f32,
    pub decay: f32,
    pub tone: f32,
    pub drive: f32,
    pub hat_length: f32,
    pub swing: f32,
}

/// One drum lane's values for one block.
#[derive(Clone, Copy, Debug, PartialEq)]
#[allow(missing_docs)]
pub struct DrumParams {
    pub level: f32,
    pub tune: f32,
    pub decay: f32,
    pub tone: f32,
    pub drive: f32,
}

/// Every parameter value, read once at block entry.
///
/// Nothing in the render path reads the atomic store directly, so a block
/// never sees a half-applied preset change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamSnapshot {
    /// Kit-wide values.
    pub global: GlobalParams,
    /// Per-lane values, indexed by [`DrumType::index`].
    pub drums: [DrumParams; DRUM_COUNT],
}

impl Default for ParamSnapshot {
    fn default() -> Self {
        let mut values = [0.0; PARAM_COUNT];
        for (slot, desc) in values.iter_mut().zip(descriptors()) {
            *slot = desc.default;
        }
        Self::from_values(&values)
    }
}

impl ParamSnapshot {
    /// Build from flat values in index order.
    pub fn from_values(values: &[f32; PARAM_COUNT]) -> Self {
        let global = GlobalParams {
            tune: values[GlobalParam::Tune.index()],
            decay: values[GlobalParam::Decay.index()],
            tone: values[GlobalParam::Tone.index()],
            drive: values[GlobalParam::Drive.index()],
            hat_length: values[GlobalParam::HatLength.index()],
            swing: values[GlobalParam::Swing.index()],
        };
        let drums = core::array::from_fn(|lane| {
            let base = GLOBAL_PARAM_COUNT + lane * DRUM_PARAM_COUNT;
            DrumParams {
                level: values[base + DrumParam::Level as usize],
                tune: values[base + DrumParam::Tune as usize],
                decay: values[base + DrumParam::Decay as usize],
                tone: values[base + DrumParam::Tone as usize],
                drive: values[base + DrumParam::Drive as usize],
            }
        });
        Self { global, drums }
    }

    /// Values for one drum lane.
    #[inline]
    pub fn drum(&self, drum: DrumType) -> &DrumParams {
        &self.drums[drum.index()]
    }
}
