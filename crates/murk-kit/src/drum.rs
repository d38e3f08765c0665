//! The eight drum lanes and their fixed MIDI note map.

/// Number of drum lanes in the kit.
pub const DRUM_COUNT: usize = 8;

/// One of the eight fixed drum voices.
///
/// The discriminant is the lane index used for parameter layout, the debug
/// trigger bitmask, and per-lane arrays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DrumType {
    /// Pitch-swept sine kick with sub and click.
    Kick = 0,
    /// Falling sine body with noise and crack.
    Snare = 1,
    /// Short noise and metallic partials.
    ClosedHat = 2,
    /// Longer noise and three metallic partials.
    OpenHat = 3,
    /// Soft-attack noise and three partials with a long tail.
    Crash = 4,
    /// Ping partial over noise and a secondary tail.
    Ride = 5,
    /// Three staggered noise bursts.
    Clap = 6,
    /// Two sine partials with a short tick.
    Rim = 7,
}

impl DrumType {
    /// All drum types in lane order.
    pub const ALL: [DrumType; DRUM_COUNT] = [
        DrumType::Kick,
        DrumType::Snare,
        DrumType::ClosedHat,
        DrumType::OpenHat,
        DrumType::Crash,
        DrumType::Ride,
        DrumType::Clap,
        DrumType::Rim,
    ];

    /// Lane index (0..8).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Drum type for a lane index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Prefix used for per-drum parameter ids (e.g. `"closedHat"`).
    pub const fn id_prefix(self) -> &'static str {
        match self {
            DrumType::Kick => "kick",
            DrumType::Snare => "snare",
            DrumType::ClosedHat => "closedHat",
            DrumType::OpenHat => "openHat",
            DrumType::Crash => "crash",
            DrumType::Ride => "ride",
            DrumType::Clap => "clap",
            DrumType::Rim => "rim",
        }
    }

    /// Display name (e.g. `"Closed Hat"`).
    pub const fn name(self) -> &'static str {
        match self {
            DrumType::Kick => "Kick",
            DrumType::Snare => "Snare",
            DrumType::ClosedHat => "Closed Hat",
            DrumType::OpenHat => "Open Hat",
            DrumType::Crash => "Crash",
            DrumType::Ride => "Ride",
            DrumType::Clap => "Clap",
            DrumType::Rim => "Rim",
        }
    }

    /// Look up a drum by its id prefix, case-insensitively.
    pub fn from_id_prefix(prefix: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.id_prefix().eq_ignore_ascii_case(prefix))
    }

    /// Drum triggered by a MIDI note, if the note is mapped.
    ///
    /// The map is fixed (General MIDI percussion layout):
    ///
    /// | Note | Drum |
    /// |------|------|
    /// | 36 | Kick |
    /// | 37 | Rim |
    /// | 38 | Snare |
    /// | 39 | Clap |
    /// | 42 | Closed Hat |
    /// | 46 | Open Hat |
    /// | 49 | Crash |
    /// | 51 | Ride |
    pub const fn from_midi_note(note: u8) -> Option<Self> {
        match note {
            36 => Some(DrumType::Kick),
            38 => Some(DrumType::Snare),
            42 => Some(DrumType::ClosedHat),
            46 => Some(DrumType::OpenHat),
            49 => Some(DrumType::Crash),
            51 => Some(DrumType::Ride),
            39 => Some(DrumType::Clap),
            37 => Some(DrumType::Rim),
            _ => None,
        }
    }

    /// MIDI note that triggers this drum.
    pub const fn midi_note(self) -> u8 {
        match self {
            DrumType::Kick => 36,
            DrumType::Snare => 38,
            DrumType::ClosedHat => 42,
            DrumType::OpenHat => 46,
            DrumType::Crash => 49,
            DrumType::Ride => 51,
            DrumType::Clap => 39,
            DrumType::Rim => 37,
        }
    }

    /// Whether this drum's length also scales with the global hat length.
    pub const fn is_cymbal(self) -> bool {
        matches!(
            self,
            DrumType::ClosedHat | DrumType::OpenHat | DrumType::Crash | DrumType::Ride
        )
    }

    /// Bit for this drum in the debug trigger mask.
    #[inline]
    pub const fn mask_bit(self) -> u32 {
        1 << self as u32
    }
}
