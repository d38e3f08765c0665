//! Factory kits bundled with the library.
//!
//! Eighteen complete 46-value kits, from tight breakbeat sets to long,
//! detuned FM tails. Apply one with [`KitPreset::apply`]:
//!
//! ```rust
//! use murk_config::find_preset;
//! use murk_kit::KitControl;
//!
//! let control = KitControl::new();
//! let preset = find_preset("amen raze").unwrap();
//! preset.apply(&control);
//! assert_eq!(control.param("swing"), Some(0.78));
//! ```

use murk_kit::{DRUM_COUNT, DrumType};

use crate::error::ConfigError;
use crate::preset::{DrumSettings, GlobalSettings, KitPreset};

/// Number of factory kits.
pub const FACTORY_PRESET_COUNT: usize = 18;

/// Compact table row: globals are tune, decay, tone, drive, hat length, swing;
/// lane arrays follow [`DrumType::ALL`] order.
struct Kit {
    name: &'static str,
    global: [f32; 6],
    level: [f32; DRUM_COUNT],
    tune: [f32; DRUM_COUNT],
    decay: [f32; DRUM_COUNT],
    tone: [f32; DRUM_COUNT],
    drive: [f32; DRUM_COUNT],
}

impl Kit {
    fn to_preset(&self) -> KitPreset {
        let [tune, decay, tone, drive, hat_length, swing] = self.global;
        let mut preset = KitPreset::new(self.name);
        preset.global = GlobalSettings {
            tune,
            decay,
            tone,
            drive,
            hat_length,
            swing,
        };
        for drum in DrumType::ALL {
            let i = drum.index();
            *preset.drums.get_mut(drum) = DrumSettings {
                level: self.level[i],
                tune: self.tune[i],
                decay: self.decay[i],
                tone: self.tone[i],
                drive: self.drive[i],
            };
        }
        preset
    }
}

#[rustfmt::skip]
static KITS: [Kit; FACTORY_PRESET_COUNT] = [
    Kit {
        name: "Go Plastic",
        global: [1.2, 0.54, 0.86, 0.66, 0.44, 0.30],
        level: [1.42, 1.26, 1.06, 0.96, 0.30, 0.30, 1.20, 1.14],
        tune: [-2.2, 4.6, 8.2, 7.4, 1.0, 0.8, 4.8, 7.0],
        decay: [0.56, 0.44, 0.40, 0.40, 0.34, 0.34, 0.48, 0.42],
        tone: [0.62, 0.86, 0.90, 0.86, 0.56, 0.54, 0.80, 0.84],
        drive: [0.88, 0.74, 0.40, 0.34, 0.18, 0.18, 0.66, 0.72],
    },
    Kit {
        name: "Amen Raze",
        global: [6.8, 0.34, 1.00, 0.48, 0.22, 0.78],
        level: [1.08, 1.18, 1.24, 1.10, 0.24, 0.22, 1.00, 1.30],
        tune: [4.2, 7.8, 11.6, 10.8, 2.6, 2.2, 7.4, 11.8],
        decay: [0.42, 0.34, 0.30, 0.30, 0.32, 0.32, 0.36, 0.34],
        tone: [0.86, 1.00, 1.00, 1.00, 0.74, 0.70, 0.92, 1.00],
        drive: [0.54, 0.62, 0.32, 0.26, 0.14, 0.14, 0.58, 0.64],
    },
    Kit {
        name: "FM Melt",
        global: [-4.4, 1.54, 0.14, 0.74, 1.54, 0.46],
        level: [1.26, 1.04, 1.08, 1.14, 0.42, 0.40, 0.92, 0.82],
        tune: [-6.0, -3.2, 3.0, 3.6, -2.2, -2.6, -1.2, -1.8],
        decay: [1.52, 1.10, 1.30, 1.44, 0.90, 0.86, 1.02, 0.90],
        tone: [0.14, 0.28, 0.46, 0.52, 0.34, 0.30, 0.24, 0.20],
        drive: [0.84, 0.58, 0.34, 0.36, 0.18, 0.16, 0.46, 0.38],
    },
    Kit {
        name: "Plaid Razor",
        global: [-7.6, 1.20, 0.06, 0.96, 0.28, 0.90],
        level: [1.50, 1.16, 0.56, 0.50, 0.18, 0.18, 0.90, 1.18],
        tune: [-10.4, -5.0, -3.0, -3.8, -8.8, -8.2, -2.6, 5.2],
        decay: [1.74, 1.26, 0.54, 0.50, 0.34, 0.34, 0.92, 0.84],
        tone: [0.04, 0.12, 0.24, 0.22, 0.14, 0.12, 0.18, 0.52],
        drive: [1.00, 0.84, 0.20, 0.18, 0.10, 0.10, 0.52, 0.66],
    },
    Kit {
        name: "Venetian Sub",
        global: [-2.6, 0.72, 0.56, 1.00, 0.60, 0.18],
        level: [1.50, 1.28, 0.86, 0.80, 0.24, 0.24, 1.18, 1.24],
        tune: [-4.0, 5.4, -2.8, 6.0, -7.4, 8.0, -1.8, 7.8],
        decay: [0.78, 0.66, 0.46, 0.44, 0.32, 0.32, 0.58, 0.52],
        tone: [0.26, 0.78, 0.34, 0.84, 0.32, 0.76, 0.40, 0.88],
        drive: [1.00, 0.84, 0.36, 0.34, 0.12, 0.12, 0.78, 0.84],
    },
    Kit {
        name: "Hard Sync",
        global: [4.8, 0.44, 0.94, 0.38, 0.30, 0.62],
        level: [0.96, 1.12, 1.18, 1.02, 0.26, 0.24, 1.04, 1.18],
        tune: [2.6, 6.2, 10.2, 9.6, 1.2, 1.0, 6.6, 9.4],
        decay: [0.50, 0.40, 0.34, 0.34, 0.30, 0.30, 0.40, 0.38],
        tone: [0.78, 0.96, 1.00, 0.96, 0.62, 0.58, 0.88, 0.96],
        drive: [0.46, 0.56, 0.34, 0.30, 0.14, 0.14, 0.56, 0.60],
    },
    Kit {
        name: "Micro Edit",
        global: [0.2, 0.66, 0.72, 0.58, 0.36, 1.00],
        level: [1.18, 1.22, 0.96, 0.86, 0.20, 0.20, 1.14, 1.20],
        tune: [-1.6, 4.2, 8.4, 7.8, -6.8, 7.0, 4.2, 8.8],
        decay: [0.62, 0.50, 0.40, 0.38, 0.30, 0.30, 0.44, 0.40],
        tone: [0.46, 0.88, 0.94, 0.90, 0.34, 0.72, 0.82, 0.92],
        drive: [0.74, 0.70, 0.36, 0.30, 0.12, 0.14, 0.70, 0.76],
    },
    Kit {
        name: "Data Swerve",
        global: [-0.8, 0.92, 0.42, 0.84, 0.82, 0.50],
        level: [1.34, 1.14, 1.06, 0.96, 0.32, 0.30, 1.04, 1.06],
        tune: [-2.8, 3.4, 6.2, 6.6, -3.6, 3.6, 1.2, 5.8],
        decay: [0.94, 0.82, 0.72, 0.76, 0.40, 0.40, 0.72, 0.68],
        tone: [0.24, 0.64, 0.86, 0.84, 0.44, 0.62, 0.56, 0.70],
        drive: [0.68, 0.56, 0.28, 0.26, 0.12, 0.12, 0.48, 0.56],
    },
    Kit {
        name: "Servo Funk",
        global: [2.2, 0.48, 0.90, 0.56, 0.30, 0.54],
        level: [1.20, 1.24, 1.12, 1.00, 0.28, 0.26, 1.10, 1.16],
        tune: [0.6, 5.8, 10.0, 9.2, 0.8, 0.4, 6.0, 8.6],
        decay: [0.54, 0.44, 0.36, 0.36, 0.30, 0.30, 0.42, 0.38],
        tone: [0.70, 0.92, 1.00, 0.94, 0.54, 0.50, 0.86, 0.90],
        drive: [0.62, 0.68, 0.38, 0.32, 0.14, 0.14, 0.64, 0.68],
    },
    Kit {
        name: "Acid Ghost",
        global: [-5.6, 1.64, 0.08, 0.62, 1.72, 0.36],
        level: [1.14, 0.92, 1.24, 1.32, 0.62, 0.58, 0.88, 0.78],
        tune: [-6.8, -2.6, 1.6, 2.0, -0.8, -1.0, -1.2, -1.4],
        decay: [1.46, 1.04, 1.82, 1.96, 1.20, 1.14, 1.12, 1.02],
        tone: [0.08, 0.22, 0.40, 0.44, 0.36, 0.32, 0.24, 0.20],
        drive: [0.66, 0.44, 0.30, 0.32, 0.16, 0.16, 0.36, 0.32],
    },
    Kit {
        name: "Granular Rush",
        global: [7.4, 0.30, 1.00, 0.30, 0.20, 0.88],
        level: [0.86, 1.02, 1.30, 1.22, 0.34, 0.32, 0.92, 1.28],
        tune: [5.0, 9.4, 12.0, 11.4, 3.4, 2.8, 8.0, 12.0],
        decay: [0.38, 0.32, 0.30, 0.30, 0.30, 0.30, 0.34, 0.30],
        tone: [0.94, 1.00, 1.00, 1.00, 0.82, 0.78, 0.96, 1.00],
        drive: [0.34, 0.48, 0.32, 0.28, 0.12, 0.12, 0.46, 0.56],
    },
    Kit {
        name: "Live Core",
        global: [-1.2, 0.82, 0.64, 0.92, 0.50, 0.70],
        level: [1.36, 1.22, 0.94, 0.86, 0.22, 0.22, 1.16, 1.22],
        tune: [-2.6, 5.8, -5.8, 6.8, -9.0, 9.8, -3.2, 9.2],
        decay: [0.82, 0.70, 0.50, 0.46, 0.30, 0.30, 0.60, 0.54],
        tone: [0.24, 0.84, 0.22, 0.88, 0.26, 0.82, 0.34, 0.90],
        drive: [1.00, 0.82, 0.40, 0.36, 0.10, 0.10, 0.84, 0.88],
    },
    Kit {
        name: "Session Whip",
        global: [0.8, 0.46, 0.92, 0.62, 0.30, 0.18],
        level: [1.50, 1.34, 1.00, 0.90, 0.18, 0.18, 1.08, 1.10],
        tune: [-1.2, 4.2, 8.8, 8.2, 0.4, 0.2, 4.4, 6.2],
        decay: [0.44, 0.34, 0.30, 0.30, 0.30, 0.30, 0.36, 0.34],
        tone: [0.78, 0.96, 0.94, 0.90, 0.58, 0.56, 0.84, 0.88],
        drive: [0.92, 0.82, 0.36, 0.30, 0.12, 0.12, 0.62, 0.66],
    },
    Kit {
        name: "Tight Pocket",
        global: [-0.6, 0.52, 0.84, 0.56, 0.34, 0.26],
        level: [1.44, 1.26, 0.96, 0.88, 0.20, 0.20, 1.04, 1.08],
        tune: [-2.4, 3.8, 7.6, 7.0, -0.2, -0.2, 3.8, 5.6],
        decay: [0.48, 0.36, 0.32, 0.32, 0.30, 0.30, 0.38, 0.34],
        tone: [0.70, 0.90, 0.88, 0.84, 0.52, 0.50, 0.78, 0.84],
        drive: [0.84, 0.74, 0.34, 0.28, 0.12, 0.12, 0.56, 0.62],
    },
    Kit {
        name: "Crack Driver",
        global: [2.0, 0.40, 1.00, 0.78, 0.26, 0.36],
        level: [1.36, 1.42, 1.08, 0.98, 0.22, 0.22, 1.16, 1.24],
        tune: [-0.8, 6.0, 10.2, 9.6, 1.0, 0.8, 6.4, 8.8],
        decay: [0.40, 0.32, 0.30, 0.30, 0.30, 0.30, 0.34, 0.32],
        tone: [0.88, 1.00, 1.00, 0.96, 0.62, 0.60, 0.92, 0.98],
        drive: [1.00, 0.92, 0.38, 0.32, 0.14, 0.14, 0.72, 0.78],
    },
    Kit {
        name: "Dry Room Kit",
        global: [-1.4, 0.58, 0.72, 0.48, 0.28, 0.10],
        level: [1.32, 1.20, 0.92, 0.82, 0.16, 0.16, 1.00, 1.04],
        tune: [-2.8, 3.2, 6.8, 6.0, -0.8, -1.0, 3.0, 4.8],
        decay: [0.54, 0.42, 0.34, 0.34, 0.30, 0.30, 0.42, 0.38],
        tone: [0.58, 0.82, 0.80, 0.76, 0.46, 0.44, 0.70, 0.76],
        drive: [0.70, 0.62, 0.30, 0.24, 0.10, 0.10, 0.46, 0.52],
    },
    Kit {
        name: "Punchline",
        global: [1.4, 0.42, 0.96, 0.70, 0.24, 0.48],
        level: [1.50, 1.36, 1.04, 0.92, 0.20, 0.20, 1.14, 1.18],
        tune: [-0.4, 5.2, 9.6, 9.0, 0.8, 0.6, 5.8, 7.8],
        decay: [0.42, 0.32, 0.30, 0.30, 0.30, 0.30, 0.34, 0.32],
        tone: [0.84, 1.00, 0.98, 0.94, 0.60, 0.58, 0.90, 0.94],
        drive: [0.96, 0.86, 0.36, 0.30, 0.12, 0.12, 0.68, 0.74],
    },
    Kit {
        name: "Metal Sticks",
        global: [3.6, 0.36, 0.98, 0.60, 0.22, 0.64],
        level: [1.26, 1.30, 1.24, 1.08, 0.26, 0.24, 1.06, 1.26],
        tune: [1.0, 6.8, 11.4, 10.8, 1.6, 1.4, 6.8, 10.0],
        decay: [0.38, 0.30, 0.30, 0.30, 0.30, 0.30, 0.32, 0.30],
        tone: [0.90, 1.00, 1.00, 1.00, 0.68, 0.66, 0.94, 1.00],
        drive: [0.78, 0.74, 0.34, 0.28, 0.14, 0.14, 0.60, 0.72],
    },
];

/// Every factory kit, in menu order.
pub fn factory_presets() -> Vec<KitPreset> {
    KITS.iter().map(Kit::to_preset).collect()
}

/// Factory kit names, in menu order.
pub fn factory_preset_names() -> impl Iterator<Item = &'static str> {
    KITS.iter().map(|k| k.name)
}

/// Factory kit at a menu position.
pub fn factory_preset(index: usize) -> Option<KitPreset> {
    KITS.get(index).map(Kit::to_preset)
}

/// Look up a factory kit by name, ignoring ASCII case.
pub fn find_preset(name: &str) -> Result<KitPreset, ConfigError> {
    preset_index(name)
        .and_then(factory_preset)
        .ok_or_else(|| ConfigError::PresetNotFound(name.to_string()))
}

/// Menu position of a factory kit name, ignoring ASCII case.
pub fn preset_index(name: &str) -> Option<usize> {
    KITS.iter().position(|k| k.name.eq_ignore_ascii_case(name))
}

/// Menu position `delta` steps from `current`, wrapping at both ends.
///
/// `None` (nothing selected yet) counts as the first kit.
pub fn step_preset(current: Option<usize>, delta: isize) -> usize {
    let count = FACTORY_PRESET_COUNT as isize;
    let from = current.map_or(0, |i| (i % FACTORY_PRESET_COUNT) as isize);
    (from + delta).rem_euclid(count) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use murk_kit::{KitControl, PARAM_COUNT};

    #[test]
    fn test_eighteen_kits_with_unique_names() {
        let names: Vec<_> = factory_preset_names().collect();
        assert_eq!(names.len(), 18);
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                assert!(!a.eq_ignore_ascii_case(b), "duplicate kit name {a}");
            }
        }
        assert_eq!(names[0], "Go Plastic");
        assert_eq!(names[17], "Metal Sticks");
    }

    #[test]
    fn test_every_kit_applies_in_full() {
        for preset in factory_presets() {
            let control = KitControl::new();
            assert_eq!(preset.apply(&control), PARAM_COUNT, "{}", preset.name);
        }
    }

    #[test]
    fn test_kit_values_land_in_lane_order() {
        let kit = find_preset("Plaid Razor").unwrap();
        assert_eq!(kit.global.tune, -7.6);
        assert_eq!(kit.global.swing, 0.90);
        assert_eq!(kit.drums.kick.level, 1.50);
        assert_eq!(kit.drums.rim.tune, 5.2);
        assert_eq!(kit.drums.crash.tone, 0.14);
        assert_eq!(kit.drums.ride.drive, 0.10);
    }

    #[test]
    fn test_find_is_case_insensitive() {
        assert_eq!(find_preset("fm MELT").unwrap().name, "FM Melt");
        assert!(matches!(
            find_preset("Nope"),
            Err(ConfigError::PresetNotFound(ref n)) if n == "Nope"
        ));
        assert_eq!(preset_index("dry room kit"), Some(15));
    }

    #[test]
    fn test_step_wraps() {
        assert_eq!(step_preset(None, 1), 1);
        assert_eq!(step_preset(None, -1), 17);
        assert_eq!(step_preset(Some(17), 1), 0);
        assert_eq!(step_preset(Some(0), -1), 17);
        assert_eq!(step_preset(Some(5), 36), 5);
        assert_eq!(step_preset(Some(2), -20), 0);
    }
}
