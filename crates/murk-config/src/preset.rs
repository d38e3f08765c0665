//! Kit preset file format and operations.

use serde::{Deserialize, Serialize};
use std::path::Path;

use murk_kit::{DrumParam, DrumType, GlobalParam, KitControl, PARAM_COUNT, ParamSnapshot};

use crate::error::{ConfigError, write_with_parents};

/// Kit-wide values stored in a preset.
///
/// Missing keys fall back to a neutral kit: no detune, unit decay and hat
/// length, half tone, light drive, no swing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct GlobalSettings {
    pub tune: f32,
    pub decay: f32,
    pub tone: f32,
    pub drive: f32,
    pub hat_length: f32,
    pub swing: f32,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            tune: 0.0,
            decay: 1.0,
            tone: 0.5,
            drive: 0.25,
            hat_length: 1.0,
            swing: 0.0,
        }
    }
}

/// One drum lane's values stored in a preset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
#[allow(missing_docs)]
pub struct DrumSettings {
    pub level: f32,
    pub tune: f32,
    pub decay: f32,
    pub tone: f32,
    pub drive: f32,
}

impl Default for DrumSettings {
    fn default() -> Self {
        Self {
            level: 1.0,
            tune: 0.0,
            decay: 1.0,
            tone: 0.5,
            drive: 0.2,
        }
    }
}

/// Per-lane settings, keyed by the lane's parameter prefix in TOML.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct KitDrums {
    pub kick: DrumSettings,
    pub snare: DrumSettings,
    pub closed_hat: DrumSettings,
    pub open_hat: DrumSettings,
    pub crash: DrumSettings,
    pub ride: DrumSettings,
    pub clap: DrumSettings,
    pub rim: DrumSettings,
}

impl KitDrums {
    /// Settings for one lane.
    pub fn get(&self, drum: DrumType) -> &DrumSettings {
        match drum {
            DrumType::Kick => &self.kick,
            DrumType::Snare => &self.snare,
            DrumType::ClosedHat => &self.closed_hat,
            DrumType::OpenHat => &self.open_hat,
            DrumType::Crash => &self.crash,
            DrumType::Ride => &self.ride,
            DrumType::Clap => &self.clap,
            DrumType::Rim => &self.rim,
        }
    }

    /// Mutable settings for one lane.
    pub fn get_mut(&mut self, drum: DrumType) -> &mut DrumSettings {
        match drum {
            DrumType::Kick => &mut self.kick,
            DrumType::Snare => &mut self.snare,
            DrumType::ClosedHat => &mut self.closed_hat,
            DrumType::OpenHat => &mut self.open_hat,
            DrumType::Crash => &mut self.crash,
            DrumType::Ride => &mut self.ride,
            DrumType::Clap => &mut self.clap,
            DrumType::Rim => &mut self.rim,
        }
    }
}

/// A complete kit: every one of the 46 parameter values under a name.
///
/// # TOML Format
///
/// ```toml
/// name = "Dry Room Kit"
///
/// [global]
/// tune = -1.4
/// decay = 0.58
/// tone = 0.72
/// drive = 0.48
/// hatLength = 0.28
/// swing = 0.1
///
/// [drums.kick]
/// level = 1.32
/// tune = -2.8
/// decay = 0.54
/// tone = 0.58
/// drive = 0.7
///
/// [drums.closedHat]
/// level = 0.92
/// ```
///
/// Any omitted value takes the [`GlobalSettings`] / [`DrumSettings`] default.
/// Out-of-range values are accepted in the file and clamped on
/// [`apply`](Self::apply).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KitPreset {
    /// Display name.
    pub name: String,

    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Kit-wide values.
    #[serde(default)]
    pub global: GlobalSettings,

    /// Per-lane values.
    #[serde(default)]
    pub drums: KitDrums,
}

impl KitPreset {
    /// Neutral kit with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            global: GlobalSettings::default(),
            drums: KitDrums::default(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Preset holding the values of a parameter snapshot.
    pub fn from_snapshot(name: impl Into<String>, snapshot: &ParamSnapshot) -> Self {
        let g = &snapshot.global;
        let mut preset = Self::new(name);
        preset.global = GlobalSettings {
            tune: g.tune,
            decay: g.decay,
            tone: g.tone,
            drive: g.drive,
            hat_length: g.hat_length,
            swing: g.swing,
        };
        for drum in DrumType::ALL {
            let d = snapshot.drum(drum);
            *preset.drums.get_mut(drum) = DrumSettings {
                level: d.level,
                tune: d.tune,
                decay: d.decay,
                tone: d.tone,
                drive: d.drive,
            };
        }
        preset
    }

    /// Preset holding the current values of `control`.
    pub fn capture(name: impl Into<String>, control: &KitControl) -> Self {
        Self::from_snapshot(name, &control.snapshot())
    }

    /// All 46 values in flat parameter-index order.
    pub fn to_values(&self) -> [f32; PARAM_COUNT] {
        let mut values = [0.0; PARAM_COUNT];
        let g = &self.global;
        values[GlobalParam::Tune.index()] = g.tune;
        values[GlobalParam::Decay.index()] = g.decay;
        values[GlobalParam::Tone.index()] = g.tone;
        values[GlobalParam::Drive.index()] = g.drive;
        values[GlobalParam::HatLength.index()] = g.hat_length;
        values[GlobalParam::Swing.index()] = g.swing;

        for drum in DrumType::ALL {
            let d = self.drums.get(drum);
            values[DrumParam::Level.index(drum)] = d.level;
            values[DrumParam::Tune.index(drum)] = d.tune;
            values[DrumParam::Decay.index(drum)] = d.decay;
            values[DrumParam::Tone.index(drum)] = d.tone;
            values[DrumParam::Drive.index(drum)] = d.drive;
        }
        values
    }

    /// Write every value into `control`, clamped to each parameter's range.
    ///
    /// Returns how many writes were accepted; non-finite values are skipped.
    pub fn apply(&self, control: &KitControl) -> usize {
        self.to_values()
            .iter()
            .enumerate()
            .filter(|&(index, &value)| control.set_param_by_index(index, value))
            .count()
    }

    /// Load a preset from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Load a preset from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the preset to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        write_with_parents(path.as_ref(), &self.to_toml()?)
    }

    /// Convert the preset to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for KitPreset {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_take_defaults() {
        let preset = KitPreset::from_toml(
            r#"
            name = "Sparse"
            [global]
            swing = 0.5
            [drums.openHat]
            decay = 1.6
            "#,
        )
        .unwrap();

        assert_eq!(preset.name, "Sparse");
        assert_eq!(preset.global.swing, 0.5);
        assert_eq!(preset.global.drive, 0.25);
        assert_eq!(preset.drums.open_hat.decay, 1.6);
        assert_eq!(preset.drums.open_hat.drive, 0.2);
        assert_eq!(preset.drums.kick, DrumSettings::default());
    }

    #[test]
    fn test_lane_keys_match_param_prefixes() {
        let text = KitPreset::new("Keys").to_toml().unwrap();
        for drum in DrumType::ALL {
            assert!(
                text.contains(&format!("[drums.{}]", drum.id_prefix())),
                "missing table for {}",
                drum.id_prefix()
            );
        }
        assert!(text.contains("hatLength"));
    }

    #[test]
    fn test_to_values_layout() {
        let mut preset = KitPreset::new("Layout");
        preset.global.hat_length = 1.7;
        preset.drums.rim.drive = 0.9;
        let values = preset.to_values();
        assert_eq!(values[4], 1.7);
        assert_eq!(values[PARAM_COUNT - 1], 0.9);
        assert_eq!(values[6], 1.0); // kick level
    }

    #[test]
    fn test_apply_clamps_out_of_range() {
        let control = KitControl::new();
        let mut preset = KitPreset::new("Hot");
        preset.drums.kick.level = 4.0;
        preset.global.tune = -40.0;

        assert_eq!(preset.apply(&control), PARAM_COUNT);
        assert_eq!(control.param("kickLevel"), Some(1.5));
        assert_eq!(control.param("tune"), Some(-12.0));
        assert_eq!(control.param("hatLength"), Some(1.0));
    }

    #[test]
    fn test_apply_skips_non_finite() {
        let control = KitControl::new();
        let mut preset = KitPreset::new("Broken");
        preset.drums.snare.tone = f32::NAN;

        assert_eq!(preset.apply(&control), PARAM_COUNT - 1);
        assert_eq!(control.param("snareTone"), Some(0.5));
    }

    #[test]
    fn test_capture_matches_control() {
        let control = KitControl::new();
        control.set_param("clapTune", 3.5);
        control.set_param("swing", 0.4);

        let preset = KitPreset::capture("Now", &control);
        assert_eq!(preset.drums.clap.tune, 3.5);
        assert_eq!(preset.global.swing, 0.4);
        assert_eq!(preset.drums.kick.level, 1.12);
    }
}
