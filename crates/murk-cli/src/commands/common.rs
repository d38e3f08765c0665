//! Shared CLI helpers used across multiple commands.

use murk_config::{KitPreset, find_preset};
use murk_kit::DrumType;
use std::path::Path;

/// One `--hit DRUM@SECONDS[:VELOCITY]` request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub drum: DrumType,
    pub seconds: f64,
    pub velocity: f32,
}

impl Hit {
    /// Velocity as a MIDI data byte (1..=127).
    pub fn midi_velocity(&self) -> u8 {
        (self.velocity * 127.0).round().clamp(1.0, 127.0) as u8
    }

    /// Absolute sample position at `sample_rate`.
    pub fn sample_position(&self, sample_rate: u32) -> u64 {
        (self.seconds * f64::from(sample_rate)).round() as u64
    }
}

/// Parse a `key=value` string for clap's `value_parser`.
pub fn parse_key_val(s: &str) -> Result<(String, f32), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("Invalid parameter format: '{}' (expected key=value)", s))?;
    let value = value
        .trim()
        .parse::<f32>()
        .map_err(|_| format!("Invalid value for '{}': '{}'", key, value))?;
    Ok((key.trim().to_string(), value))
}

/// Parse `DRUM@SECONDS[:VELOCITY]`, e.g. `kick@0`, `closedHat@0.25:0.6`.
///
/// Drum names are parameter prefixes, matched without case. Velocity is
/// 0..1 and defaults to 1.
pub fn parse_hit(s: &str) -> Result<Hit, String> {
    let (drum, when) = s
        .split_once('@')
        .ok_or_else(|| format!("Invalid hit '{}' (expected DRUM@SECONDS[:VELOCITY])", s))?;

    let drum = DrumType::from_id_prefix(drum.trim()).ok_or_else(|| {
        let names: Vec<_> = DrumType::ALL.iter().map(|d| d.id_prefix()).collect();
        format!("Unknown drum '{}' (expected one of: {})", drum, names.join(", "))
    })?;

    let (seconds, velocity) = when
        .split_once(':')
        .map_or((when, None), |(t, v)| (t, Some(v)));
    let seconds = seconds
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|t| t.is_finite() && *t >= 0.0)
        .ok_or_else(|| format!("Invalid hit time '{}' (expected seconds >= 0)", seconds))?;
    let velocity = velocity.map_or(Ok(1.0), |v| {
        v.trim()
            .parse::<f32>()
            .ok()
            .filter(|v| (0.0..=1.0).contains(v))
            .ok_or_else(|| format!("Invalid velocity '{}' (expected 0..1)", v))
    })?;

    Ok(Hit {
        drum,
        seconds,
        velocity,
    })
}

/// Load a kit by factory name or TOML path.
pub fn load_preset(name: &str) -> anyhow::Result<KitPreset> {
    if let Ok(preset) = find_preset(name) {
        return Ok(preset);
    }

    let path = Path::new(name);
    if path.exists() {
        return KitPreset::load(path).map_err(|e| anyhow::anyhow!("{}", e));
    }

    anyhow::bail!(
        "Preset '{}' not found. Use 'murk presets list' to see available presets.",
        name
    )
}
