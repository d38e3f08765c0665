//! Persisted engine state: every parameter under its string id.
//!
//! Hosts save this alongside a session and restore it on load. The flat map
//! survives parameter-table growth: keys the engine no longer knows are
//! skipped on restore, and parameters missing from the file keep their
//! current value.
//!
//! ```toml
//! [params]
//! clapDecay = 1.0
//! kickLevel = 1.12
//! swing = 0.25
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use murk_kit::KitControl;

use crate::error::{ConfigError, write_with_parents};

/// Snapshot of all parameters, keyed by string id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct KitState {
    /// Parameter values by string id.
    #[serde(default)]
    pub params: BTreeMap<String, f32>,
}

impl KitState {
    /// Read every parameter from `control`.
    pub fn capture(control: &KitControl) -> Self {
        let params = (0..control.param_count())
            .filter_map(|i| {
                let desc = control.descriptor(i)?;
                Some((desc.string_id.to_string(), control.param_by_index(i)?))
            })
            .collect();
        Self { params }
    }

    /// Write the stored values into `control`.
    ///
    /// Unknown keys and non-finite values are ignored; the rest are clamped.
    /// Returns how many values were applied.
    pub fn restore(&self, control: &KitControl) -> usize {
        self.params
            .iter()
            .filter(|&(id, &value)| control.set_param(id, value))
            .count()
    }

    /// Stored value for a string id.
    pub fn get(&self, id: &str) -> Option<f32> {
        self.params.get(id).copied()
    }

    /// Load state from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Convert the state to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load state from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Save state to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        write_with_parents(path.as_ref(), &self.to_toml()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use murk_kit::PARAM_COUNT;

    #[test]
    fn test_capture_has_every_param() {
        let control = KitControl::new();
        control.set_param("rideTone", 0.9);
        let state = KitState::capture(&control);
        assert_eq!(state.params.len(), PARAM_COUNT);
        assert_eq!(state.get("rideTone"), Some(0.9));
        assert_eq!(state.get("decay"), Some(0.78));
    }

    #[test]
    fn test_restore_skips_unknown_and_clamps() {
        let mut state = KitState::default();
        state.params.insert("snareDecay".into(), 9.0);
        state.params.insert("cowbellLevel".into(), 0.5);
        state.params.insert("tune".into(), f32::INFINITY);

        let control = KitControl::new();
        assert_eq!(state.restore(&control), 1);
        assert_eq!(control.param("snareDecay"), Some(2.0));
        assert_eq!(control.param("tune"), Some(0.0));
    }

    #[test]
    fn test_partial_state_leaves_other_params() {
        let control = KitControl::new();
        control.set_param("kickTune", -3.0);
        let state = KitState::from_toml("[params]\nswing = 0.5\n").unwrap();
        assert_eq!(state.restore(&control), 1);
        assert_eq!(control.param("swing"), Some(0.5));
        assert_eq!(control.param("kickTune"), Some(-3.0));
    }

    #[test]
    fn test_empty_document_is_empty_state() {
        let state = KitState::from_toml("").unwrap();
        assert!(state.params.is_empty());
    }
}
