//! Presets and persisted state for the murk drum machine.
//!
//! - **Kit presets**: all 46 values under a name, stored as TOML
//! - **Factory kits**: eighteen built-in presets with wrapping menu navigation
//! - **State**: flat id → value map for session save and restore
//!
//! # Example
//!
//! ```rust,no_run
//! use murk_config::{KitPreset, KitState, find_preset};
//! use murk_kit::KitControl;
//!
//! let control = KitControl::new();
//! find_preset("Tight Pocket").unwrap().apply(&control);
//! control.set_param("kickDecay", 0.9);
//!
//! // Keep the tweak as a user kit
//! KitPreset::capture("Tighter Pocket", &control)
//!     .save("kits/tighter_pocket.toml")
//!     .unwrap();
//!
//! // Or persist the raw session state
//! KitState::capture(&control).save("session.toml").unwrap();
//! ```

mod error;
mod preset;
mod state;

/// Factory kits bundled with the library.
pub mod factory_presets;

pub use error::ConfigError;
pub use factory_presets::{
    FACTORY_PRESET_COUNT, factory_preset, factory_preset_names, factory_presets, find_preset,
    preset_index, step_preset,
};
pub use preset::{DrumSettings, GlobalSettings, KitDrums, KitPreset};
pub use state::KitState;
