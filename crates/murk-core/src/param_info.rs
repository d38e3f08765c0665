//! Parameter metadata for discoverable, host-automatable controls.
//!
//! Every control the kit exposes is described by a [`ParamDescriptor`]:
//! display names, a stable string id used as the persistence key, a
//! numeric [`ParamId`] for hosts, and the plain-value range with its default.
//!
//! Values cross the host boundary either as plain values (semitones,
//! multipliers, 0–1 amounts) or normalized to `[0.0, 1.0]`. The descriptor
//! owns the conversion and the clamping, so out-of-range writes from a host
//! or a stale state file are always pulled back into range.
//!
//! # Example
//!
//! ```rust
//! use murk_core::{ParamDescriptor, ParamId, ParamUnit};
//!
//! let tune = ParamDescriptor::new("Tune", "Tune", ParamUnit::Semitones, -12.0, 12.0, 0.0)
//!     .with_id(ParamId(0), "tune");
//!
//! assert_eq!(tune.normalize(0.0), 0.5);
//! assert_eq!(tune.denormalize(1.0), 12.0);
//! assert_eq!(tune.clamp(40.0), 12.0);
//! ```
//!
//! # no_std Support
//!
//! This module is fully `no_std` compatible with no heap allocations required.

/// Stable parameter identifier that survives reordering.
///
/// Used by hosts for automation recording and by the state format.
/// Once assigned, a `ParamId` must never change for a given parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParamId(pub u32);

/// Unit of a parameter's plain value, used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamUnit {
    /// Pitch offset in semitones.
    Semitones,
    /// Scaling factor applied to a time constant (e.g. decay).
    Multiplier,
    /// Linear output gain.
    Gain,
    /// Unitless amount in `[0, 1]`.
    Amount,
}

impl ParamUnit {
    /// Short display suffix for the unit.
    pub fn suffix(&self) -> &'static str {
        match self {
            ParamUnit::Semitones => "st",
            ParamUnit::Multiplier => "x",
            ParamUnit::Gain => "",
            ParamUnit::Amount => "",
        }
    }
}

/// Describes a single parameter's metadata for display and validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Full parameter name for display (e.g., "Kick Decay").
    pub name: &'static str,

    /// Short name for compact displays (e.g., "Decay").
    pub short_name: &'static str,

    /// Unit type for formatting the parameter value.
    pub unit: ParamUnit,

    /// Minimum allowed value.
    pub min: f32,

    /// Maximum allowed value.
    pub max: f32,

    /// Default value when the kit is created or reset.
    pub default: f32,

    /// Recommended step increment for editors.
    pub step: f32,

    /// Stable numeric ID for host automation.
    pub id: ParamId,

    /// Human-readable stable ID, also the persistence key (e.g. `"kickDecay"`).
    pub string_id: &'static str,

    /// Parameter group for host tree display (e.g. `"global"`, `"kick"`).
    pub group: &'static str,
}

impl ParamDescriptor {
    /// Create a descriptor with a continuous linear range.
    ///
    /// The step defaults to 1/1000 of the range.
    pub const fn new(
        name: &'static str,
        short_name: &'static str,
        unit: ParamUnit,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            short_name,
            unit,
            min,
            max,
            default,
            step: (max - min) / 1000.0,
            id: ParamId(0),
            string_id: "",
            group: "",
        }
    }

    /// Set the stable numeric and string identifiers.
    pub const fn with_id(mut self, id: ParamId, string_id: &'static str) -> Self {
        self.id = id;
        self.string_id = string_id;
        self
    }

    /// Set the editor step size.
    pub const fn with_step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    /// Set the parameter group.
    pub const fn with_group(mut self, group: &'static str) -> Self {
        self.group = group;
        self
    }

    /// Clamp a plain value into `[min, max]`.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Map a plain value to `[0.0, 1.0]`.
    #[inline]
    pub fn normalize(&self, value: f32) -> f32 {
        let range = self.max - self.min;
        if range == 0.0 {
            return 0.0;
        }
        ((self.clamp(value) - self.min) / range).clamp(0.0, 1.0)
    }

    /// Map a normalized value back to the plain range.
    #[inline]
    pub fn denormalize(&self, normalized: f32) -> f32 {
        self.clamp(self.min + normalized.clamp(0.0, 1.0) * (self.max - self.min))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decay() -> ParamDescriptor {
        ParamDescriptor::new("Decay", "Decay", ParamUnit::Multiplier, 0.2, 1.8, 0.78)
            .with_id(ParamId(1), "decay")
            .with_group("global")
    }

    #[test]
    fn test_builder_sets_ids() {
        let d = decay();
        assert_eq!(d.id, ParamId(1));
        assert_eq!(d.string_id, "decay");
        assert_eq!(d.group, "global");
        assert!((d.step - 0.0016).abs() < 1e-6);
        assert_eq!(d.with_step(0.01).step, 0.01);
    }

    #[test]
    fn test_clamp() {
        let d = decay();
        assert_eq!(d.clamp(0.0), 0.2);
        assert_eq!(d.clamp(5.0), 1.8);
        assert_eq!(d.clamp(1.0), 1.0);
    }

    #[test]
    fn test_normalize_endpoints() {
        let d = decay();
        assert_eq!(d.normalize(0.2), 0.0);
        assert_eq!(d.normalize(1.8), 1.0);
        assert_eq!(d.normalize(-3.0), 0.0);
        assert_eq!(d.denormalize(0.0), 0.2);
        assert_eq!(d.denormalize(1.0), 1.8);
        assert_eq!(d.denormalize(7.0), 1.8);
    }

    #[test]
    fn test_normalize_midpoint() {
        let d = decay();
        assert!((d.denormalize(0.5) - 1.0).abs() < 1e-6);
        assert!((d.normalize(1.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_unit_suffix() {
        assert_eq!(ParamUnit::Semitones.suffix(), "st");
        assert_eq!(ParamUnit::Amount.suffix(), "");
    }
}
