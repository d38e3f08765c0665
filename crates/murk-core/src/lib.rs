//! Murk Core - DSP primitives for the murk drum machine
//!
//! This crate provides the small, allocation-free building blocks the drum
//! voices and master bus are made of.
//!
//! # Core Abstractions
//!
//! ## Signal Generation
//!
//! - [`Xorshift32`] - Per-voice white noise source
//!
//! ## Filters
//!
//! - [`OnePole`] - Coefficient-form one-pole lowpass for tone darkening
//!
//! ## Timing
//!
//! - [`TransportInfo`] - Host tempo and beat position for one block
//! - [`NoteDivision`] - Musical divisions converted to samples
//! - [`swing_offset`] - Off-beat eighth delay for shuffled timing
//!
//! ## Parameters
//!
//! - [`ParamDescriptor`] - Range, default, and identity of one control
//!
//! ## Utilities
//!
//! - Math functions: [`soft_clip`], [`exp_decay`], [`smooth_attack`],
//!   [`drive_stage`], [`lerp`], [`semitones_to_ratio`]
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! murk-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Design Principles
//!
//! - **Real-time safe**: No allocations in audio processing paths
//! - **No dependencies on std**: Pure `no_std` with `libm` for math

#![cfg_attr(not(feature = "std"), no_std)]

pub mod math;
pub mod noise;
pub mod one_pole;
pub mod param_info;
pub mod tempo;

// Re-export main types at crate root
pub use math::{
    MIN_TIME_CONSTANT, drive_stage, exp_decay, flush_denormal, lerp, semitones_to_ratio,
    smooth_attack, soft_clip,
};
pub use noise::Xorshift32;
pub use one_pole::OnePole;
pub use param_info::{ParamDescriptor, ParamId, ParamUnit};
pub use tempo::{
    MAX_SWING_FRACTION, NoteDivision, SWING_THRESHOLD, TransportInfo, max_swing_samples,
    swing_offset,
};
