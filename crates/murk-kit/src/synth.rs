//! The eight drum algorithms and the shared per-voice post chain.
//!
//! Every drum is a closed-form function of elapsed time `t` (seconds since
//! the voice started) plus a little oscillator and noise state carried in
//! [`Oscillators`]. [`generate`] produces one raw sample and reports whether
//! the voice is still sounding; [`post_process`] then applies the voice tone
//! filter, drive, velocity, and level.
//!
//! Envelope shapes are built from [`exp_decay`] and [`smooth_attack`]. Decay
//! time constants scale with `decay_mul` (global × drum decay) and, for hats
//! and cymbals, with the global hat length too.
//!
//! # Termination
//!
//! Each drum goes silent once `t` exceeds its threshold. The sample that
//! crosses the threshold is still rendered; the voice is retired afterwards.
//!
//! | Drum | Threshold (s) |
//! |------|---------------|
//! | Kick | 0.52·d |
//! | Snare | 0.34·d |
//! | Closed Hat | 0.10·d·h |
//! | Open Hat | 0.24·d·h |
//! | Crash | 0.30·d·h |
//! | Ride | 0.34·d·h |
//! | Clap | 0.34·d |
//! | Rim | 0.18·d |

use core::f32::consts::TAU;

use libm::sinf;
use murk_core::{
    OnePole, Xorshift32, drive_stage, exp_decay, lerp, semitones_to_ratio, smooth_attack,
    soft_clip,
};

use crate::drum::{DRUM_COUNT, DrumType};
use crate::params::{DrumParams, GlobalParams, ParamSnapshot};

/// Per-drum values derived from one parameter snapshot.
///
/// Computed once per block so the per-sample path does no `pow` calls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrumContext {
    /// Output level.
    pub level: f32,
    /// Frequency ratio from global + drum tune.
    pub tune_mul: f32,
    /// Global decay × drum decay.
    pub decay_mul: f32,
    /// Global hat length.
    pub hat_mul: f32,
    /// Voice tone filter coefficient.
    pub tone_coeff: f32,
    /// Mix between filtered and raw signal (1 = raw).
    pub tone_blend: f32,
    /// Voice drive gain.
    pub drive_gain: f32,
}

impl DrumContext {
    /// Derive a lane's context from global and lane values.
    pub fn new(global: &GlobalParams, drum: &DrumParams) -> Self {
        Self {
            level: drum.level,
            tune_mul: semitones_to_ratio(global.tune + drum.tune),
            decay_mul: global.decay * drum.decay,
            hat_mul: global.hat_length,
            tone_coeff: lerp(0.02, 0.62, drum.tone),
            tone_blend: drum.tone.clamp(0.0, 1.0),
            drive_gain: 1.0 + 6.6 * drum.drive,
        }
    }
}

/// Everything the voices need to render one block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockContext {
    /// Sample rate in Hz.
    pub sample_rate: f32,
    /// Per-lane contexts, indexed by [`DrumType::index`].
    pub drums: [DrumContext; DRUM_COUNT],
}

impl BlockContext {
    /// Derive the block context from a snapshot.
    pub fn new(snapshot: &ParamSnapshot, sample_rate: f32) -> Self {
        Self {
            sample_rate,
            drums: core::array::from_fn(|lane| {
                DrumContext::new(&snapshot.global, &snapshot.drums[lane])
            }),
        }
    }

    /// Context for one drum lane.
    #[inline]
    pub fn drum(&self, drum: DrumType) -> &DrumContext {
        &self.drums[drum.index()]
    }
}

/// Oscillator and noise state owned by one voice.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Oscillators {
    /// Three phase accumulators, radians.
    pub phases: [f32; 3],
    /// Noise source.
    pub noise: Xorshift32,
}

/// One raw sample from a drum algorithm.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrumSample {
    /// Raw (pre tone/drive) value.
    pub value: f32,
    /// `false` once `t` has passed the drum's termination threshold.
    pub sounding: bool,
}

#[inline]
fn advance(phase: &mut f32, freq: f32, sample_rate: f32) {
    *phase += TAU * freq / sample_rate;
}

/// Render one raw sample of `drum` at time `t`.
#[inline]
pub fn generate(
    drum: DrumType,
    osc: &mut Oscillators,
    t: f32,
    ctx: &DrumContext,
    sample_rate: f32,
) -> DrumSample {
    match drum {
        DrumType::Kick => kick(osc, t, ctx, sample_rate),
        DrumType::Snare => snare(osc, t, ctx, sample_rate),
        DrumType::ClosedHat => closed_hat(osc, t, ctx, sample_rate),
        DrumType::OpenHat => open_hat(osc, t, ctx, sample_rate),
        DrumType::Crash => crash(osc, t, ctx, sample_rate),
        DrumType::Ride => ride(osc, t, ctx, sample_rate),
        DrumType::Clap => clap(osc, t, ctx),
        DrumType::Rim => rim(osc, t, ctx, sample_rate),
    }
}

/// Seconds after which `drum` stops sounding under `ctx`.
pub fn termination_time(drum: DrumType, ctx: &DrumContext) -> f32 {
    let d = ctx.decay_mul;
    let h = ctx.hat_mul;
    match drum {
        DrumType::Kick => 0.52 * d,
        DrumType::Snare => 0.34 * d,
        DrumType::ClosedHat => 0.10 * d * h,
        DrumType::OpenHat => 0.24 * d * h,
        DrumType::Crash => 0.30 * d * h,
        DrumType::Ride => 0.34 * d * h,
        DrumType::Clap => 0.34 * d,
        DrumType::Rim => 0.18 * d,
    }
}

fn kick(osc: &mut Oscillators, t: f32, ctx: &DrumContext, sr: f32) -> DrumSample {
    let d = ctx.decay_mul;
    let freq = (46.0 + 300.0 * exp_decay(t, 0.010 * d)) * ctx.tune_mul;
    let amp = exp_decay(t, 0.14 * d);
    let click = exp_decay(t, 0.0019) * osc.noise.next_sample();
    let [a, b, _] = &mut osc.phases;
    advance(a, freq, sr);
    advance(b, freq * 0.5, sr);
    let thump = sinf(*a) * amp;
    let sub = sinf(*b) * exp_decay(t, 0.16 * d);
    DrumSample {
        value: thump * 1.02 + sub * 0.60 + 0.66 * click,
        sounding: t <= 0.52 * d,
    }
}

fn snare(osc: &mut Oscillators, t: f32, ctx: &DrumContext, sr: f32) -> DrumSample {
    let d = ctx.decay_mul;
    let body_amp = exp_decay(t, 0.082 * d);
    let noise_amp = exp_decay(t, 0.058 * d);
    let body_freq = (238.0 + 130.0 * exp_decay(t, 0.009 * d)) * ctx.tune_mul;
    advance(&mut osc.phases[0], body_freq, sr);
    let body = sinf(osc.phases[0]) * body_amp;
    let noise = osc.noise.next_sample() * noise_amp;
    let crack = exp_decay(t, 0.0024) * osc.noise.next_sample();
    DrumSample {
        value: 0.90 * body + 0.66 * noise + 0.94 * crack,
        sounding: t <= 0.34 * d,
    }
}

// Hats read their partials before advancing the phases.
fn closed_hat(osc: &mut Oscillators, t: f32, ctx: &DrumContext, sr: f32) -> DrumSample {
    let dh = ctx.decay_mul * ctx.hat_mul;
    let env = exp_decay(t, 0.018 * dh);
    let n = osc.noise.next_sample();
    let [a, b, _] = &mut osc.phases;
    let metal = sinf(*a) + sinf(*b * 1.733);
    advance(a, 7340.0 * ctx.tune_mul, sr);
    advance(b, 9170.0 * ctx.tune_mul, sr);
    DrumSample {
        value: (0.62 * n + 0.38 * metal) * env,
        sounding: t <= 0.10 * dh,
    }
}

fn open_hat(osc: &mut Oscillators, t: f32, ctx: &DrumContext, sr: f32) -> DrumSample {
    let dh = ctx.decay_mul * ctx.hat_mul;
    let env = exp_decay(t, 0.045 * dh);
    let n = osc.noise.next_sample();
    let [a, b, c] = &mut osc.phases;
    let metal = sinf(*a) + 0.7 * sinf(*b * 1.91) + 0.4 * sinf(*c * 2.27);
    advance(a, 6100.0 * ctx.tune_mul, sr);
    advance(b, 7420.0 * ctx.tune_mul, sr);
    advance(c, 9030.0 * ctx.tune_mul, sr);
    DrumSample {
        value: (0.42 * n + 0.58 * metal) * env,
        sounding: t <= 0.24 * dh,
    }
}

fn crash(osc: &mut Oscillators, t: f32, ctx: &DrumContext, sr: f32) -> DrumSample {
    let dh = ctx.decay_mul * ctx.hat_mul;
    let env = exp_decay(t, 0.18 * dh) * smooth_attack(t, 0.002);
    let n = osc.noise.next_sample() * exp_decay(t, 0.095 * dh);
    let [a, b, c] = &mut osc.phases;
    advance(a, 4540.0 * ctx.tune_mul, sr);
    advance(b, 5920.0 * ctx.tune_mul, sr);
    advance(c, 7440.0 * ctx.tune_mul, sr);
    let partials = 0.64 * sinf(*a) + 0.38 * sinf(*b) + 0.18 * sinf(*c);
    DrumSample {
        value: (0.22 * n + 0.78 * partials) * env,
        sounding: t <= 0.30 * dh,
    }
}

fn ride(osc: &mut Oscillators, t: f32, ctx: &DrumContext, sr: f32) -> DrumSample {
    let d = ctx.decay_mul;
    let dh = d * ctx.hat_mul;
    let env = exp_decay(t, 0.19 * dh) * smooth_attack(t, 0.0018);
    let n = osc.noise.next_sample() * exp_decay(t, 0.085 * dh);
    let [a, b, _] = &mut osc.phases;
    advance(a, 3890.0 * ctx.tune_mul, sr);
    advance(b, 5280.0 * ctx.tune_mul, sr);
    let ping = sinf(*a) * exp_decay(t, 0.10 * d);
    let tail = 0.20 * sinf(*b) * exp_decay(t, 0.15 * d);
    DrumSample {
        value: (0.20 * n + ping + tail) * env,
        sounding: t <= 0.34 * dh,
    }
}

fn clap(osc: &mut Oscillators, t: f32, ctx: &DrumContext) -> DrumSample {
    let d = ctx.decay_mul;
    let burst1 = exp_decay(t, 0.015 * d);
    let burst2 = exp_decay((t - 0.012 * d).max(0.0), 0.013 * d);
    let burst3 = exp_decay((t - 0.022 * d).max(0.0), 0.028 * d);
    let env = (burst1 + burst2 + burst3).min(1.0);
    DrumSample {
        value: osc.noise.next_sample() * env,
        sounding: t <= 0.34 * d,
    }
}

fn rim(osc: &mut Oscillators, t: f32, ctx: &DrumContext, sr: f32) -> DrumSample {
    let d = ctx.decay_mul;
    let env = exp_decay(t, 0.050 * d);
    let [a, b, _] = &mut osc.phases;
    advance(a, 940.0 * ctx.tune_mul, sr);
    advance(b, 1490.0 * ctx.tune_mul, sr);
    let tone = sinf(*a) + 0.6 * sinf(*b);
    let tick = exp_decay(t, 0.0032) * osc.noise.next_sample();
    DrumSample {
        value: (0.78 * tone + 0.50 * tick) * env,
        sounding: t <= 0.18 * d,
    }
}

/// Voice post chain: tone filter, drive, velocity, and level.
///
/// The result passes through a final `tanh`, so it never exceeds ±1.
#[inline]
pub fn post_process(raw: f32, tone: &mut OnePole, ctx: &DrumContext, velocity: f32) -> f32 {
    tone.set_coeff(ctx.tone_coeff);
    let filtered = tone.process(raw);
    let toned = lerp(filtered, raw, ctx.tone_blend);
    let driven = drive_stage(toned, ctx.drive_gain);
    soft_clip(driven * (0.35 + 0.65 * velocity) * ctx.level)
}
